//! Potential model composition
//!
//! Binds a kernel, its validated parameters, and a unit system into one
//! callable object with a uniform contract. G is resolved from the unit
//! system exactly once, here; after construction the model is immutable
//! and can be shared read-only across threads.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::PotentialError;
use crate::potential::hernquist::Hernquist;
use crate::potential::kernel::{NMat3, NVec3, Potential};
use crate::potential::lee_suto::LeeSutoNfw;
use crate::potential::miyamoto_nagai::MiyamotoNagai;
use crate::potential::params::PhysicalParameters;
use crate::units::units::UnitSystem;

/// Which analytic model a [`PotentialModel`] wraps
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelKind {
    #[serde(rename = "hernquist")]
    Hernquist,

    #[serde(rename = "miyamoto_nagai")]
    MiyamotoNagai,

    #[serde(rename = "lee_suto_nfw")]
    LeeSutoNfw,
}

/// A fully-constructed potential model: boxed kernel + frozen parameters.
///
/// Evaluation delegates straight to the kernel; `parameters()` exposes a
/// read-only snapshot (name -> value, including the resolved `"G"`) for
/// reporting. Mutating that snapshot cannot reach the kernel.
pub struct PotentialModel {
    kind: KernelKind,
    kernel: Box<dyn Potential + Send + Sync>,
    params: PhysicalParameters,
}

impl std::fmt::Debug for PotentialModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PotentialModel")
            .field("kind", &self.kind)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl PotentialModel {
    /// Build a model of `kind` from raw parameters expressed in `units`.
    /// Resolves G once, validates the parameters against the kernel's
    /// declared set, and freezes everything.
    pub fn new(
        kind: KernelKind,
        raw: &BTreeMap<String, f64>,
        units: &UnitSystem,
    ) -> Result<Self, PotentialError> {
        let g = units.gravitational_constant();

        let (kernel, params): (Box<dyn Potential + Send + Sync>, _) = match kind {
            KernelKind::Hernquist => {
                let params = PhysicalParameters::resolve(g, raw, Hernquist::SPECS)?;
                (Box::new(Hernquist::from_params(&params)), params)
            }
            KernelKind::MiyamotoNagai => {
                let params = PhysicalParameters::resolve(g, raw, MiyamotoNagai::SPECS)?;
                (Box::new(MiyamotoNagai::from_params(&params)), params)
            }
            KernelKind::LeeSutoNfw => {
                let params = PhysicalParameters::resolve(g, raw, LeeSutoNfw::SPECS)?;
                (Box::new(LeeSutoNfw::from_params(&params)), params)
            }
        };

        Ok(Self {
            kind,
            kernel,
            params,
        })
    }

    pub fn kind(&self) -> KernelKind {
        self.kind
    }

    /// Read-only parameter snapshot (includes the resolved `"G"`)
    pub fn parameters(&self) -> BTreeMap<String, f64> {
        self.params.as_map()
    }

    /// Scalar potential at each position, written into `out`
    pub fn value(&self, pos: &[NVec3], out: &mut [f64]) -> Result<(), PotentialError> {
        self.kernel.value(pos, out)
    }

    /// Potential gradient at each position (acceleration is its negation)
    pub fn gradient(&self, pos: &[NVec3], out: &mut [NVec3]) -> Result<(), PotentialError> {
        self.kernel.gradient(pos, out)
    }

    /// Second derivatives; fails with `NotImplemented` for kernels lacking
    /// a closed form (all current ones)
    pub fn hessian(&self, pos: &[NVec3], out: &mut [NMat3]) -> Result<(), PotentialError> {
        self.kernel.hessian(pos, out)
    }
}
