//! Configuration types for describing a potential model in YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! model setup. A setup consists of:
//!
//! - [`ModelConfig`]  – which kernel to use and its physical parameters
//! - [`UnitsConfig`]  – the unit system the parameters are expressed in
//! - [`SetupConfig`]  – top-level wrapper, plus optional evaluation positions
//!                      consumed by the CLI driver
//!
//! # YAML format
//! An example setup YAML matching these types:
//!
//! ```yaml
//! model:
//!   kernel: lee_suto_nfw
//!   parameters:
//!     v_h: 0.5
//!     r_h: 10.0
//!     a: 1.0
//!     b: 0.9
//!     c: 0.7
//!     phi: 0.3       # z-x-z Euler angles, radians, default 0
//!
//! units: galactic    # or: si, or {length_m: ..., mass_kg: ..., time_s: ...}
//!
//! positions:         # optional, used by the CLI to print a table
//!   - [ 1.0, 0.0, 0.0 ]
//!   - [ 0.0, 5.0, 2.0 ]
//! ```
//!
//! The runtime model is built from this via [`build_model`].

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::PotentialError;
use crate::potential::kernel::NVec3;
use crate::potential::model::{KernelKind, PotentialModel};
use crate::units::units::UnitSystem;

/// Kernel choice plus raw physical parameters (name -> value)
#[derive(Deserialize, Debug)]
pub struct ModelConfig {
    pub kernel: KernelKind,
    pub parameters: BTreeMap<String, f64>,
}

/// Unit system selection: a named preset or explicit SI scale factors
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum UnitsConfig {
    Named(String),
    Custom(UnitSystem),
}

impl UnitsConfig {
    pub fn resolve(&self) -> Result<UnitSystem, PotentialError> {
        match self {
            UnitsConfig::Named(name) => match name.as_str() {
                "si" => Ok(UnitSystem::si()),
                "galactic" => Ok(UnitSystem::galactic()),
                "dimensionless" => Ok(UnitSystem::dimensionless()),
                other => Err(PotentialError::InvalidParameter {
                    name: "units".into(),
                    reason: format!("unknown unit system `{other}`"),
                }),
            },
            UnitsConfig::Custom(u) => Ok(u.clone()),
        }
    }
}

/// Top-level setup loaded from YAML
#[derive(Deserialize, Debug)]
pub struct SetupConfig {
    pub model: ModelConfig,
    pub units: UnitsConfig,
    #[serde(default)]
    pub positions: Vec<[f64; 3]>,
}

impl SetupConfig {
    /// Evaluation positions as runtime vectors
    pub fn positions(&self) -> Vec<NVec3> {
        self.positions
            .iter()
            .map(|p| NVec3::new(p[0], p[1], p[2]))
            .collect()
    }
}

/// Map a [`SetupConfig`] into a runtime [`PotentialModel`]
pub fn build_model(cfg: &SetupConfig) -> Result<PotentialModel, PotentialError> {
    let units = cfg.units.resolve()?;
    PotentialModel::new(cfg.model.kernel, &cfg.model.parameters, &units)
}
