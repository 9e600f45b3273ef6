//! Hernquist spheroid potential
//!
//! Spherical model with a finite central density cusp:
//!     Phi(r) = -G m / (R + c),   R = |r|
//! Used for bulges and elliptical-like mass distributions.

use crate::error::PotentialError;
use crate::potential::kernel::{check_lengths, NVec3, Potential};
use crate::potential::params::{ParamSpec, PhysicalParameters};

/// Hernquist kernel: total mass `m`, scale length `c` (both folded into
/// the precomputed `gm = G*m` and `c` at construction)
#[derive(Debug, Clone)]
pub struct Hernquist {
    gm: f64,
    c: f64,
}

impl Hernquist {
    /// Parameters this kernel consumes
    pub const SPECS: &'static [ParamSpec] = &[
        ParamSpec::required("m"),
        ParamSpec::required_positive("c"),
    ];

    /// Build from validated parameters (G*m derived once here)
    pub fn from_params(p: &PhysicalParameters) -> Self {
        Self {
            gm: p.get("G") * p.get("m"),
            c: p.get("c"),
        }
    }
}

impl Potential for Hernquist {
    fn value(&self, pos: &[NVec3], out: &mut [f64]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        for (p, phi) in pos.iter().zip(out.iter_mut()) {
            let r = p.norm();
            // Phi = -GM / (R + c)
            *phi = -self.gm / (r + self.c);
        }
        Ok(())
    }

    fn gradient(&self, pos: &[NVec3], out: &mut [NVec3]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        for (p, g) in pos.iter().zip(out.iter_mut()) {
            let r = p.norm();
            let rc = r + self.c;

            // dPhi/dx_i = GM / ((R+c)^2 * R) * x_i
            // The 1/R factor is a genuine singularity at the origin: at
            // exactly r = 0 the IEEE inf/NaN result propagates unmasked.
            let fac = self.gm / (rc * rc * r);
            *g = fac * p;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn kernel(g: f64, m: f64, c: f64) -> Hernquist {
        let raw: BTreeMap<String, f64> =
            [("m".to_string(), m), ("c".to_string(), c)].into_iter().collect();
        let p = PhysicalParameters::resolve(g, &raw, Hernquist::SPECS).unwrap();
        Hernquist::from_params(&p)
    }

    #[test]
    fn unit_point_reference_values() {
        // G = m = c = 1 at (1,0,0): Phi = -1/2, grad = (1/4, 0, 0)
        let k = kernel(1.0, 1.0, 1.0);
        let pos = [NVec3::new(1.0, 0.0, 0.0)];
        let mut phi = [0.0];
        let mut grad = [NVec3::zeros()];

        k.value(&pos, &mut phi).unwrap();
        k.gradient(&pos, &mut grad).unwrap();

        assert!((phi[0] + 0.5).abs() < 1e-15);
        assert!((grad[0] - NVec3::new(0.25, 0.0, 0.0)).norm() < 1e-15);
    }

    #[test]
    fn value_is_spherically_symmetric() {
        let k = kernel(1.0, 2.5, 0.7);
        // Three points at the same radius sqrt(14)
        let pos = [
            NVec3::new(1.0, 2.0, 3.0),
            NVec3::new(3.0, 1.0, 2.0),
            NVec3::new(-2.0, 3.0, -1.0),
        ];
        let mut phi = [0.0; 3];
        k.value(&pos, &mut phi).unwrap();

        assert!((phi[0] - phi[1]).abs() < 1e-14);
        assert!((phi[0] - phi[2]).abs() < 1e-14);
    }

    #[test]
    fn empty_batch_is_noop() {
        let k = kernel(1.0, 1.0, 1.0);
        let mut phi: [f64; 0] = [];
        let mut grad: [NVec3; 0] = [];
        k.value(&[], &mut phi).unwrap();
        k.gradient(&[], &mut grad).unwrap();
    }
}
