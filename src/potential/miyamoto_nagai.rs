//! Miyamoto-Nagai flattened disk potential
//!
//! Axisymmetric disk model:
//!     zd  = a + sqrt(z^2 + b^2)
//!     Phi = -G m / sqrt(x^2 + y^2 + zd^2)
//! `a` sets the radial scale, `b` the vertical thickness. For b > 0 the
//! model is smooth everywhere; b = 0 degenerates to the razor-thin Kuzmin
//! disk (valid, but with a |z| kink at the midplane that is not handled
//! specially).

use crate::error::PotentialError;
use crate::potential::kernel::{check_lengths, NVec3, Potential};
use crate::potential::params::{ParamSpec, PhysicalParameters};

/// Miyamoto-Nagai kernel: mass `m`, radial scale `a`, vertical scale `b`
/// (stored as `gm = G*m` and `b2 = b^2`, derived once at construction)
#[derive(Debug, Clone)]
pub struct MiyamotoNagai {
    gm: f64,
    a: f64,
    b2: f64,
}

impl MiyamotoNagai {
    /// Parameters this kernel consumes
    pub const SPECS: &'static [ParamSpec] = &[
        ParamSpec::required("m"),
        ParamSpec::required("a"),
        ParamSpec::required("b"),
    ];

    pub fn from_params(p: &PhysicalParameters) -> Self {
        let b = p.get("b");
        Self {
            gm: p.get("G") * p.get("m"),
            a: p.get("a"),
            b2: b * b,
        }
    }
}

impl Potential for MiyamotoNagai {
    fn value(&self, pos: &[NVec3], out: &mut [f64]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        for (p, phi) in pos.iter().zip(out.iter_mut()) {
            let zd = self.a + (p.z * p.z + self.b2).sqrt();
            *phi = -self.gm / (p.x * p.x + p.y * p.y + zd * zd).sqrt();
        }
        Ok(())
    }

    fn gradient(&self, pos: &[NVec3], out: &mut [NVec3]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        for (p, g) in pos.iter().zip(out.iter_mut()) {
            let sqrtz = (p.z * p.z + self.b2).sqrt();
            let zd = self.a + sqrtz;
            let d2 = p.x * p.x + p.y * p.y + zd * zd;

            // fac = GM * (x^2 + y^2 + zd^2)^(-3/2)
            let fac = self.gm / (d2 * d2.sqrt());

            g.x = fac * p.x;
            g.y = fac * p.y;
            g.z = fac * p.z * (1.0 + self.a / sqrtz);
        }
        Ok(())
    }
}
