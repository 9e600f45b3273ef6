//! Lee-Suto triaxial NFW potential
//!
//! Triaxial generalization of the NFW halo, to first order in the squared
//! ellipticities (Lee & Suto 2003, ApJ 585, 151). With u = r/r_h and the
//! radial functions
//!
//! ```text
//! F1(u) = -ln(1+u)/u
//! F2(u) = -1/3 + (2u^2 - 3u + 6)/(6u^2) + (1/u - 1/u^3) ln(1+u)
//! F3(u) = (u^2 - 3u - 6)/(2u^2(1+u)) + 3 ln(1+u)/u^3
//! ```
//!
//! the potential in the halo's principal-axis frame is
//!
//! ```text
//! Phi = v_h^2 [ F1 + (e_b^2+e_c^2)/2 F2
//!               + (e_b^2 y^2 + e_c^2 z^2)/(2 r^2) F3 ]
//! ```
//!
//! where e_b^2 = 1-(b/a)^2 and e_c^2 = 1-(c/a)^2. World positions are
//! rotated into the principal-axis frame before evaluation and gradients
//! rotated back afterwards. The gradient below is the exact derivative of
//! this expression; the subexpression grouping is deliberate and must not
//! be algebraically reshuffled (the F2/F3 terms cancel heavily at small u).
//! In the spherical limit b = c = a everything but F1 drops out and the
//! model reduces to Phi = -v_h^2 ln(1+u)/u.

use crate::error::PotentialError;
use crate::potential::frame::Frame;
use crate::potential::kernel::{check_lengths, NVec3, Potential};
use crate::potential::params::{ParamSpec, PhysicalParameters};

/// Lee-Suto kernel: characteristic velocity `v_h`, scale radius `r_h`,
/// shape axes `a >= b >= c`, and an optional z-x-z Euler rotation
/// (`phi`, `theta`, `psi`) aligning the halo with the world frame.
/// Derived quantities (`v_h^2`, squared ellipticities) are frozen at
/// construction.
#[derive(Debug, Clone)]
pub struct LeeSutoNfw {
    v_h2: f64,
    r_h: f64,
    e_b2: f64,
    e_c2: f64,
    frame: Frame,
}

impl LeeSutoNfw {
    /// Parameters this kernel consumes. The rotation angles default to
    /// zero, which keeps the frame at the exact identity.
    pub const SPECS: &'static [ParamSpec] = &[
        ParamSpec::required("v_h"),
        ParamSpec::required_positive("r_h"),
        ParamSpec::required_positive("a"),
        ParamSpec::required_positive("b"),
        ParamSpec::required_positive("c"),
        ParamSpec::optional("phi", 0.0),
        ParamSpec::optional("theta", 0.0),
        ParamSpec::optional("psi", 0.0),
    ];

    pub fn from_params(p: &PhysicalParameters) -> Self {
        let v_h = p.get("v_h");
        let a = p.get("a");
        let ba = p.get("b") / a;
        let ca = p.get("c") / a;
        Self {
            v_h2: v_h * v_h,
            r_h: p.get("r_h"),
            e_b2: 1.0 - ba * ba,
            e_c2: 1.0 - ca * ca,
            frame: Frame::from_euler(p.get("phi"), p.get("theta"), p.get("psi")),
        }
    }

    /// Scalar potential at one native-frame position
    #[inline]
    fn value_native(&self, q: &NVec3) -> f64 {
        let (x, y, z) = (q.x, q.y, q.z);
        let r2 = x * x + y * y + z * z;
        let r = r2.sqrt();
        let u = r / self.r_h;
        let u2 = u * u;
        let u3 = u2 * u;
        let lnu = u.ln_1p();

        let f1 = -lnu / u;
        let f2 = -1.0 / 3.0 + (2.0 * u2 - 3.0 * u + 6.0) / (6.0 * u2) + (1.0 / u - 1.0 / u3) * lnu;
        let f3 = (u2 - 3.0 * u - 6.0) / (2.0 * u2 * (1.0 + u)) + 3.0 * lnu / u3;

        // Quadrupole weight and its normalized form: q_w/(2r^2) is the
        // direction-dependent coefficient of F3. This is the y^2/r^2,
        // z^2/r^2 form rather than the trigonometric sin/cos one, so the
        // z axis (x = y = 0) is handled without a 0/0.
        let q_w = self.e_b2 * y * y + self.e_c2 * z * z;
        let s = q_w / (2.0 * r2);

        let alpha = 0.5 * (self.e_b2 + self.e_c2);
        self.v_h2 * (f1 + alpha * f2 + s * f3)
    }

    /// Potential gradient at one native-frame position (native components)
    #[inline]
    fn gradient_native(&self, q: &NVec3) -> NVec3 {
        let (x, y, z) = (q.x, q.y, q.z);
        let r2 = x * x + y * y + z * z;
        let r = r2.sqrt();
        let u = r / self.r_h;
        let u2 = u * u;
        let u3 = u2 * u;
        let u4 = u2 * u2;
        let lnu = u.ln_1p();
        let w = 1.0 / (1.0 + u);

        let f3 = (u2 - 3.0 * u - 6.0) / (2.0 * u2 * (1.0 + u)) + 3.0 * lnu / u3;

        // dF1/du, dF2/du, dF3/du, sharing lnu and w = 1/(1+u)
        let f1p = lnu / u2 - w / u;
        let f2p = 0.5 / u2 - 2.0 / u3 + (3.0 / u4 - 1.0 / u2) * lnu + (1.0 / u - 1.0 / u3) * w;
        let f3p = (-u3 + 6.0 * u2 + 21.0 * u + 12.0) / (2.0 * u3 * (1.0 + u) * (1.0 + u))
            + 3.0 * w / u3
            - 9.0 * lnu / u4;

        let q_w = self.e_b2 * y * y + self.e_c2 * z * z;
        let s = q_w / (2.0 * r2);
        let alpha = 0.5 * (self.e_b2 + self.e_c2);

        // Chain rule: the u-dependence contributes a common radial factor
        // (du/dx_i = x_i/(r r_h)), the direction weight s contributes
        // -x_i q_w/r^4 plus an axis-specific e^2 x_i / r^2 term on y and z
        let radial = (f1p + alpha * f2p + s * f3p) / (r * self.r_h) - f3 * q_w / (r2 * r2);

        NVec3::new(
            self.v_h2 * x * radial,
            self.v_h2 * (y * radial + f3 * self.e_b2 * y / r2),
            self.v_h2 * (z * radial + f3 * self.e_c2 * z / r2),
        )
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }
}

impl Potential for LeeSutoNfw {
    fn value(&self, pos: &[NVec3], out: &mut [f64]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        if self.frame.is_identity() {
            for (p, phi) in pos.iter().zip(out.iter_mut()) {
                *phi = self.value_native(p);
            }
        } else {
            for (p, phi) in pos.iter().zip(out.iter_mut()) {
                *phi = self.value_native(&self.frame.to_native(p));
            }
        }
        Ok(())
    }

    fn gradient(&self, pos: &[NVec3], out: &mut [NVec3]) -> Result<(), PotentialError> {
        check_lengths(pos.len(), out.len())?;

        if self.frame.is_identity() {
            for (p, g) in pos.iter().zip(out.iter_mut()) {
                *g = self.gradient_native(p);
            }
        } else {
            for (p, g) in pos.iter().zip(out.iter_mut()) {
                let native = self.gradient_native(&self.frame.to_native(p));
                *g = self.frame.to_world(&native);
            }
        }
        Ok(())
    }
}
