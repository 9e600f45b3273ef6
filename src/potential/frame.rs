//! Model-aligned coordinate frames
//!
//! Triaxial kernels evaluate their closed forms in a frame aligned with the
//! model's principal axes. [`Frame`] holds the world-to-native rotation `R`
//! and its inverse, both built once at model construction: positions are
//! mapped into the native frame with `R`, computed gradients are mapped back
//! to world coordinates with `Rinv`.

use crate::potential::kernel::{NMat3, NVec3};

/// A 3x3 orthonormal rotation and its exact matrix inverse.
/// Identity when no misalignment angles are supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    r: NMat3,
    rinv: NMat3,
}

impl Frame {
    /// Frame with no rotation: R = Rinv = I
    pub fn identity() -> Self {
        Self {
            r: NMat3::identity(),
            rinv: NMat3::identity(),
        }
    }

    /// Build a frame from z-x-z Euler angles (radians):
    /// R = Rz(psi) * Rx(theta) * Rz(phi), applied world -> native.
    ///
    /// All-zero angles short-circuit to the exact identity so that an
    /// unrotated model carries no inversion round-off at all.
    pub fn from_euler(phi: f64, theta: f64, psi: f64) -> Self {
        if phi == 0.0 && theta == 0.0 && psi == 0.0 {
            return Self::identity();
        }

        let r = rot_z(psi) * rot_x(theta) * rot_z(phi);
        // A rotation is always invertible; the transpose fallback is the
        // orthonormal inverse and only differs from try_inverse by round-off.
        let rinv = r.try_inverse().unwrap_or_else(|| r.transpose());
        Self { r, rinv }
    }

    /// Map a world-frame position into the model's native frame
    #[inline]
    pub fn to_native(&self, p: &NVec3) -> NVec3 {
        self.r * p
    }

    /// Map a native-frame vector (e.g. a gradient) back to the world frame
    #[inline]
    pub fn to_world(&self, v: &NVec3) -> NVec3 {
        self.rinv * v
    }

    /// True when this frame is the exact identity (rotation can be skipped)
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.r == NMat3::identity()
    }

    pub fn rotation(&self) -> &NMat3 {
        &self.r
    }

    pub fn inverse(&self) -> &NMat3 {
        &self.rinv
    }
}

/// Active rotation about the x axis
fn rot_x(angle: f64) -> NMat3 {
    let (s, c) = angle.sin_cos();
    NMat3::new(
        1.0, 0.0, 0.0, //
        0.0, c, s, //
        0.0, -s, c,
    )
}

/// Active rotation about the z axis
fn rot_z(angle: f64) -> NMat3 {
    let (s, c) = angle.sin_cos();
    NMat3::new(
        c, s, 0.0, //
        -s, c, 0.0, //
        0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_angles_are_exact_identity() {
        let f = Frame::from_euler(0.0, 0.0, 0.0);
        assert!(f.is_identity());
        assert_eq!(f.rotation(), f.inverse());
    }

    #[test]
    fn rotation_times_inverse_is_identity() {
        let f = Frame::from_euler(0.3, 1.1, -0.7);
        let prod = f.rotation() * f.inverse();
        let err = (prod - NMat3::identity()).norm();
        assert!(err < 1e-14, "R * Rinv deviates from I by {err}");
    }

    #[test]
    fn round_trip_preserves_vectors() {
        let f = Frame::from_euler(0.5, 0.25, 2.0);
        let p = NVec3::new(1.0, -2.0, 3.0);
        let back = f.to_world(&f.to_native(&p));
        assert!((back - p).norm() < 1e-13);
    }

    #[test]
    fn phi_rotation_maps_x_into_frame() {
        // Native-frame coordinates of world (1,0,0) under a frame rotated
        // by phi = pi/2 about z are (0,-1,0)
        let f = Frame::from_euler(std::f64::consts::FRAC_PI_2, 0.0, 0.0);
        let n = f.to_native(&NVec3::new(1.0, 0.0, 0.0));
        assert!((n - NVec3::new(0.0, -1.0, 0.0)).norm() < 1e-15);
    }
}
