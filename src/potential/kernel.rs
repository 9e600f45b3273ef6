//! Kernel trait and batch-evaluation contract
//!
//! A kernel is the closed-form value/gradient implementation for one
//! physical potential model. All kernels share one calling convention:
//! a read-only batch of positions and a caller-allocated output buffer,
//! written in place with `out[i]` corresponding to `pos[i]`.
//!
//! Contract every implementation upholds:
//! - element-wise and independent across particles (no cross-particle state)
//! - N = 0 is a no-op success
//! - positions are never mutated, outputs never allocated per particle
//! - on success every output slot is written exactly once
//! - a mismatched output length fails with `InvalidArgument` before any write

use nalgebra::{Matrix3, Vector3};

use crate::error::PotentialError;

pub type NVec3 = Vector3<f64>;
pub type NMat3 = Matrix3<f64>;

/// Closed-form potential kernel over batches of 3D positions.
///
/// `value` fills `out[i]` with the scalar potential at `pos[i]`;
/// `gradient` fills `out[i]` with the potential gradient (the acceleration
/// is its negation). `hessian` is optional; kernels without a closed form
/// report `NotImplemented` rather than returning zeros.
pub trait Potential {
    fn value(&self, pos: &[NVec3], out: &mut [f64]) -> Result<(), PotentialError>;

    fn gradient(&self, pos: &[NVec3], out: &mut [NVec3]) -> Result<(), PotentialError>;

    fn hessian(&self, pos: &[NVec3], _out: &mut [NMat3]) -> Result<(), PotentialError> {
        let _ = pos;
        Err(PotentialError::NotImplemented {
            what: "hessian".into(),
        })
    }
}

/// Fail fast when the output buffer does not match the batch length.
/// Called by every kernel before touching `out`.
#[inline]
pub fn check_lengths(n_pos: usize, n_out: usize) -> Result<(), PotentialError> {
    if n_pos != n_out {
        return Err(PotentialError::InvalidArgument {
            expected: n_pos,
            got: n_out,
        });
    }
    Ok(())
}
