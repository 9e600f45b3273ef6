//! Error taxonomy for model construction and batch evaluation
//!
//! Construction-time problems (bad parameters) and call-time problems
//! (buffer shape mismatch, unsupported capability) are separate variants
//! so integrators can react differently to each.
//!
//! Evaluating *at* a model's central singularity (r = 0) is not an error:
//! the IEEE division-by-zero result (inf/NaN) propagates into the output
//! buffer and it is the caller's job to keep orbits away from the origin.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PotentialError {
    /// A required physical parameter is missing, non-finite, or out of its
    /// valid range (e.g. a non-positive shape axis). Raised at construction.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The requested capability (hessian) has no closed form for this kernel.
    #[error("{what} is not implemented for this kernel")]
    NotImplemented { what: String },

    /// Output buffer length does not match the position batch length.
    /// Fails before any output slot is written.
    #[error("output buffer length mismatch: expected {expected}, got {got}")]
    InvalidArgument { expected: usize, got: usize },
}
