//! Error types for the simulation core.

use thiserror::Error;

use super::states::BodyId;

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors reported by the registry and the integrator.
///
/// All three propagate to the caller; the core never retries or masks them.
/// Non-finite values arising from extreme (but nonzero) separations are not
/// errors and flow into the state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimError {
    #[error("body mass must be positive, got {0}")]
    InvalidMass(f64),

    #[error("no body with id {0}")]
    UnknownBody(BodyId),

    #[error("bodies {0} and {1} occupy the same position, force direction undefined")]
    Singularity(BodyId, BodyId),
}
