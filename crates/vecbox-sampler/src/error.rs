//! Error types for the sampler.

use thiserror::Error;

/// Errors that can occur while sampling axes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    /// Rejection sampling ran out of attempts without finding a valid triple.
    #[error("no angle triple with {min_separation}° separation found after {attempts} attempts")]
    Infeasible {
        /// Number of triples drawn before giving up.
        attempts: usize,
        /// Required pairwise separation in degrees.
        min_separation: f64,
    },

    /// Length bounds outside `1 <= min < max <= 400`.
    #[error("invalid length bounds: min={min}, max={max}")]
    InvalidBounds {
        /// Requested minimum length.
        min: i64,
        /// Requested maximum length.
        max: i64,
    },
}

/// Result type for sampler operations.
pub type Result<T> = std::result::Result<T, SampleError>;
