//! Error types for scene operations.

use thiserror::Error;
use vecbox_sampler::SampleError;

/// Errors from building, configuring, or exporting a scene.
#[derive(Error, Debug)]
pub enum VecboxError {
    /// Random axis generation failed.
    #[error("sampling failed: {0}")]
    Sample(#[from] SampleError),

    /// Configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be written.
    #[error("could not serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// JSON encoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, VecboxError>;
