//! Error type for the edges of the crate (argument validation, report I/O).
//!
//! The numeric core never fails; a non-critical winner is a report warning,
//! not an error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("iteration count must be non-negative, got {0}")]
    NegativeIterations(i64),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: '{value}'")]
    InvalidArgument { flag: String, value: String },

    #[error("probability distribution is empty or has zero total mass")]
    InvalidDistribution,

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TriageError>;

/// Validate a signed iteration count. Zero is allowed; negatives are rejected.
pub fn validate_iterations(iterations: i64) -> Result<usize> {
    usize::try_from(iterations).map_err(|_| TriageError::NegativeIterations(iterations))
}
