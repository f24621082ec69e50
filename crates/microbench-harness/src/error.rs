//! Harness error type.

use thiserror::Error;

/// Errors surfaced by the harness library and CLI.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown kernel '{0}'")]
    UnknownKernel(String),
    #[error("invalid config: {field}: {message}")]
    InvalidConfig { field: String, message: String },
    #[error("no fixture cases selected")]
    NoFixtureCases,
    #[error("verification failed: {failed} of {total} cases")]
    VerificationFailed { failed: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, HarnessError>;
