//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("format: {0}")]
    Format(#[from] bufprintf_core::FormatError),
    #[error("invalid argument '{input}': {reason}")]
    InvalidArg { input: String, reason: &'static str },
}
