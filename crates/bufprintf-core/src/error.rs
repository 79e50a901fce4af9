//! Errors surfaced by the formatting engine.
//!
//! Only sink failures are errors. Exhausted arguments, unknown specifiers and
//! type mismatches are recovered inside the scanner and never reach here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    /// The sink rejected the write outright.
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
    /// The sink accepted fewer bytes than were flushed. No retry is attempted.
    #[error("short write: sink accepted {written} of {expected} bytes")]
    ShortWrite { expected: usize, written: usize },
}

impl FormatError {
    /// Number of bytes the sink reported as written before the failure.
    #[must_use]
    pub fn bytes_written(&self) -> usize {
        match self {
            Self::Io(_) => 0,
            Self::ShortWrite { written, .. } => *written,
        }
    }
}
