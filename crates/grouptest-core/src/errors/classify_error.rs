//! Classification errors.

use super::error_code::{self, ErrorCode};

/// Errors raised before a classification starts. Once running, the
/// classifier itself cannot fail.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    #[error("Cannot classify an empty batch")]
    EmptyBatch,

    #[error("Oracle threshold must be finite, got {threshold}")]
    InvalidThreshold { threshold: f64 },
}

impl ErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        error_code::CLASSIFY_ERROR
    }
}
