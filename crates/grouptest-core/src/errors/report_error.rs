//! Report sink errors.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while writing report rows.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {message}")]
    Serialization { message: String },
}

impl ErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
