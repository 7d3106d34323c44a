//! Top-level simulation errors.

use super::error_code::ErrorCode;
use super::{ClassifyError, ConfigError, ReportError};

/// Errors that can occur during a threshold sweep.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl ErrorCode for SimulationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Classify(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}
