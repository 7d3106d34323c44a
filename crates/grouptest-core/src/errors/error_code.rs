//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to expose a structured code string
/// that survives message rewording.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const UNKNOWN_STRATEGY: &str = "UNKNOWN_STRATEGY";
pub const CLASSIFY_ERROR: &str = "CLASSIFY_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
