//! Error handling for the simulator.
//! One error enum per subsystem, `thiserror` only. `anyhow` stays in the binary.

pub mod classify_error;
pub mod config_error;
pub mod error_code;
pub mod report_error;
pub mod simulation_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use report_error::ReportError;
pub use simulation_error::SimulationError;
