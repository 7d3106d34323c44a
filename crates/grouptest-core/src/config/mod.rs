//! Configuration system for the simulator.
//! TOML-based, 3-layer resolution: CLI > env > project file > defaults.

pub mod batch_config;
pub mod defaults;
pub mod report_config;
pub mod simulation_config;
pub mod sweep_config;

pub use batch_config::BatchConfig;
pub use report_config::{ReportConfig, ReportFormat};
pub use simulation_config::{CliOverrides, SimulationConfig};
pub use sweep_config::SweepConfig;
