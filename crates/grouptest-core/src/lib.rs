//! # grouptest-core
//!
//! Foundation crate for the group-testing simulator.
//! Defines the data model, the oracle trait, errors, config, tracing, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::SimulationConfig;
pub use errors::{ClassifyError, ConfigError, ReportError, SimulationError};
pub use models::{
    Batch, ClassificationResult, Group, Item, LearnedProbability, Partition, StrategyKind,
};
pub use traits::GroupOracle;
