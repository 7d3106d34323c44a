//! Data model shared by the engine and the simulator.

pub mod batch;
pub mod classification_result;
pub mod learned_probability;
pub mod partition;
pub mod strategy;

pub use batch::{Batch, Group, Item};
pub use classification_result::ClassificationResult;
pub use learned_probability::LearnedProbability;
pub use partition::Partition;
pub use strategy::StrategyKind;
