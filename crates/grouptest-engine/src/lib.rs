//! # grouptest-engine
//!
//! Adaptive group testing: classify every item of a batch as good or bad
//! using as few calls as possible to a boolean group-test oracle.
//!
//! ## 3 Partition Strategies
//!
//! | Strategy | Group sizes for a batch of `n` |
//! |----------|-------------------------------|
//! | Singleton | `n` groups of 1 |
//! | Even split | `floor(n/2)`, `n - floor(n/2)` |
//! | Probability-targeted | groups of `max(floor(0.5 / p), 1)` plus a trailing remainder |
//!
//! Failing multi-item groups are re-classified recursively. A
//! probability-targeted classification continues with even splits below the
//! first level.

pub mod classifier;
pub mod oracle;
pub mod partition;

pub use classifier::{classify, Classifier};
pub use oracle::ThresholdOracle;
pub use partition::partition;
