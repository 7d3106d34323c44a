//! Partition strategies.
//!
//! Each strategy is a pure function from a batch length (and, for the
//! probability-targeted strategy, the learned bad-item probability) to a
//! [`Partition`] whose sizes are all at least 1 and sum to the length.

pub mod even_split;
pub mod probability_targeted;
pub mod singleton;

use grouptest_core::models::{Partition, StrategyKind};

/// Split a batch of `len` items according to `strategy`.
///
/// `probability` is read only by [`StrategyKind::ProbabilityTargeted`].
/// A zero-length batch yields an empty partition.
pub fn partition(strategy: StrategyKind, len: usize, probability: f64) -> Partition {
    match strategy {
        StrategyKind::Singleton => singleton::partition(len),
        StrategyKind::EvenSplit => even_split::partition(len),
        StrategyKind::ProbabilityTargeted => probability_targeted::partition(len, probability),
    }
}
