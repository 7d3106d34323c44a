//! Adaptive recursive classifier.
//!
//! Partition the batch, test each group once, certify passing groups, and
//! recurse into failing groups until every bad item sits alone in a failing
//! single-item group. The learned probability is only read here; the trial
//! driver owns and updates it between batches.

use grouptest_core::errors::ClassifyError;
use grouptest_core::models::{Batch, ClassificationResult, Group, LearnedProbability, StrategyKind};
use grouptest_core::traits::GroupOracle;
use tracing::trace;

use crate::oracle::ThresholdOracle;
use crate::partition;

/// Classifies batches against one oracle.
#[derive(Debug, Clone)]
pub struct Classifier<O: GroupOracle> {
    oracle: O,
}

impl<O: GroupOracle> Classifier<O> {
    pub fn new(oracle: O) -> Self {
        Self { oracle }
    }

    /// Classify every item of `batch` under `strategy`.
    ///
    /// The result satisfies `success_count + bad_count == batch.len()` and
    /// `call_count >= 1`. Fails only for an empty batch.
    pub fn classify(
        &self,
        batch: &Batch,
        strategy: StrategyKind,
        probability: &LearnedProbability,
    ) -> Result<ClassificationResult, ClassifyError> {
        if batch.is_empty() {
            return Err(ClassifyError::EmptyBatch);
        }
        Ok(self.classify_group(batch.whole(), strategy, probability.value()))
    }

    /// Recursive step over a non-empty group.
    ///
    /// Every recursive call receives a strictly shorter group, so depth is
    /// bounded by the group length.
    pub fn classify_group(
        &self,
        group: Group<'_>,
        strategy: StrategyKind,
        probability: f64,
    ) -> ClassificationResult {
        let mut result = ClassificationResult::default();
        let split = partition::partition(strategy, group.len(), probability);
        let next_strategy = strategy.after_first_split();

        for (offset, len) in split.ranges() {
            let sub = group.subgroup(offset, len);
            result.call_count += 1;

            if self.oracle.test(sub.items()) {
                result.success_count += len as u64;
            } else if len == 1 {
                result.bad_count += 1;
            } else {
                trace!(
                    start = sub.start(),
                    len,
                    strategy = %next_strategy,
                    "group failed; subdividing"
                );
                result += self.classify_group(sub, next_strategy, probability);
            }
        }

        result
    }
}

/// Classify `batch` against a [`ThresholdOracle`] at `threshold`.
pub fn classify(
    batch: &Batch,
    strategy: StrategyKind,
    threshold: f64,
    probability_estimate: f64,
) -> Result<ClassificationResult, ClassifyError> {
    let classifier = Classifier::new(ThresholdOracle::new(threshold)?);
    classifier.classify(batch, strategy, &LearnedProbability::new(probability_estimate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_split_on_all_good_batch_costs_two_calls() {
        let batch = Batch::new(vec![0.5; 10]);
        let result = classify(&batch, StrategyKind::EvenSplit, 0.025, 0.9).unwrap();
        assert_eq!(result, ClassificationResult::new(2, 10, 0));
    }

    #[test]
    fn singleton_isolates_each_bad_item() {
        let batch = Batch::new(vec![0.5, 0.01, 0.5, 0.5]);
        let result = classify(&batch, StrategyKind::Singleton, 0.025, 0.9).unwrap();
        assert_eq!(result, ClassificationResult::new(4, 3, 1));
    }

    #[test]
    fn targeted_with_zero_probability_matches_singleton() {
        let batch = Batch::new(vec![0.5, 0.01, 0.5, 0.02, 0.7]);
        let targeted = classify(&batch, StrategyKind::ProbabilityTargeted, 0.025, 0.0).unwrap();
        let singleton = classify(&batch, StrategyKind::Singleton, 0.025, 0.0).unwrap();
        assert_eq!(targeted, singleton);
        assert_eq!(targeted, ClassificationResult::new(5, 3, 2));
    }

    #[test]
    fn even_split_recursion_counts() {
        // [0.5, 0.01 | 0.5, 0.5]: right passes (1), left fails (1) -> [0.5 | 0.01] (2)
        let batch = Batch::new(vec![0.5, 0.01, 0.5, 0.5]);
        let result = classify(&batch, StrategyKind::EvenSplit, 0.025, 0.9).unwrap();
        assert_eq!(result, ClassificationResult::new(4, 3, 1));
    }

    #[test]
    fn empty_batch_is_rejected() {
        let err = classify(&Batch::new(vec![]), StrategyKind::Singleton, 0.5, 0.5).unwrap_err();
        assert_eq!(err, ClassifyError::EmptyBatch);
    }

    #[test]
    fn single_item_batch_under_even_split() {
        let bad = classify(&Batch::new(vec![0.0]), StrategyKind::EvenSplit, 0.5, 0.5).unwrap();
        assert_eq!(bad, ClassificationResult::new(1, 0, 1));
        let good = classify(&Batch::new(vec![0.9]), StrategyKind::EvenSplit, 0.5, 0.5).unwrap();
        assert_eq!(good, ClassificationResult::new(1, 1, 0));
    }
}
