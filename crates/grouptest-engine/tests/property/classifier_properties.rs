use grouptest_core::models::{Batch, ClassificationResult, LearnedProbability, StrategyKind};
use grouptest_core::traits::GroupOracle;
use grouptest_engine::partition::probability_targeted;
use grouptest_engine::{classify, partition, Classifier, ThresholdOracle};
use proptest::prelude::*;

fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Singleton),
        Just(StrategyKind::EvenSplit),
        Just(StrategyKind::ProbabilityTargeted),
    ]
}

fn batch() -> impl Strategy<Value = Batch> {
    prop::collection::vec(0.0f64..=1.0, 1..200).prop_map(Batch::new)
}

proptest! {
    #[test]
    fn partition_covers_every_item(
        kind in strategy_kind(),
        len in 1usize..2_000,
        p in prop_oneof![Just(0.0), 0.0f64..=1.0],
    ) {
        let split = partition(kind, len, p);
        prop_assert_eq!(split.total(), len);
        prop_assert!(split.sizes().iter().all(|&s| s >= 1));
    }

    #[test]
    fn classification_conserves_items(
        batch in batch(),
        kind in strategy_kind(),
        threshold in 0.0f64..=1.0,
        p in 0.0f64..=1.0,
    ) {
        let result = classify(&batch, kind, threshold, p).unwrap();
        prop_assert_eq!(result.classified() as usize, batch.len());
        prop_assert!(result.call_count >= 1);
    }

    #[test]
    fn every_strategy_finds_the_true_bad_count(
        batch in batch(),
        kind in strategy_kind(),
        threshold in 0.0f64..=1.0,
        p in 0.0f64..=1.0,
    ) {
        let result = classify(&batch, kind, threshold, p).unwrap();
        prop_assert_eq!(result.bad_count as usize, batch.count_at_or_below(threshold));
    }

    #[test]
    fn singleton_costs_one_call_per_item(batch in batch(), threshold in 0.0f64..=1.0) {
        let result = classify(&batch, StrategyKind::Singleton, threshold, 0.5).unwrap();
        prop_assert_eq!(result.call_count as usize, batch.len());
        prop_assert_eq!(result.bad_count as usize, batch.count_at_or_below(threshold));
    }

    #[test]
    fn call_count_lower_bound(
        batch in batch(),
        kind in strategy_kind(),
        threshold in 0.0f64..=1.0,
        p in 0.0f64..=1.0,
    ) {
        let result = classify(&batch, kind, threshold, p).unwrap();
        let pass_calls = u64::from(result.success_count > 0);
        prop_assert!(result.call_count >= result.bad_count + pass_calls);
        prop_assert!(result.call_count >= 1);
    }

    #[test]
    fn repeated_classification_is_identical(
        batch in batch(),
        kind in strategy_kind(),
        threshold in 0.0f64..=1.0,
        p in 0.0f64..=1.0,
    ) {
        let a = classify(&batch, kind, threshold, p).unwrap();
        let b = classify(&batch, kind, threshold, p).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn targeted_recursion_uses_even_split(
        batch in batch(),
        threshold in 0.0f64..=0.3,
        p in 0.001f64..=1.0,
    ) {
        let oracle = ThresholdOracle::new(threshold).unwrap();
        let classifier = Classifier::new(oracle);
        let actual = classifier
            .classify(&batch, StrategyKind::ProbabilityTargeted, &LearnedProbability::new(p))
            .unwrap();

        // Rebuild the expected totals: one targeted split, then even splits below.
        let mut expected = ClassificationResult::default();
        let whole = batch.whole();
        for (offset, len) in probability_targeted::partition(batch.len(), p).ranges() {
            let group = whole.subgroup(offset, len);
            expected.call_count += 1;
            if oracle.test(group.items()) {
                expected.success_count += len as u64;
            } else if len == 1 {
                expected.bad_count += 1;
            } else {
                expected += classifier.classify_group(group, StrategyKind::EvenSplit, p);
            }
        }
        prop_assert_eq!(actual, expected);
    }
}
