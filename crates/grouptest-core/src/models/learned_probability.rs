//! LearnedProbability: running estimate of the per-item bad rate.

use serde::{Deserialize, Serialize};

use super::ClassificationResult;

/// Empirical estimate of the chance that an item is bad.
///
/// Starts at a configured guess, then after every observed batch becomes
/// `cumulative_bad / (cumulative_bad + cumulative_success)`. Owned by the
/// trial driver, one per strategy; the classifier only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearnedProbability {
    estimate: f64,
    cumulative_bad: u64,
    cumulative_success: u64,
}

impl LearnedProbability {
    /// New estimate seeded with `starting_guess`, clamped to [0, 1].
    /// A NaN guess is treated as 0.
    pub fn new(starting_guess: f64) -> Self {
        Self {
            estimate: clamp_unit(starting_guess),
            cumulative_bad: 0,
            cumulative_success: 0,
        }
    }

    /// Current estimate in [0, 1].
    pub fn value(&self) -> f64 {
        self.estimate
    }

    /// Number of items observed so far.
    pub fn observed(&self) -> u64 {
        self.cumulative_bad + self.cumulative_success
    }

    /// Fold one batch's outcome into the running estimate.
    pub fn observe(&mut self, result: &ClassificationResult) {
        self.cumulative_bad += result.bad_count;
        self.cumulative_success += result.success_count;
        let total = self.observed();
        if total > 0 {
            self.estimate = self.cumulative_bad as f64 / total as f64;
        }
    }
}

fn clamp_unit(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_tracks_cumulative_counts() {
        let mut p = LearnedProbability::new(0.9);
        assert_eq!(p.value(), 0.9);

        p.observe(&ClassificationResult::new(12, 98, 2));
        assert!((p.value() - 0.02).abs() < 1e-12);

        p.observe(&ClassificationResult::new(9, 96, 4));
        assert!((p.value() - 0.03).abs() < 1e-12);
        assert_eq!(p.observed(), 200);
    }

    #[test]
    fn guess_is_clamped() {
        assert_eq!(LearnedProbability::new(1.7).value(), 1.0);
        assert_eq!(LearnedProbability::new(-0.2).value(), 0.0);
        assert_eq!(LearnedProbability::new(f64::NAN).value(), 0.0);
    }
}
