//! Threshold oracle: the group test used by the simulator.

use grouptest_core::errors::ClassifyError;
use grouptest_core::models::Item;
use grouptest_core::traits::GroupOracle;

/// Reports a group as bad iff any item's value is at or below `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdOracle {
    threshold: f64,
}

impl ThresholdOracle {
    /// Rejects NaN and infinite thresholds.
    pub fn new(threshold: f64) -> Result<Self, ClassifyError> {
        if !threshold.is_finite() {
            return Err(ClassifyError::InvalidThreshold { threshold });
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a single item is bad.
    pub fn is_bad(&self, item: Item) -> bool {
        // NaN counts as bad rather than slipping through.
        item.is_nan() || item <= self.threshold
    }
}

impl GroupOracle for ThresholdOracle {
    fn test(&self, group: &[Item]) -> bool {
        // `any` stops at the first bad item.
        !group.iter().any(|&item| self.is_bad(item))
    }
}
