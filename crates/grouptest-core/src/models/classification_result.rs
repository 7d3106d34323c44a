//! ClassificationResult: the (calls, successes, bad) triple.

use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Counters returned by a classification.
///
/// For a single classification, `success_count + bad_count` equals the length
/// of the batch classified. Sums over several batches keep the same property
/// against the total length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Oracle invocations.
    pub call_count: u64,
    /// Items certified good.
    pub success_count: u64,
    /// Items isolated as bad.
    pub bad_count: u64,
}

impl ClassificationResult {
    pub fn new(call_count: u64, success_count: u64, bad_count: u64) -> Self {
        Self {
            call_count,
            success_count,
            bad_count,
        }
    }

    /// Items classified either way.
    pub fn classified(&self) -> u64 {
        self.success_count + self.bad_count
    }

    /// Fraction of classified items found bad, or `None` if nothing was classified.
    pub fn bad_fraction(&self) -> Option<f64> {
        match self.classified() {
            0 => None,
            n => Some(self.bad_count as f64 / n as f64),
        }
    }
}

impl AddAssign for ClassificationResult {
    fn add_assign(&mut self, rhs: Self) {
        self.call_count += rhs.call_count;
        self.success_count += rhs.success_count;
        self.bad_count += rhs.bad_count;
    }
}

impl Add for ClassificationResult {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl std::iter::Sum for ClassificationResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
