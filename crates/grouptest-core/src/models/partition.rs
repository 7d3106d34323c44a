//! Partition: ordered group sizes covering a batch exactly once.

use serde::{Deserialize, Serialize};

/// An ordered list of positive group sizes.
///
/// Invariant (upheld by every strategy): every size is at least 1 and the
/// sizes sum to the length of the batch being split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    sizes: Vec<usize>,
}

impl Partition {
    pub fn from_sizes(sizes: Vec<usize>) -> Self {
        debug_assert!(sizes.iter().all(|&s| s >= 1), "zero-length group in {sizes:?}");
        Self { sizes }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Sum of all group sizes.
    pub fn total(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// True when this partition covers exactly `n` items with no empty group.
    pub fn covers(&self, n: usize) -> bool {
        self.total() == n && self.sizes.iter().all(|&s| s >= 1)
    }

    /// `(offset, len)` of each group, in order.
    pub fn ranges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sizes.iter().scan(0usize, |offset, &len| {
            let start = *offset;
            *offset += len;
            Some((start, len))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_are_contiguous() {
        let p = Partition::from_sizes(vec![3, 3, 1]);
        let ranges: Vec<_> = p.ranges().collect();
        assert_eq!(ranges, vec![(0, 3), (3, 3), (6, 1)]);
        assert!(p.covers(7));
        assert!(!p.covers(8));
    }
}
