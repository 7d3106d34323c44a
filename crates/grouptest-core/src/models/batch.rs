//! Items, batches, and zero-copy groups over a batch.

use serde::{Deserialize, Serialize};

/// A single field value in [0, 1], checked by the oracle against a threshold.
pub type Item = f64;

/// An ordered, immutable sequence of items.
///
/// Order matters: partitions slice contiguous ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Batch {
    items: Vec<Item>,
}

impl Batch {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A group spanning the whole batch.
    pub fn whole(&self) -> Group<'_> {
        Group::new(0, &self.items)
    }

    /// Number of bad items at `threshold`: values at or below it, plus NaN.
    /// Same rule as the threshold oracle.
    pub fn count_at_or_below(&self, threshold: f64) -> usize {
        self.items
            .iter()
            .filter(|&&v| v.is_nan() || v <= threshold)
            .count()
    }
}

impl From<Vec<Item>> for Batch {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

/// A contiguous view into a batch: `(start offset, length)` plus the borrowed items.
///
/// `start` is relative to the batch the group was cut from, so nested groups
/// keep absolute offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Group<'a> {
    start: usize,
    items: &'a [Item],
}

impl<'a> Group<'a> {
    pub fn new(start: usize, items: &'a [Item]) -> Self {
        Self { start, items }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.start + self.items.len()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &'a [Item] {
        self.items
    }

    /// Sub-group at `offset..offset + len` relative to this group.
    ///
    /// Panics if the range is out of bounds, like slice indexing.
    pub fn subgroup(&self, offset: usize, len: usize) -> Group<'a> {
        Group::new(self.start + offset, &self.items[offset..offset + len])
    }
}
