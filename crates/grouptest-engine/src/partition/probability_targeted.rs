//! Probability-targeted split.
//!
//! With i.i.d. bad items at rate `p`, a group of `g` passes with probability
//! `(1-p)^g`. Choosing `g = floor(0.5 / p)` keeps that near one half, where a
//! single call carries the most information.

use grouptest_core::constants::TARGET_GROUP_PASS_PROBABILITY;
use grouptest_core::models::Partition;

/// Target group size for learned bad-item probability `p`.
///
/// `p == 0` (or NaN) falls back to groups of 1 instead of dividing by zero.
pub fn group_size(p: f64) -> usize {
    if p.is_nan() || p <= 0.0 {
        return 1;
    }
    // Float-to-int `as` saturates, so tiny `p` cannot overflow.
    ((TARGET_GROUP_PASS_PROBABILITY / p).floor() as usize).max(1)
}

/// `floor(len / g)` full groups of `g`, then one trailing group with the remainder.
pub fn partition(len: usize, p: f64) -> Partition {
    let size = group_size(p);
    let full_groups = len / size;
    let remainder = len - full_groups * size;

    let mut sizes = vec![size; full_groups];
    if remainder > 0 {
        sizes.push(remainder);
    }
    Partition::from_sizes(sizes)
}
