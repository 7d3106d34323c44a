use grouptest_core::models::Partition;

/// One group per item.
pub fn partition(len: usize) -> Partition {
    Partition::from_sizes(vec![1; len])
}
