use grouptest_core::models::Partition;

/// Split into `floor(len/2)` and `len - floor(len/2)`.
///
/// A single item stays a single group instead of producing an empty half.
pub fn partition(len: usize) -> Partition {
    match len {
        0 => Partition::from_sizes(Vec::new()),
        1 => Partition::from_sizes(vec![1]),
        n => {
            let half = n / 2;
            Partition::from_sizes(vec![half, n - half])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_lengths_put_the_extra_item_last() {
        assert_eq!(partition(7).sizes(), &[3, 4]);
        assert_eq!(partition(10).sizes(), &[5, 5]);
        assert_eq!(partition(2).sizes(), &[1, 1]);
        assert_eq!(partition(1).sizes(), &[1]);
    }
}
