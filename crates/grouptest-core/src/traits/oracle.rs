use crate::models::Item;

/// A boolean group test.
///
/// Reports whether every item in `group` is acceptable (`true`) or at least
/// one is bad (`false`), without saying which. Implementations must be pure:
/// the same group always yields the same answer.
pub trait GroupOracle {
    fn test(&self, group: &[Item]) -> bool;
}

impl<O: GroupOracle + ?Sized> GroupOracle for &O {
    fn test(&self, group: &[Item]) -> bool {
        (**self).test(group)
    }
}
