//! Trait seams between the classifier and its collaborators.

pub mod oracle;

pub use oracle::GroupOracle;
