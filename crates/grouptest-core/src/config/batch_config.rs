//! Batch generation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Shape and reproducibility of generated batches.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BatchConfig {
    /// Items per generated batch. Default: 100.
    pub fields_per_batch: Option<usize>,
    /// RNG seed. Unset means a fresh entropy-seeded run.
    pub seed: Option<u64>,
}

impl BatchConfig {
    /// Returns the effective batch length, defaulting to 100.
    pub fn effective_fields_per_batch(&self) -> usize {
        self.fields_per_batch
            .unwrap_or(defaults::DEFAULT_FIELDS_PER_BATCH)
    }
}
