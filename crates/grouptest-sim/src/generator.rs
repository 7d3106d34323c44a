//! Batch generation.

use grouptest_core::models::Batch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Anything that can hand the driver a fresh batch per trial.
pub trait BatchSource {
    fn next_batch(&mut self) -> Batch;
}

/// Fixed-length batches of independent uniform values in [0, 1).
pub struct UniformBatchGenerator {
    len: usize,
    rng: StdRng,
}

impl UniformBatchGenerator {
    /// Deterministic generator: same seed, same batches.
    pub fn seeded(len: usize, seed: u64) -> Self {
        Self {
            len,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy(len: usize) -> Self {
        Self {
            len,
            rng: StdRng::from_entropy(),
        }
    }

    /// Generator for one threshold step of a sweep.
    ///
    /// With a base seed each step gets its own stream, so a step's batches do
    /// not depend on which steps ran before it (or on which thread).
    pub fn for_step(len: usize, base_seed: Option<u64>, step_index: usize) -> Self {
        match base_seed {
            Some(seed) => Self::seeded(len, seed.wrapping_add(step_index as u64)),
            None => Self::from_entropy(len),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl BatchSource for UniformBatchGenerator {
    fn next_batch(&mut self) -> Batch {
        Batch::new((0..self.len).map(|_| self.rng.gen::<f64>()).collect())
    }
}

/// Replays a fixed list of batches in a loop. Used for scripted runs.
pub struct ReplaySource {
    batches: Vec<Batch>,
    next: usize,
}

impl ReplaySource {
    /// Returns `None` when there is nothing to replay.
    pub fn new(batches: Vec<Batch>) -> Option<Self> {
        if batches.is_empty() {
            return None;
        }
        Some(Self { batches, next: 0 })
    }
}

impl BatchSource for ReplaySource {
    fn next_batch(&mut self) -> Batch {
        // `new` rejects an empty list, and `next` stays below its length.
        let batch = self.batches[self.next].clone();
        self.next = (self.next + 1) % self.batches.len();
        batch
    }
}
