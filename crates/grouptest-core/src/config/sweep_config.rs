//! Threshold sweep configuration.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{MAX_THRESHOLD_STEPS, MAX_TRIALS_PER_THRESHOLD};
use crate::errors::ConfigError;
use crate::models::StrategyKind;

/// Threshold sweep, trial count, learning, and strategy selection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SweepConfig {
    /// First bad-item threshold. Default: 0.01.
    pub threshold_start: Option<f64>,
    /// Last bad-item threshold (inclusive). Default: 1.00.
    pub threshold_end: Option<f64>,
    /// Threshold increment. Default: 0.01.
    pub threshold_step: Option<f64>,
    /// Trials per threshold, clamped to 1,000,000. Default: 1000.
    pub trials_per_threshold: Option<u64>,
    /// Learned probability at the start of each threshold step. Default: 0.9.
    pub starting_probability_guess: Option<f64>,
    /// Strategy names to compare. Empty means all three.
    #[serde(default)]
    pub strategies: Vec<String>,
    /// Run threshold steps on a rayon pool. Default: false.
    pub parallel: Option<bool>,
}

impl SweepConfig {
    pub fn effective_threshold_start(&self) -> f64 {
        self.threshold_start
            .unwrap_or(defaults::DEFAULT_THRESHOLD_START)
    }

    pub fn effective_threshold_end(&self) -> f64 {
        self.threshold_end.unwrap_or(defaults::DEFAULT_THRESHOLD_END)
    }

    pub fn effective_threshold_step(&self) -> f64 {
        self.threshold_step
            .unwrap_or(defaults::DEFAULT_THRESHOLD_STEP)
    }

    /// Returns the effective trial count, clamped to the hard cap.
    pub fn effective_trials_per_threshold(&self) -> u64 {
        clamp_trials(
            self.trials_per_threshold
                .unwrap_or(defaults::DEFAULT_TRIALS_PER_THRESHOLD),
        )
    }

    pub fn effective_starting_probability_guess(&self) -> f64 {
        self.starting_probability_guess
            .unwrap_or(defaults::DEFAULT_STARTING_PROBABILITY_GUESS)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(defaults::DEFAULT_PARALLEL)
    }

    /// Parse the configured strategy names, in order, without duplicates.
    /// An empty list selects every strategy.
    pub fn effective_strategies(&self) -> Result<Vec<StrategyKind>, ConfigError> {
        if self.strategies.is_empty() {
            return Ok(StrategyKind::ALL.to_vec());
        }
        let mut kinds = Vec::with_capacity(self.strategies.len());
        for name in &self.strategies {
            let kind: StrategyKind = name.parse()?;
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        Ok(kinds)
    }

    /// Enumerate the threshold values of the sweep.
    ///
    /// Values are `start + i * step` for integer `i`, so a 0.01..=1.00 sweep
    /// has exactly 100 steps regardless of float accumulation.
    ///
    /// Empty when the range is invalid or exceeds [`MAX_THRESHOLD_STEPS`].
    pub fn thresholds(&self) -> Vec<f64> {
        let start = self.effective_threshold_start();
        let step = self.effective_threshold_step();
        match self.threshold_count() {
            Some(count) => (0..count)
                .map(|i| round_to(start + i as f64 * step, 9))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of threshold values in the sweep, or `None` when the range is
    /// invalid or would exceed [`MAX_THRESHOLD_STEPS`].
    pub fn threshold_count(&self) -> Option<usize> {
        let start = self.effective_threshold_start();
        let end = self.effective_threshold_end();
        let step = self.effective_threshold_step();
        if step.is_nan() || step <= 0.0 || end.is_nan() || start.is_nan() || end < start {
            return None;
        }
        let intervals = ((end - start) / step + 1e-9).floor();
        // Compare as f64 before casting; `as usize` would saturate silently.
        if !intervals.is_finite() || intervals >= MAX_THRESHOLD_STEPS as f64 {
            return None;
        }
        Some(intervals as usize + 1)
    }
}

/// Clamp a requested trial count to [`MAX_TRIALS_PER_THRESHOLD`], warning when it bites.
pub fn clamp_trials(requested: u64) -> u64 {
    if requested > MAX_TRIALS_PER_THRESHOLD {
        ::tracing::warn!(
            requested,
            cap = MAX_TRIALS_PER_THRESHOLD,
            "trial count exceeds the cap; clamping"
        );
        MAX_TRIALS_PER_THRESHOLD
    } else {
        requested
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}
