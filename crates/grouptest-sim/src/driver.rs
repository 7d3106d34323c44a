//! TrialDriver: runs the threshold sweep and aggregates per-strategy totals.
//!
//! Each threshold step owns its learned-probability state, one per strategy,
//! (re)initialized to the starting guess and updated after every trial from
//! that strategy's own cumulative results. Steps share nothing, so they may
//! run on a rayon pool; rows are still emitted in threshold order.

use grouptest_core::config::SimulationConfig;
use grouptest_core::config::sweep_config::clamp_trials;
use grouptest_core::errors::{ClassifyError, ConfigError, SimulationError};
use grouptest_core::models::{ClassificationResult, LearnedProbability, StrategyKind};
use grouptest_engine::{Classifier, ThresholdOracle};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::generator::{BatchSource, UniformBatchGenerator};
use crate::report::{ReportRow, ReportSink};

/// Running totals and learned estimate of one strategy within a threshold step.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyTotals {
    pub strategy: StrategyKind,
    pub totals: ClassificationResult,
    pub learned: LearnedProbability,
}

/// Outcome of all trials at one threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdSummary {
    pub threshold: f64,
    pub trials: u64,
    pub per_strategy: Vec<StrategyTotals>,
    /// Trials where some strategy's bad count disagreed with the singleton baseline.
    pub baseline_mismatches: u64,
}

impl ThresholdSummary {
    /// One report row per strategy, in strategy order.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.per_strategy
            .iter()
            .map(|s| ReportRow::new(s.strategy, self.threshold, self.trials, &s.totals))
            .collect()
    }

    /// Final learned estimate of each strategy whose partitions depend on it.
    pub fn learned_estimates(&self) -> Vec<(StrategyKind, f64)> {
        self.per_strategy
            .iter()
            .filter(|s| s.strategy.uses_learned_probability())
            .map(|s| (s.strategy, s.learned.value()))
            .collect()
    }
}

/// Outcome of a full sweep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepSummary {
    pub steps: Vec<ThresholdSummary>,
}

impl SweepSummary {
    /// Totals per strategy across every threshold step, in first-seen order.
    pub fn totals_by_strategy(&self) -> Vec<(StrategyKind, ClassificationResult)> {
        let mut totals: Vec<(StrategyKind, ClassificationResult)> = Vec::new();
        for step in &self.steps {
            for s in &step.per_strategy {
                match totals.iter_mut().find(|(kind, _)| *kind == s.strategy) {
                    Some((_, acc)) => *acc += s.totals,
                    None => totals.push((s.strategy, s.totals)),
                }
            }
        }
        totals
    }

    pub fn total_trials(&self) -> u64 {
        self.steps.iter().map(|s| s.trials).sum()
    }
}

/// Drives trials across the threshold sweep.
#[derive(Debug, Clone)]
pub struct TrialDriver {
    fields_per_batch: usize,
    thresholds: Vec<f64>,
    trials_per_threshold: u64,
    starting_guess: f64,
    strategies: Vec<StrategyKind>,
    seed: Option<u64>,
    parallel: bool,
}

impl TrialDriver {
    /// Build a driver from a resolved config. Validates it first.
    pub fn from_config(config: &SimulationConfig) -> Result<Self, ConfigError> {
        SimulationConfig::validate(config)?;
        Ok(Self {
            fields_per_batch: config.batch.effective_fields_per_batch(),
            thresholds: config.sweep.thresholds(),
            trials_per_threshold: config.sweep.effective_trials_per_threshold(),
            starting_guess: config.sweep.effective_starting_probability_guess(),
            strategies: config.sweep.effective_strategies()?,
            seed: config.batch.seed,
            parallel: config.sweep.effective_parallel(),
        })
    }

    /// Override the trial count. Oversized requests are clamped with a warning.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials_per_threshold = clamp_trials(trials);
        self
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn trials_per_threshold(&self) -> u64 {
        self.trials_per_threshold
    }

    pub fn strategies(&self) -> &[StrategyKind] {
        &self.strategies
    }

    /// Run the whole sweep, writing rows to `sink` in threshold order.
    pub fn run(&self, sink: &mut dyn ReportSink) -> Result<SweepSummary, SimulationError> {
        info!(
            steps = self.thresholds.len(),
            trials = self.trials_per_threshold,
            fields = self.fields_per_batch,
            strategies = ?self.strategies,
            parallel = self.parallel,
            "starting threshold sweep"
        );

        let mut summary = SweepSummary::default();
        if self.parallel {
            let steps = self
                .thresholds
                .par_iter()
                .enumerate()
                .map(|(index, &threshold)| self.run_step(index, threshold))
                .collect::<Result<Vec<_>, _>>()?;
            for step in steps {
                Self::emit(&step, sink)?;
                summary.steps.push(step);
            }
        } else {
            for (index, &threshold) in self.thresholds.iter().enumerate() {
                let step = self.run_step(index, threshold)?;
                Self::emit(&step, sink)?;
                summary.steps.push(step);
            }
        }

        sink.finish()?;
        Ok(summary)
    }

    fn run_step(&self, index: usize, threshold: f64) -> Result<ThresholdSummary, ClassifyError> {
        let mut source = UniformBatchGenerator::for_step(self.fields_per_batch, self.seed, index);
        let step = self.run_threshold_with(threshold, &mut source)?;
        info!(
            threshold,
            mismatches = step.baseline_mismatches,
            learned = ?step.learned_estimates(),
            "threshold step complete"
        );
        Ok(step)
    }

    fn emit(step: &ThresholdSummary, sink: &mut dyn ReportSink) -> Result<(), SimulationError> {
        for row in step.rows() {
            sink.write_row(&row)?;
        }
        Ok(())
    }

    /// Run every trial for one threshold, drawing batches from `source`.
    pub fn run_threshold_with<S: BatchSource + ?Sized>(
        &self,
        threshold: f64,
        source: &mut S,
    ) -> Result<ThresholdSummary, ClassifyError> {
        let classifier = Classifier::new(ThresholdOracle::new(threshold)?);
        let mut per_strategy: Vec<StrategyTotals> = self
            .strategies
            .iter()
            .map(|&strategy| StrategyTotals {
                strategy,
                totals: ClassificationResult::default(),
                learned: LearnedProbability::new(self.starting_guess),
            })
            .collect();
        let mut baseline_mismatches = 0;
        let mut trial_results = Vec::with_capacity(per_strategy.len());

        for trial in 0..self.trials_per_threshold {
            let batch = source.next_batch();
            trial_results.clear();

            for state in per_strategy.iter_mut() {
                let result = classifier.classify(&batch, state.strategy, &state.learned)?;
                state.totals += result;
                state.learned.observe(&result);
                trial_results.push((state.strategy, result));
            }

            if !agrees_with_baseline(&trial_results) {
                warn!(
                    threshold,
                    trial,
                    results = ?trial_results,
                    "strategy disagrees with singleton baseline"
                );
                baseline_mismatches += 1;
            }
            debug!(threshold, trial, results = ?trial_results, "trial classified");
        }

        Ok(ThresholdSummary {
            threshold,
            trials: self.trials_per_threshold,
            per_strategy,
            baseline_mismatches,
        })
    }
}

/// Every strategy must isolate exactly the bad items the singleton pass found.
/// Trivially true when the singleton strategy is not part of the run.
fn agrees_with_baseline(results: &[(StrategyKind, ClassificationResult)]) -> bool {
    let Some(baseline) = results
        .iter()
        .find(|(kind, _)| *kind == StrategyKind::Singleton)
        .map(|(_, r)| r.bad_count)
    else {
        return true;
    };
    results.iter().all(|(_, r)| r.bad_count == baseline)
}
