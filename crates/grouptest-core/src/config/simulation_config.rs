//! Top-level simulator configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::sweep_config::clamp_trials;
use super::{defaults, BatchConfig, ReportConfig, ReportFormat, SweepConfig};
use crate::constants::MAX_THRESHOLD_STEPS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GROUPTEST_*`)
/// 3. Project config (`grouptest.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub batch: BatchConfig,
    pub sweep: SweepConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub fields_per_batch: Option<usize>,
    pub seed: Option<u64>,
    pub threshold_start: Option<f64>,
    pub threshold_end: Option<f64>,
    pub threshold_step: Option<f64>,
    pub trials_per_threshold: Option<u64>,
    pub starting_probability_guess: Option<f64>,
    pub strategies: Vec<String>,
    pub parallel: Option<bool>,
    pub output_path: Option<PathBuf>,
    pub format: Option<ReportFormat>,
}

impl SimulationConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Self::apply_trial_cap(&mut config);

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SimulationConfig) -> Result<(), ConfigError> {
        if config.batch.effective_fields_per_batch() == 0 {
            return Err(invalid("batch.fields_per_batch", "must be greater than 0"));
        }

        let sweep = &config.sweep;
        let start = sweep.effective_threshold_start();
        let end = sweep.effective_threshold_end();
        let step = sweep.effective_threshold_step();
        if !(0.0..=1.0).contains(&start) {
            return Err(invalid("sweep.threshold_start", "must be between 0.0 and 1.0"));
        }
        if !(0.0..=1.0).contains(&end) {
            return Err(invalid("sweep.threshold_end", "must be between 0.0 and 1.0"));
        }
        if start > end {
            return Err(invalid(
                "sweep.threshold_end",
                "must not be less than sweep.threshold_start",
            ));
        }
        if step.is_nan() || step <= 0.0 {
            return Err(invalid("sweep.threshold_step", "must be greater than 0"));
        }
        if sweep.threshold_count().is_none() {
            return Err(invalid(
                "sweep.threshold_step",
                &format!("yields more than {MAX_THRESHOLD_STEPS} threshold steps"),
            ));
        }
        if sweep.trials_per_threshold == Some(0) {
            return Err(invalid("sweep.trials_per_threshold", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&sweep.effective_starting_probability_guess()) {
            return Err(invalid(
                "sweep.starting_probability_guess",
                "must be between 0.0 and 1.0",
            ));
        }
        sweep.effective_strategies()?;
        Ok(())
    }

    /// Clamp an oversized trial request in place. Not an error; warns instead.
    fn apply_trial_cap(config: &mut SimulationConfig) {
        if let Some(requested) = config.sweep.trials_per_threshold {
            config.sweep.trials_per_threshold = Some(clamp_trials(requested));
        }
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SimulationConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: SimulationConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut SimulationConfig, other: &SimulationConfig) {
        // Batch
        if other.batch.fields_per_batch.is_some() {
            base.batch.fields_per_batch = other.batch.fields_per_batch;
        }
        if other.batch.seed.is_some() {
            base.batch.seed = other.batch.seed;
        }

        // Sweep
        if other.sweep.threshold_start.is_some() {
            base.sweep.threshold_start = other.sweep.threshold_start;
        }
        if other.sweep.threshold_end.is_some() {
            base.sweep.threshold_end = other.sweep.threshold_end;
        }
        if other.sweep.threshold_step.is_some() {
            base.sweep.threshold_step = other.sweep.threshold_step;
        }
        if other.sweep.trials_per_threshold.is_some() {
            base.sweep.trials_per_threshold = other.sweep.trials_per_threshold;
        }
        if other.sweep.starting_probability_guess.is_some() {
            base.sweep.starting_probability_guess = other.sweep.starting_probability_guess;
        }
        if !other.sweep.strategies.is_empty() {
            base.sweep.strategies = other.sweep.strategies.clone();
        }
        if other.sweep.parallel.is_some() {
            base.sweep.parallel = other.sweep.parallel;
        }

        // Report
        if other.report.output_path.is_some() {
            base.report.output_path = other.report.output_path.clone();
        }
        if other.report.format.is_some() {
            base.report.format = other.report.format;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GROUPTEST_FIELDS_PER_BATCH`, `GROUPTEST_SEED`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut SimulationConfig) {
        if let Some(v) = env_parse::<usize>("GROUPTEST_FIELDS_PER_BATCH") {
            config.batch.fields_per_batch = Some(v);
        }
        if let Some(v) = env_parse::<u64>("GROUPTEST_SEED") {
            config.batch.seed = Some(v);
        }
        if let Some(v) = env_parse::<u64>("GROUPTEST_TRIALS_PER_THRESHOLD") {
            config.sweep.trials_per_threshold = Some(v);
        }
        if let Some(v) = env_parse::<f64>("GROUPTEST_THRESHOLD_START") {
            config.sweep.threshold_start = Some(v);
        }
        if let Some(v) = env_parse::<f64>("GROUPTEST_THRESHOLD_END") {
            config.sweep.threshold_end = Some(v);
        }
        if let Some(v) = env_parse::<f64>("GROUPTEST_THRESHOLD_STEP") {
            config.sweep.threshold_step = Some(v);
        }
        if let Some(v) = env_parse::<f64>("GROUPTEST_STARTING_PROBABILITY_GUESS") {
            config.sweep.starting_probability_guess = Some(v);
        }
        if let Some(v) = env_parse::<bool>("GROUPTEST_PARALLEL") {
            config.sweep.parallel = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut SimulationConfig, cli: &CliOverrides) {
        if let Some(v) = cli.fields_per_batch {
            config.batch.fields_per_batch = Some(v);
        }
        if let Some(v) = cli.seed {
            config.batch.seed = Some(v);
        }
        if let Some(v) = cli.threshold_start {
            config.sweep.threshold_start = Some(v);
        }
        if let Some(v) = cli.threshold_end {
            config.sweep.threshold_end = Some(v);
        }
        if let Some(v) = cli.threshold_step {
            config.sweep.threshold_step = Some(v);
        }
        if let Some(v) = cli.trials_per_threshold {
            config.sweep.trials_per_threshold = Some(v);
        }
        if let Some(v) = cli.starting_probability_guess {
            config.sweep.starting_probability_guess = Some(v);
        }
        if !cli.strategies.is_empty() {
            config.sweep.strategies = cli.strategies.clone();
        }
        if let Some(v) = cli.parallel {
            config.sweep.parallel = Some(v);
        }
        if let Some(ref v) = cli.output_path {
            config.report.output_path = Some(v.clone());
        }
        if let Some(v) = cli.format {
            config.report.format = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|val| val.trim().parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
