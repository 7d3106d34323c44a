//! Tests for the layered configuration system.

use std::sync::Mutex;

use grouptest_core::config::{CliOverrides, ReportFormat, SimulationConfig};
use grouptest_core::constants::MAX_TRIALS_PER_THRESHOLD;
use grouptest_core::errors::ConfigError;
use grouptest_core::StrategyKind;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all GROUPTEST_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "GROUPTEST_FIELDS_PER_BATCH",
        "GROUPTEST_SEED",
        "GROUPTEST_TRIALS_PER_THRESHOLD",
        "GROUPTEST_THRESHOLD_START",
        "GROUPTEST_THRESHOLD_END",
        "GROUPTEST_THRESHOLD_STEP",
        "GROUPTEST_STARTING_PROBABILITY_GUESS",
        "GROUPTEST_PARALLEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("grouptest.toml"),
        r#"
[batch]
fields_per_batch = 50

[sweep]
trials_per_threshold = 200
threshold_start = 0.05
"#,
    )
    .unwrap();

    std::env::set_var("GROUPTEST_TRIALS_PER_THRESHOLD", "300");

    let cli = CliOverrides {
        threshold_start: Some(0.10),
        ..Default::default()
    };
    let config = SimulationConfig::load(dir.path(), Some(&cli)).unwrap();

    // Project file survives where nothing overrides it
    assert_eq!(config.batch.fields_per_batch, Some(50));
    // Env beats project
    assert_eq!(config.sweep.trials_per_threshold, Some(300));
    // CLI beats project
    assert_eq!(config.sweep.threshold_start, Some(0.10));

    clear_env_vars();
}

#[test]
fn test_missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = SimulationConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.batch.effective_fields_per_batch(), 100);
    assert_eq!(config.sweep.effective_trials_per_threshold(), 1_000);
    assert_eq!(config.sweep.effective_starting_probability_guess(), 0.9);
    assert_eq!(config.sweep.thresholds().len(), 100);
    assert_eq!(config.report.effective_format(), ReportFormat::Csv);
    assert!(!config.sweep.effective_parallel());
}

#[test]
fn test_oversized_trial_count_is_clamped_not_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        trials_per_threshold: Some(5_000_000),
        ..Default::default()
    };
    let config = SimulationConfig::load(dir.path(), Some(&cli)).unwrap();
    assert_eq!(config.sweep.trials_per_threshold, Some(MAX_TRIALS_PER_THRESHOLD));
}

#[test]
fn test_unknown_strategy_fails_fast() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        strategies: vec!["even-split".into(), "quadsect".into()],
        ..Default::default()
    };
    let err = SimulationConfig::load(dir.path(), Some(&cli)).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownStrategy { ref name } if name == "quadsect"));
}

#[test]
fn test_zero_batch_length_rejected() {
    let config = SimulationConfig::from_toml("[batch]\nfields_per_batch = 0\n").unwrap();
    let err = SimulationConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "batch.fields_per_batch"));
}

#[test]
fn test_threshold_bounds_validated() {
    let config = SimulationConfig::from_toml("[sweep]\nthreshold_end = 1.5\n").unwrap();
    assert!(SimulationConfig::validate(&config).is_err());

    let config =
        SimulationConfig::from_toml("[sweep]\nthreshold_start = 0.5\nthreshold_end = 0.2\n")
            .unwrap();
    assert!(SimulationConfig::validate(&config).is_err());

    let config = SimulationConfig::from_toml("[sweep]\nthreshold_step = 0.0\n").unwrap();
    assert!(SimulationConfig::validate(&config).is_err());
}

#[test]
fn test_invalid_toml_reports_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("grouptest.toml"), "[sweep\ntrials = ").unwrap();
    let err = SimulationConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("GROUPTEST_FIELDS_PER_BATCH", "lots");
    let dir = tempdir();
    let config = SimulationConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.batch.fields_per_batch, None);

    clear_env_vars();
}

#[test]
fn test_toml_round_trip_preserves_strategies() {
    let config = SimulationConfig::from_toml(
        r#"
[sweep]
strategies = ["singleton", "probability-targeted"]

[report]
format = "jsonl"
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = SimulationConfig::from_toml(&text).unwrap();
    assert_eq!(
        back.sweep.effective_strategies().unwrap(),
        vec![StrategyKind::Singleton, StrategyKind::ProbabilityTargeted]
    );
    assert_eq!(back.report.effective_format(), ReportFormat::Jsonl);
}

#[test]
fn test_runaway_threshold_step_rejected() {
    let config = SimulationConfig::from_toml("[sweep]\nthreshold_step = 1e-18\n").unwrap();
    let err = SimulationConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "sweep.threshold_step"));
    assert!(config.sweep.thresholds().is_empty());
}

#[test]
fn test_fine_threshold_step_within_cap_accepted() {
    let config = SimulationConfig::from_toml("[sweep]\nthreshold_step = 0.0001\n").unwrap();
    SimulationConfig::validate(&config).unwrap();
    assert_eq!(config.sweep.thresholds().len(), 9_901);
}
