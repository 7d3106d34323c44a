// Single source of truth for all default values.

// --- Batch ---
pub const DEFAULT_FIELDS_PER_BATCH: usize = 100;

// --- Sweep ---
pub const DEFAULT_THRESHOLD_START: f64 = 0.01;
pub const DEFAULT_THRESHOLD_END: f64 = 1.00;
pub const DEFAULT_THRESHOLD_STEP: f64 = 0.01;
pub const DEFAULT_TRIALS_PER_THRESHOLD: u64 = 1_000;
pub const DEFAULT_STARTING_PROBABILITY_GUESS: f64 = 0.9;
pub const DEFAULT_PARALLEL: bool = false;

// --- Report ---
pub const DEFAULT_OUTPUT_PATH: &str = "grouptest-results.csv";

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "grouptest.toml";
