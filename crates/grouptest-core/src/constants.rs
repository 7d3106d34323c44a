/// Simulator version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard cap on trials per threshold step. Larger requests are clamped.
pub const MAX_TRIALS_PER_THRESHOLD: u64 = 1_000_000;

/// Hard cap on threshold values in one sweep.
pub const MAX_THRESHOLD_STEPS: usize = 100_000;

/// Pass probability the probability-targeted strategy aims for per group.
pub const TARGET_GROUP_PASS_PROBABILITY: f64 = 0.5;

/// Decimal places kept for calls-per-record in reports.
pub const CALLS_PER_RECORD_PRECISION: u32 = 4;

/// Column header of the tabular report, in row order.
pub const REPORT_HEADER: [&str; 7] = [
    "strategy",
    "threshold",
    "calls_per_record",
    "trials",
    "total_calls",
    "total_success",
    "total_bad",
];
