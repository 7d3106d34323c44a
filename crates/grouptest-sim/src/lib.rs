//! # grouptest-sim
//!
//! Compares group-testing strategies over a sweep of bad-item thresholds.
//!
//! For every threshold the driver generates fresh uniform batches, classifies
//! each one under every selected strategy, feeds each strategy's outcome back
//! into that strategy's learned probability, and emits one report row per
//! strategy with its call totals.

pub mod console;
pub mod driver;
pub mod generator;
pub mod report;

pub use driver::{StrategyTotals, SweepSummary, ThresholdSummary, TrialDriver};
pub use generator::{BatchSource, ReplaySource, UniformBatchGenerator};
pub use report::{CollectingSink, CsvReportSink, JsonLinesReportSink, ReportRow, ReportSink};
