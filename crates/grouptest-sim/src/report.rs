//! Report rows and sinks.
//!
//! Every row carries seven fields in a fixed order: strategy, threshold,
//! calls per record, trials, total calls, total success, total bad.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use grouptest_core::config::ReportFormat;
use grouptest_core::constants::{CALLS_PER_RECORD_PRECISION, REPORT_HEADER};
use grouptest_core::errors::ReportError;
use grouptest_core::models::{ClassificationResult, StrategyKind};
use serde::{Deserialize, Serialize};

/// One summary row: a strategy's totals at one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub strategy: StrategyKind,
    pub threshold: f64,
    pub calls_per_record: f64,
    pub trials: u64,
    pub total_calls: u64,
    pub total_success: u64,
    pub total_bad: u64,
}

impl ReportRow {
    pub fn new(
        strategy: StrategyKind,
        threshold: f64,
        trials: u64,
        totals: &ClassificationResult,
    ) -> Self {
        Self {
            strategy,
            threshold,
            calls_per_record: calls_per_record(totals.call_count, trials),
            trials,
            total_calls: totals.call_count,
            total_success: totals.success_count,
            total_bad: totals.bad_count,
        }
    }

    /// Comma-delimited line in header order, no trailing newline.
    pub fn to_csv_line(&self) -> String {
        format!(
            "{},{},{:.prec$},{},{},{},{}",
            self.strategy,
            self.threshold,
            self.calls_per_record,
            self.trials,
            self.total_calls,
            self.total_success,
            self.total_bad,
            prec = CALLS_PER_RECORD_PRECISION as usize,
        )
    }
}

/// Average calls per batch, rounded to the report precision. Zero trials yields 0.
pub fn calls_per_record(total_calls: u64, trials: u64) -> f64 {
    if trials == 0 {
        return 0.0;
    }
    let scale = 10f64.powi(CALLS_PER_RECORD_PRECISION as i32);
    (total_calls as f64 / trials as f64 * scale).round() / scale
}

/// Destination for report rows.
pub trait ReportSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError>;

    /// Flush buffered output. Called once after the last row.
    fn finish(&mut self) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Delimited tabular output with a fixed header line.
pub struct CsvReportSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvReportSink<W> {
    /// Writes the header immediately.
    pub fn new(mut writer: W) -> Result<Self, ReportError> {
        writeln!(writer, "{}", REPORT_HEADER.join(","))?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for CsvReportSink<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        writeln!(self.writer, "{}", row.to_csv_line())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Newline-delimited JSON, one object per row.
pub struct JsonLinesReportSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesReportSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for JsonLinesReportSink<W> {
    fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        let line = serde_json::to_string(row).map_err(|e| ReportError::Serialization {
            message: e.to_string(),
        })?;
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), ReportError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps rows in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub rows: Vec<ReportRow>,
}

impl ReportSink for CollectingSink {
    fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        self.rows.push(row.clone());
        Ok(())
    }
}

/// Create (truncating) `path` and wrap it in the sink for `format`.
pub fn open_file_sink(
    path: &Path,
    format: ReportFormat,
) -> Result<Box<dyn ReportSink>, ReportError> {
    let writer = BufWriter::new(File::create(path)?);
    Ok(match format {
        ReportFormat::Csv => Box::new(CsvReportSink::new(writer)?),
        ReportFormat::Jsonl => Box::new(JsonLinesReportSink::new(writer)),
    })
}
