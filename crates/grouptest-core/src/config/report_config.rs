//! Report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Output encoding of report rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Comma-delimited with a fixed header line.
    #[default]
    Csv,
    /// One JSON object per line.
    Jsonl,
}

/// Where and how sweep rows are written.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output file. Default: `grouptest-results.csv`.
    pub output_path: Option<PathBuf>,
    /// Row encoding. Default: csv.
    pub format: Option<ReportFormat>,
}

impl ReportConfig {
    pub fn effective_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(defaults::DEFAULT_OUTPUT_PATH))
    }

    pub fn effective_format(&self) -> ReportFormat {
        self.format.unwrap_or_default()
    }
}
