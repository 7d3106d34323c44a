//! grouptest CLI - compare adaptive group-testing strategies.
//!
//! Sweeps the bad-item threshold, runs the requested number of random
//! batches per step under every strategy, writes one report row per
//! strategy per threshold, and prints sweep-wide totals.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use grouptest_core::config::sweep_config::clamp_trials;
use grouptest_core::config::{CliOverrides, ReportFormat, SimulationConfig};
use grouptest_core::errors::ErrorCode;
use grouptest_sim::report::open_file_sink;
use grouptest_sim::{console, TrialDriver};
use tracing::info;

/// Compare group-testing strategies over a sweep of bad-item thresholds.
///
/// Examples:
///   grouptest --trials 1000                    # Full 1%..100% sweep
///   grouptest --threshold-start 0.02 --threshold-end 0.05 --strategy targeted
///   grouptest --seed 42 --parallel --format jsonl -o results.jsonl
#[derive(Parser, Debug)]
#[command(name = "grouptest")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Directory searched for `grouptest.toml`
    #[arg(long, value_name = "DIR", default_value = ".")]
    config_dir: PathBuf,

    /// Trials per threshold (capped at 1,000,000)
    #[arg(short = 'n', long)]
    trials: Option<u64>,

    /// Items per generated batch
    #[arg(long)]
    fields_per_batch: Option<usize>,

    /// First threshold of the sweep
    #[arg(long)]
    threshold_start: Option<f64>,

    /// Last threshold of the sweep (inclusive)
    #[arg(long)]
    threshold_end: Option<f64>,

    /// Threshold increment
    #[arg(long)]
    threshold_step: Option<f64>,

    /// Learned probability at the start of every threshold step
    #[arg(long)]
    starting_guess: Option<f64>,

    /// Strategy to compare; repeat for several (default: all)
    #[arg(short, long = "strategy", value_name = "NAME")]
    strategies: Vec<String>,

    /// Seed for reproducible batches
    #[arg(long)]
    seed: Option<u64>,

    /// Run threshold steps in parallel
    #[arg(long)]
    parallel: bool,

    /// Report output file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Never ask for a trial count; fall back to the default
    #[arg(long)]
    no_prompt: bool,

    /// Skip the totals table on stdout
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Csv,
    Jsonl,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Jsonl => ReportFormat::Jsonl,
        }
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            fields_per_batch: self.fields_per_batch,
            seed: self.seed,
            threshold_start: self.threshold_start,
            threshold_end: self.threshold_end,
            threshold_step: self.threshold_step,
            trials_per_threshold: self.trials,
            starting_probability_guess: self.starting_guess,
            strategies: self.strategies.clone(),
            parallel: self.parallel.then_some(true),
            output_path: self.output.clone(),
            format: self.format.map(Into::into),
        }
    }
}

fn main() -> Result<()> {
    grouptest_core::tracing::init_tracing();
    let cli = Cli::parse();

    let mut config = SimulationConfig::load(&cli.config_dir, Some(&cli.overrides()))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;

    if config.sweep.trials_per_threshold.is_none() && !cli.no_prompt {
        let requested = prompt_trials(&mut io::stdin().lock(), &mut io::stderr())?;
        config.sweep.trials_per_threshold = Some(clamp_trials(requested));
    }

    let driver = TrialDriver::from_config(&config).map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    let output = config.report.effective_output_path();
    let mut sink = open_file_sink(&output, config.report.effective_format())
        .with_context(|| format!("cannot open report file {}", output.display()))?;

    let summary = driver
        .run(sink.as_mut())
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    info!(path = %output.display(), rows = summary.steps.len() * driver.strategies().len(), "report written");

    if !cli.quiet {
        console::write_totals(&summary, &mut io::stdout().lock())?;
    }
    Ok(())
}

/// Ask for a trial count on `input`, writing the question to `prompt`.
fn prompt_trials<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> Result<u64> {
    write!(prompt, "How many trials per threshold should we run? ")?;
    prompt.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no trial count given on stdin; pass --trials or --no-prompt");
    }
    let trials: u64 = line
        .trim()
        .parse()
        .with_context(|| format!("expected a whole number of trials, got {:?}", line.trim()))?;
    if trials == 0 {
        bail!("trial count must be greater than 0");
    }
    Ok(trials)
}
