//! Human-readable sweep totals for the terminal.

use std::io::{self, Write};

use crate::driver::SweepSummary;
use crate::report::calls_per_record;

/// Print one line per strategy with its calls, successes, and bad items
/// summed over the whole sweep.
pub fn write_totals<W: Write>(summary: &SweepSummary, out: &mut W) -> io::Result<()> {
    let trials = summary.total_trials();
    writeln!(
        out,
        "{:<22} {:>14} {:>14} {:>12} {:>16}",
        "strategy", "calls", "success", "bad", "calls/record"
    )?;
    for (strategy, totals) in summary.totals_by_strategy() {
        writeln!(
            out,
            "{:<22} {:>14} {:>14} {:>12} {:>16.4}",
            strategy.as_str(),
            totals.call_count,
            totals.success_count,
            totals.bad_count,
            calls_per_record(totals.call_count, trials),
        )?;
    }
    Ok(())
}
