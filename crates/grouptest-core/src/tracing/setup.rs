//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Filter used when `GROUPTEST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "grouptest_core=info,grouptest_engine=info,grouptest_sim=info";

/// Initialize the tracing/logging system.
///
/// Reads the `GROUPTEST_LOG` environment variable for per-crate log levels.
/// Format: `GROUPTEST_LOG=grouptest_sim=debug,grouptest_engine=trace`
///
/// Output goes to stderr so that report rows on stdout stay clean.
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("GROUPTEST_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
