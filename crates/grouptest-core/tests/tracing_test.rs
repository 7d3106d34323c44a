//! Tests for the tracing setup.

use std::sync::Mutex;

use grouptest_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("GROUPTEST_LOG", "this_is=not=a=filter");
    init_tracing();
    std::env::remove_var("GROUPTEST_LOG");
}
