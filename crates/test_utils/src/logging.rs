//! Test Logging
//!
//! Installs a tracing subscriber once per test process. The filter comes from
//! `RUST_LOG` and defaults to `warn`; output goes through the test writer so
//! it is captured per test.

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Another harness may already own the global subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Initializes test logging; safe to call from every test
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
