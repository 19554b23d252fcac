//! Tracing initialization for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber with `RUST_LOG`-style filtering,
/// defaulting to `info` when no filter is set.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}
