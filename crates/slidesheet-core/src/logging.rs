//! Logging bootstrap for hosts and demos.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary embedding the sheet.

use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "slidesheet=debug,slidesheet_core=info";

/// Install a `fmt` subscriber honoring `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // A subscriber may already be installed by the host or another test.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Install a `fmt` subscriber with an explicit filter directive.
pub fn init_with_filter(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .try_init();
}
