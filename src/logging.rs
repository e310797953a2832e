//! Logging setup for the CLI. Library code only emits `tracing` events and
//! never includes secret payloads in them.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs a compact stderr subscriber. `RUST_LOG` overrides the default
/// filter. Returns false if a global subscriber was already installed.
pub fn setup_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}
