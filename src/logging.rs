//! Logging via the tracing crate.

use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset or unparseable
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Stdout is left alone so the minted object link is the only thing printed there. Calling this
/// twice is harmless; the second subscriber is dropped.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
