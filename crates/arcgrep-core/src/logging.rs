//! Logging init: stderr, so stdout and the result file stay clean.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr with `RUST_LOG`-style filtering.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,arcgrep=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
