//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

/// Variable holding the log filter; falls back to `RUST_LOG`.
const LOG_ENV: &str = "PATHMENU_LOG";

pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
