//! Diagnostics output using tracing.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV: &str = "GPU_FALLBACK_SCAN_LOG";

/// Initialize the stderr subscriber. Stdout is reserved for reports.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
