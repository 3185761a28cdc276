// src/logging.rs
use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Route `log` records from the library crates to stderr.
///
/// Defaults to `warn`, which is where skipped entries are reported;
/// `RUST_LOG=debug` additionally shows skipped links and special files.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .try_init();
}
