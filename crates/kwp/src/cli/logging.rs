//! Diagnostic logging to stderr.

use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `-v` and `-vv` select info and debug; without them `RUST_LOG` is
/// honored, falling back to warnings only.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
