//! Logging infrastructure for TrackTiles.
//!
//! Structured logging via `tracing`, written to stderr so that generated
//! output and progress messages never mix. Verbosity is configurable through
//! the `RUST_LOG` environment variable and defaults to `info`.

use std::io;

use tracing_subscriber::EnvFilter;

/// Initialize the logging system.
///
/// Safe to call more than once; only the first call installs the global
/// subscriber (later calls are no-ops, which keeps tests independent).
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_logging();
        init_logging();
    }
}
