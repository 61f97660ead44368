//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the debug flag picks between
//! `debug` and `info`. Logs go to stderr so stdout stays clean for the
//! one-shot CLI commands.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given debug flag
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
