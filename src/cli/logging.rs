//! Diagnostic logging setup
//!
//! Library code emits `tracing` events; this installs the subscriber that
//! writes them to stderr. `RUST_LOG` overrides the level chosen here.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "taskfile_cli=debug,warn"
    } else {
        "warn"
    }
}

/// Installs the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .try_init();
}
