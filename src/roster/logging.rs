//! Diagnostic logging.
//!
//! Library code only emits `tracing` events. The binary installs a
//! subscriber once at startup; tests and embedders may install their own or
//! none at all.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "roster=debug"
    } else {
        "warn"
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `verbose`. Calling
/// this twice is harmless.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
