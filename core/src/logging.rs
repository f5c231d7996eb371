//! Structured logging with tracing.
//!
//! Logs go to stderr so stdout carries only the console step lines.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Error, Result};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "HEXWIRE_LOG";

/// Filter used when the environment does not set one.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "hexwire=debug,hexwire_core=debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber.
///
/// `HEXWIRE_LOG` wins over `verbose` when set.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialize logging: {e}")))
}
