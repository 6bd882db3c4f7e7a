//! Structured logging setup
//!
//! One init entry point building a `tracing-subscriber` stack. The embedding
//! application calls this once at startup; library code only emits `tracing`
//! events and never installs a subscriber itself.

use crate::utils::error::{ConsoleError, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Output format for log events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Pretty,
    /// Newline-delimited JSON, one object per event
    Json,
}

/// Install the global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string (e.g. `"argus_console=debug"`);
/// when `None`, the `RUST_LOG` environment variable is consulted with a
/// default of `info`.
pub fn init_logging(filter: Option<&str>, format: LogFormat) -> Result<()> {
    let env_filter = match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| ConsoleError::Config(format!("Invalid log filter: {}", e)))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConsoleError::Config(format!("Failed to install subscriber: {}", e)))?;

    debug!("Logging initialized");
    Ok(())
}
