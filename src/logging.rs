//! Logging initialisation via tracing-subscriber.

use crate::error::{PostProcessingError, Result};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, writing to stderr so stdout stays free
/// for browser events.
///
/// `RUST_LOG` wins when set and valid; `level` is the fallback.
pub fn init(level: &str) -> Result<()> {
    let filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(), level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .map_err(|e| PostProcessingError::Logger(format!("failed to set subscriber: {e}")))
}

fn env_filter(from_env: Option<&str>, level: &str) -> Result<EnvFilter> {
    if let Some(directives) = from_env
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| PostProcessingError::Logger(format!("invalid log level '{level}': {e}")))
}
