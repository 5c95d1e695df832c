//! Tracing subscriber setup.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::error::{CoreError, CoreResult};

/// Initialize the global tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `log_level` (typically
/// [`InterfaceConfig::log_level`](crate::InterfaceConfig::log_level)).
///
/// # Errors
///
/// Returns an error if `log_level` is not a valid filter directive or a
/// global subscriber is already installed.
pub fn init_tracing(log_level: &str) -> CoreResult<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| CoreError::Config(format!("failed to install tracing subscriber: {e}")))?;

    Ok(())
}
