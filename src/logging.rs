//! Logging initialisation.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. `format` is `text`
/// (human-readable, ANSI colours) or `json` (one object per line).
///
/// # Errors
///
/// Returns an error if `default_level` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init_logging(default_level: &str, format: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match format {
        "json" => builder
            .json()
            .with_current_span(true)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?,
        _ => builder
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?,
    }

    Ok(())
}
