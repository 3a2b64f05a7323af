//! Tracing subscriber setup.
//!
//! The domain layer only emits `tracing` events; a host application calls
//! [`init_tracing`] once at startup to decide where they go.

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Build the event filter. `RUST_LOG` takes precedence over the configured level.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))
}

/// Install the global tracing subscriber.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(config)?;

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(config.with_target),
            )
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(config.with_target))
            .try_init(),
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    tracing::info!(format = ?config.format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_installs_once() {
        let config = LoggingConfig::default();

        assert!(init_tracing(&config).is_ok());
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::SubscriberInit(_))
        ));
    }

    #[test]
    fn build_filter_accepts_default_level() {
        assert!(build_filter(&LoggingConfig::default()).is_ok());
    }
}
