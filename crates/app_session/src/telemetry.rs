//! Tracing setup for the host process
//!
//! The library crates only emit `tracing` events. Whatever embeds the
//! session calls `init_tracing` once at startup to install a subscriber.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SessionConfig;
use crate::error::SessionError;

/// Builds the level filter: `RUST_LOG` wins, then the configured level,
/// then `info`
pub fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber
///
/// # Errors
///
/// Returns `Telemetry` if a global subscriber is already installed.
pub fn init_tracing(config: &SessionConfig) -> Result<(), SessionError> {
    let registry = tracing_subscriber::registry().with(env_filter(&config.log_level));

    if config.log_json {
        registry.with(fmt::layer().json().with_target(true)).try_init()?;
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()?;
    }

    tracing::info!(log_level = %config.log_level, json = config.log_json, "Tracing initialized");
    Ok(())
}
