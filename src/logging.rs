//! Log configuration.

use std::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_ENV_CONFIG: &str = "info,issue_migration=debug";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(
        "Could not set tracing global default subscriber,\n  caused by: {}",
        source
    )]
    TracingSetGlobalDefaultError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
    #[error(
        "Wrong env filter configuration: {}\n  caused by: {}",
        configuration,
        source
    )]
    EnvFilterConfigurationError {
        source: tracing_subscriber::filter::ParseError,
        configuration: String,
    },
}

fn env_filter(log_config: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::from_str(log_config).map_err(|e| LoggingError::EnvFilterConfigurationError {
        source: e,
        configuration: log_config.to_string(),
    })
}

/// Configure logging from `RUST_LOG`, falling back to a default filter.
pub fn configure_logging() -> Result<(), LoggingError> {
    let log_config = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_ENV_CONFIG.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&log_config)?)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::TracingSetGlobalDefaultError { source: e })
}
