//! Tracing subscriber setup for the service binary.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{EngineError, EngineResult};

/// Builds the log filter: `RUST_LOG` when set, else the configured level.
pub fn env_filter(config: &LoggingConfig) -> EngineResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|err| EngineError::Telemetry {
            message: format!("invalid log level/filter '{}': {}", config.level, err),
        }),
    }
}

/// Installs the global fmt subscriber.
pub fn init(config: &LoggingConfig) -> EngineResult<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| EngineError::Telemetry {
            message: err.to_string(),
        })
}
