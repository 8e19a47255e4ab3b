//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file and applying environment overrides.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Environment variable overriding `server.port`.
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding `server.host`.
pub const HOST_ENV: &str = "HOST";
/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";
/// Environment variable overriding `calculation.current_year`.
pub const CURRENT_YEAR_ENV: &str = "CURRENT_YEAR";

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 127.0.0.1
///   port: 3000
/// logging:
///   level: info
/// calculation:
///   current_year: ~
/// ```
///
/// Every section and key is optional and falls back to its default.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml")?.with_env_overrides()?;
/// println!("Listening on port {}", loader.config().server.port);
/// # Ok::<(), salary_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML or unexpected types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config = Self::load_yaml::<ServiceConfig>(path.as_ref())?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Applies overrides from the process environment.
    ///
    /// `PORT`, `HOST`, `LOG_LEVEL` and `CURRENT_YEAR` replace the matching
    /// file values when set.
    pub fn with_env_overrides(self) -> EngineResult<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup.
    ///
    /// Blank values are ignored; malformed numbers fail with
    /// `InvalidConfigValue`.
    pub fn with_overrides<F>(mut self, lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value_of = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(port) = value_of(PORT_ENV) {
            self.config.server.port = port
                .trim()
                .parse()
                .map_err(|_| EngineError::InvalidConfigValue {
                    key: PORT_ENV.to_string(),
                    message: format!("'{}' is not a valid port number", port),
                })?;
        }

        if let Some(host) = value_of(HOST_ENV) {
            self.config.server.host = host.trim().to_string();
        }

        if let Some(level) = value_of(LOG_LEVEL_ENV) {
            self.config.logging.level = level.trim().to_string();
        }

        if let Some(year) = value_of(CURRENT_YEAR_ENV) {
            let year = year
                .trim()
                .parse()
                .map_err(|_| EngineError::InvalidConfigValue {
                    key: CURRENT_YEAR_ENV.to_string(),
                    message: format!("'{}' is not a valid year", year),
                })?;
            self.config.calculation.current_year = Some(year);
        }

        Ok(self)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}
