//! Configuration types for the salary adjustment service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file.

use chrono::{Datelike, Local};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};

use crate::error::{EngineError, EngineResult};

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Resolves the configured host and port into a socket address.
    ///
    /// `localhost` maps to the IPv4 loopback; any other host must be an
    /// IP literal.
    ///
    /// # Example
    ///
    /// ```
    /// use salary_engine::config::ServerConfig;
    ///
    /// let server = ServerConfig { host: "localhost".to_string(), port: 3000 };
    /// assert_eq!(server.socket_addr().unwrap().to_string(), "127.0.0.1:3000");
    /// ```
    pub fn socket_addr(&self) -> EngineResult<SocketAddr> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| EngineError::InvalidConfigValue {
                key: "server.host".to_string(),
                message: format!("'{}' is not an IPv4 or IPv6 address", self.host),
            })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Calculation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalculationConfig {
    /// Fixed year used for years of service; the system clock when absent.
    #[serde(default)]
    pub current_year: Option<i32>,
}

impl CalculationConfig {
    /// Returns the configured year, or the current local calendar year.
    pub fn resolve_current_year(&self) -> i32 {
        self.current_year.unwrap_or_else(|| Local::now().year())
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Calculation settings.
    #[serde(default)]
    pub calculation: CalculationConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}
