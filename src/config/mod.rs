//! Configuration loading for the salary adjustment service.
//!
//! This module provides functionality to load the service configuration
//! from a YAML file and apply environment overrides.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! let addr = loader.config().server.socket_addr().unwrap();
//! println!("Binding {}", addr);
//! ```

mod loader;
mod types;

pub use loader::{CURRENT_YEAR_ENV, ConfigLoader, HOST_ENV, LOG_LEVEL_ENV, PORT_ENV};
pub use types::{CalculationConfig, LoggingConfig, ServerConfig, ServiceConfig};
