//! Application state for the Salary Adjustment Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, ServiceConfig};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded service configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded service configuration.
    config: Arc<ServiceConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(loader: ConfigLoader) -> Self {
        Self {
            config: Arc::new(loader.into_config()),
        }
    }

    /// Returns a reference to the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// The year years of service are measured against.
    ///
    /// The configured year when set, otherwise the local calendar year at
    /// the time of the call.
    pub fn current_year(&self) -> i32 {
        self.config.calculation.resolve_current_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalculationConfig;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_current_year_from_config() {
        let config = ServiceConfig {
            calculation: CalculationConfig {
                current_year: Some(2024),
            },
            ..Default::default()
        };
        let state = AppState::new(ConfigLoader::from_config(config));
        assert_eq!(state.current_year(), 2024);
        assert_eq!(state.config().server.port, 3000);
    }
}
