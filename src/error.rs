//! Error types for the Salary Adjustment Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while validating input,
//! computing adjustments, and running the service.

use thiserror::Error;

use crate::calculation::AgeBracket;
use crate::models::{Gender, Violation};

/// The main error type for the Salary Adjustment Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The raw employee input broke one or more validation rules.
    ///
    /// The list is never empty and keeps the order in which rules are checked.
    #[error("Input validation failed with {} violation(s)", .violations.len())]
    ValidationFailed {
        /// Every violated rule, in rule order.
        violations: Vec<Violation>,
    },

    /// A rule was requested for a bracket without one.
    #[error("No adjustment rule for bracket {bracket} and gender {gender}")]
    RuleNotFound {
        /// The requested bracket.
        bracket: AgeBracket,
        /// The requested gender.
        gender: Gender,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value (file or environment override) was malformed.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidConfigValue {
        /// The configuration key or environment variable.
        key: String,
        /// What was wrong with the value.
        message: String,
    },

    /// The tracing subscriber could not be installed.
    #[error("Telemetry error: {message}")]
    Telemetry {
        /// A description of the failure.
        message: String,
    },

    /// An I/O error from binding or serving the HTTP listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Returns the violation messages if this is a validation failure.
    pub fn violation_messages(&self) -> Vec<&str> {
        match self {
            EngineError::ValidationFailed { violations } => {
                violations.iter().map(|v| v.message()).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/service.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/service.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_validation_failed_displays_count() {
        let error = EngineError::ValidationFailed {
            violations: vec![Violation::Age, Violation::Gender],
        };
        assert_eq!(
            error.to_string(),
            "Input validation failed with 2 violation(s)"
        );
    }

    #[test]
    fn test_violation_messages_preserve_order() {
        let error = EngineError::ValidationFailed {
            violations: vec![Violation::Gender, Violation::EmployeeId],
        };
        assert_eq!(
            error.violation_messages(),
            vec![
                "Gender must be M (male) or F (female).",
                "Employee id must be an integer greater than zero."
            ]
        );
    }

    #[test]
    fn test_violation_messages_empty_for_other_errors() {
        let error = EngineError::RuleNotFound {
            bracket: AgeBracket::Invalid,
            gender: Gender::Male,
        };
        assert!(error.violation_messages().is_empty());
    }

    #[test]
    fn test_rule_not_found_displays_bracket_and_gender() {
        let error = EngineError::RuleNotFound {
            bracket: AgeBracket::Invalid,
            gender: Gender::Female,
        };
        assert_eq!(
            error.to_string(),
            "No adjustment rule for bracket Invalid and gender F"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "salary overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: salary overflow");
    }

    #[test]
    fn test_invalid_config_value_displays_key_and_message() {
        let error = EngineError::InvalidConfigValue {
            key: "PORT".to_string(),
            message: "must be a valid u16".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration value for 'PORT': must be a valid u16"
        );
    }

    #[test]
    fn test_io_error_converts_with_question_mark() {
        fn fails() -> EngineResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken"))?;
            Ok(())
        }

        match fails() {
            Err(EngineError::Io(err)) => assert_eq!(err.kind(), std::io::ErrorKind::AddrInUse),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }
}
