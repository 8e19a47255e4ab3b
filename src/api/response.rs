//! Response types for the Salary Adjustment Engine API.
//!
//! This module defines the success and error bodies returned by the HTTP
//! API, and the mapping from [`EngineError`] to status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{ComputationResult, Gender, ValidatedEmployee, Violation};

/// One violated input rule as reported to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationDetail {
    /// The offending input field.
    pub field: String,
    /// The end-user message for the rule.
    pub message: String,
}

impl From<&Violation> for ViolationDetail {
    fn from(violation: &Violation) -> Self {
        Self {
            field: violation.field().to_string(),
            message: violation.message().to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Violated input rules, in rule order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<ViolationDetail>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            violations: Vec::new(),
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(code, message)
        }
    }

    /// Creates a validation error response listing every violation.
    pub fn validation_error(violations: &[Violation]) -> Self {
        Self {
            violations: violations.iter().map(ViolationDetail::from).collect(),
            ..Self::new(
                "VALIDATION_ERROR",
                format!(
                    "Input validation failed with {} violation(s)",
                    violations.len()
                ),
            )
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates a malformed query string error response.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ValidationFailed { violations } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(&violations),
            },
            EngineError::RuleNotFound { bracket, gender } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RULE_NOT_FOUND",
                    "No adjustment rule applies",
                    format!("No rule for bracket {} and gender {}", bracket, gender),
                ),
            },
            EngineError::CalculationError { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfigValue { key, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Invalid configuration value",
                    format!("{}: {}", key, message),
                ),
            },
            other @ (EngineError::Telemetry { .. } | EngineError::Io(_)) => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("INTERNAL_ERROR", "Internal error", other.to_string()),
            },
        }
    }
}

/// The validated employee fields echoed back with a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Employee registration number.
    pub employee_id: u128,
    /// Age in years.
    pub age: u8,
    /// Gender code.
    pub gender: Gender,
    /// Base salary before adjustment.
    pub base_salary: Decimal,
    /// Year the employee was hired.
    pub hire_year: i32,
}

impl From<&ValidatedEmployee> for EmployeeSummary {
    fn from(employee: &ValidatedEmployee) -> Self {
        Self {
            employee_id: employee.employee_id(),
            age: employee.age(),
            gender: employee.gender(),
            base_salary: employee.base_salary(),
            hire_year: employee.hire_year(),
        }
    }
}

/// Successful response for one salary adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentResponse {
    /// Unique id of this calculation, matching the request's log lines.
    pub calculation_id: Uuid,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Year the years of service were measured against.
    pub current_year: i32,
    /// The validated input.
    pub employee: EmployeeSummary,
    /// The computed adjustment with its audit trace.
    pub result: ComputationResult,
}

/// Description of one accepted input parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDoc {
    /// Parameter name.
    pub name: String,
    /// Accepted legacy name.
    pub alias: String,
    /// What the parameter must contain.
    pub description: String,
}

/// Usage document returned when the endpoint is called without input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageResponse {
    /// Name of the service.
    pub service: String,
    /// Engine version.
    pub version: String,
    /// One-line description of what the service does.
    pub description: String,
    /// The accepted parameters.
    pub parameters: Vec<ParameterDoc>,
    /// A complete example request.
    pub example: String,
}

impl UsageResponse {
    /// Builds the usage document for a service listening on `port`.
    pub fn new(port: u16) -> Self {
        let parameters = [
            ("age", "idade", "Employee age in years; between 18 and 99."),
            ("gender", "sexo", "M (male) or F (female)."),
            (
                "base_salary",
                "salario_base",
                "Current salary; zero or greater, at most 10^26.",
            ),
            ("hire_year", "anoContratacao", "Year of hire; after 1960."),
            ("employee_id", "matricula", "Registration number; greater than zero."),
        ]
        .into_iter()
        .map(|(name, alias, description)| ParameterDoc {
            name: name.to_string(),
            alias: alias.to_string(),
            description: description.to_string(),
        })
        .collect();

        Self {
            service: "salary-engine".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Computes a readjusted salary from age bracket, gender and years of service."
                .to_string(),
            parameters,
            example: format!(
                "http://localhost:{}/?age=18&gender=F&base_salary=1700&hire_year=2014&employee_id=12345",
                port
            ),
        }
    }
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the service is serving requests.
    pub status: String,
    /// Engine version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
