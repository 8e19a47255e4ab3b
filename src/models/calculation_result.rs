//! Calculation result models for the Salary Adjustment Engine.
//!
//! This module contains the [`ComputationResult`] type and the audit steps
//! that record how each part of an adjustment was derived.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AgeBracket;

/// Which flat amount was applied after the percentage readjustment.
///
/// # Example
///
/// ```
/// use salary_engine::models::TenureAdjustment;
///
/// assert_eq!(TenureAdjustment::for_years_of_service(10), TenureAdjustment::Discount);
/// assert_eq!(TenureAdjustment::for_years_of_service(11), TenureAdjustment::Surcharge);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureAdjustment {
    /// Ten years of service or fewer: the discount is subtracted.
    Discount,
    /// More than ten years of service: the surcharge is added.
    Surcharge,
}

impl TenureAdjustment {
    /// Selects the branch for a number of years of service.
    ///
    /// The threshold is inclusive on the discount side.
    pub fn for_years_of_service(years_of_service: i32) -> Self {
        if years_of_service <= crate::calculation::TENURE_THRESHOLD_YEARS {
            TenureAdjustment::Discount
        } else {
            TenureAdjustment::Surcharge
        }
    }
}

impl std::fmt::Display for TenureAdjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenureAdjustment::Discount => write!(f, "discount"),
            TenureAdjustment::Surcharge => write!(f, "surcharge"),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a salary adjustment.
///
/// Only `new_salary` is rounded; the percentage and the applied amount are
/// the exact rule constants.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::AgeBracket;
/// use salary_engine::models::{ComputationResult, TenureAdjustment};
/// use rust_decimal::Decimal;
///
/// let result = ComputationResult {
///     new_salary: Decimal::new(182500, 2),
///     readjustment_percent: Decimal::new(8, 0),
///     applied_amount: Decimal::new(-11, 0),
///     years_of_service: 10,
///     bracket: AgeBracket::YoungAdult,
///     tenure_adjustment: TenureAdjustment::Discount,
///     audit_trace: vec![],
/// };
/// assert_eq!(result.new_salary.to_string(), "1825.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputationResult {
    /// The adjusted salary, rounded to two decimal places.
    pub new_salary: Decimal,
    /// The percentage readjustment applied to the base salary.
    pub readjustment_percent: Decimal,
    /// The flat amount applied: negative for a discount, positive for a surcharge.
    pub applied_amount: Decimal,
    /// Current year minus hire year.
    pub years_of_service: i32,
    /// The age bracket that selected the rule.
    pub bracket: AgeBracket,
    /// Which tenure branch applied.
    pub tenure_adjustment: TenureAdjustment,
    /// Ordered record of every calculation decision.
    pub audit_trace: Vec<AuditStep>,
}
