//! Validation violation model.
//!
//! Each [`Violation`] names one broken input rule. The validator collects
//! them in rule order so callers can report every problem at once.

use serde::{Serialize, Serializer};

/// A single violated input rule.
///
/// # Example
///
/// ```
/// use salary_engine::models::Violation;
///
/// let violation = Violation::Gender;
/// assert_eq!(violation.field(), "gender");
/// assert_eq!(violation.message(), "Gender must be M (male) or F (female).");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// Age is missing, not a number, or not greater than 16.
    Age,
    /// Gender is missing or not "M"/"F".
    Gender,
    /// Base salary is missing, not a number, or negative.
    BaseSalary,
    /// Base salary is above the largest amount the engine can adjust.
    BaseSalaryTooLarge,
    /// Hire year is missing, not an integer, or not after 1960.
    HireYear,
    /// Employee id is missing, not an integer, or not positive.
    EmployeeId,
    /// Age passed the basic check but falls outside every bracket.
    AgeOutOfBracket,
}

impl Violation {
    /// The input field this violation refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Violation::Age | Violation::AgeOutOfBracket => "age",
            Violation::Gender => "gender",
            Violation::BaseSalary | Violation::BaseSalaryTooLarge => "base_salary",
            Violation::HireYear => "hire_year",
            Violation::EmployeeId => "employee_id",
        }
    }

    /// The human-readable message shown to the end user.
    pub fn message(&self) -> &'static str {
        match self {
            Violation::Age => "Age must be a number greater than 16.",
            Violation::Gender => "Gender must be M (male) or F (female).",
            Violation::BaseSalary => {
                "Base salary must be a valid real number greater than or equal to zero."
            }
            Violation::BaseSalaryTooLarge => {
                "Base salary must not exceed 100000000000000000000000000 (10^26)."
            }
            Violation::HireYear => "Hire year must be an integer greater than 1960.",
            Violation::EmployeeId => "Employee id must be an integer greater than zero.",
            Violation::AgeOutOfBracket => {
                "Age must be between 18 and 99 years (valid age bracket)."
            }
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Violation", 2)?;
        state.serialize_field("field", self.field())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}

/// The ordered result of validating one raw input.
///
/// An empty outcome means the input is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationOutcome {
    violations: Vec<Violation>,
}

impl ValidationOutcome {
    /// Wraps violations collected in rule order.
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns true when no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The violations in rule order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The violation messages in rule order.
    pub fn messages(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|v| v.message().to_string())
            .collect()
    }

    /// Consumes the outcome and returns the violations.
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_violation_has_distinct_message() {
        let all = [
            Violation::Age,
            Violation::Gender,
            Violation::BaseSalary,
            Violation::BaseSalaryTooLarge,
            Violation::HireYear,
            Violation::EmployeeId,
            Violation::AgeOutOfBracket,
        ];
        let mut messages: Vec<&str> = all.iter().map(|v| v.message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }

    #[test]
    fn test_age_violations_share_field() {
        assert_eq!(Violation::Age.field(), "age");
        assert_eq!(Violation::AgeOutOfBracket.field(), "age");
    }

    #[test]
    fn test_salary_violations_share_field() {
        assert_eq!(Violation::BaseSalary.field(), "base_salary");
        assert_eq!(Violation::BaseSalaryTooLarge.field(), "base_salary");
    }

    #[test]
    fn test_violation_serializes_field_and_message() {
        let json = serde_json::to_value(Violation::HireYear).unwrap();
        assert_eq!(json["field"], "hire_year");
        assert_eq!(
            json["message"],
            "Hire year must be an integer greater than 1960."
        );
    }

    #[test]
    fn test_empty_outcome_is_valid() {
        let outcome = ValidationOutcome::default();
        assert!(outcome.is_valid());
        assert!(outcome.messages().is_empty());
    }

    #[test]
    fn test_outcome_messages_keep_order() {
        let outcome = ValidationOutcome::new(vec![Violation::Age, Violation::Gender]);
        assert!(!outcome.is_valid());
        assert_eq!(
            outcome.messages(),
            vec![
                "Age must be a number greater than 16.".to_string(),
                "Gender must be M (male) or F (female).".to_string(),
            ]
        );
    }

    #[test]
    fn test_outcome_serializes_as_array() {
        let outcome = ValidationOutcome::new(vec![Violation::EmployeeId]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["field"], "employee_id");
    }
}
