//! Employee input models.
//!
//! This module defines the unvalidated [`RawEmployeeInput`] as it arrives
//! from a query string, JSON body, or command line, and the
//! [`ValidatedEmployee`] that only the validator can produce.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// The gender code used to select an adjustment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male, code "M".
    #[serde(rename = "M")]
    Male,
    /// Female, code "F".
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Parses a gender code case-insensitively.
    ///
    /// Only the exact codes "M" and "F" (in either case) are accepted;
    /// surrounding whitespace is not stripped.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::Gender;
    ///
    /// assert_eq!(Gender::from_code("f"), Some(Gender::Female));
    /// assert_eq!(Gender::from_code("M"), Some(Gender::Male));
    /// assert_eq!(Gender::from_code("x"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case("M") {
            Some(Gender::Male)
        } else if code.eq_ignore_ascii_case("F") {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// Returns the one-letter code for this gender.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// The five employee fields exactly as they were received.
///
/// Every field is optional text. JSON numbers are accepted and kept in
/// their textual form so that the validator sees one representation.
/// The Portuguese parameter names of the legacy service are accepted as
/// aliases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEmployeeInput {
    /// Age in years.
    #[serde(default, alias = "idade", deserialize_with = "text_or_number")]
    pub age: Option<String>,
    /// Gender code, "M" or "F".
    #[serde(default, alias = "sexo", deserialize_with = "text_or_number")]
    pub gender: Option<String>,
    /// Base salary before adjustment.
    #[serde(default, alias = "salario_base", deserialize_with = "text_or_number")]
    pub base_salary: Option<String>,
    /// Year the employee was hired.
    #[serde(
        default,
        alias = "anoContratacao",
        alias = "hireYear",
        deserialize_with = "text_or_number"
    )]
    pub hire_year: Option<String>,
    /// Employee registration number.
    #[serde(
        default,
        alias = "matricula",
        alias = "employeeId",
        deserialize_with = "text_or_number"
    )]
    pub employee_id: Option<String>,
}

impl RawEmployeeInput {
    /// Creates a raw input with all five fields present.
    ///
    /// # Examples
    ///
    /// ```
    /// use salary_engine::models::RawEmployeeInput;
    ///
    /// let raw = RawEmployeeInput::from_fields("18", "F", "1700", "2014", "12345");
    /// assert_eq!(raw.gender.as_deref(), Some("F"));
    /// assert!(!raw.is_empty());
    /// ```
    pub fn from_fields(
        age: impl Into<String>,
        gender: impl Into<String>,
        base_salary: impl Into<String>,
        hire_year: impl Into<String>,
        employee_id: impl Into<String>,
    ) -> Self {
        Self {
            age: Some(age.into()),
            gender: Some(gender.into()),
            base_salary: Some(base_salary.into()),
            hire_year: Some(hire_year.into()),
            employee_id: Some(employee_id.into()),
        }
    }

    /// Returns true when none of the five fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.base_salary.is_none()
            && self.hire_year.is_none()
            && self.employee_id.is_none()
    }
}

/// Accepts a string, number, or boolean and keeps its text.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
        Flag(bool),
    }

    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
        Scalar::Flag(flag) => flag.to_string(),
    }))
}

/// Employee data that has passed every validation rule.
///
/// Instances are only created by
/// [`parse_employee_input`](crate::validation::parse_employee_input), so
/// holding one guarantees the age falls in a rated bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedEmployee {
    age: u8,
    gender: Gender,
    base_salary: Decimal,
    hire_year: i32,
    employee_id: u128,
}

impl ValidatedEmployee {
    pub(crate) fn new(
        age: u8,
        gender: Gender,
        base_salary: Decimal,
        hire_year: i32,
        employee_id: u128,
    ) -> Self {
        Self {
            age,
            gender,
            base_salary,
            hire_year,
            employee_id,
        }
    }

    /// Age in completed years, within 18..=99.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// The employee's gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Base salary, never negative and at most
    /// [`MAXIMUM_BASE_SALARY`](crate::validation::MAXIMUM_BASE_SALARY).
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Hire year, always after 1960.
    pub fn hire_year(&self) -> i32 {
        self.hire_year
    }

    /// Employee registration number, always positive.
    pub fn employee_id(&self) -> u128 {
        self.employee_id
    }
}
