//! Validation result types and stable error codes.
//!
//! Every validation entry point returns a [`ValidationResult`]. Rules never
//! short-circuit: a caller always sees the full list of violations for the
//! input it supplied. Codes are stable strings intended for programmatic
//! matching; messages are for humans.

use serde::{Deserialize, Serialize};

/// Stable error codes emitted by the schema validator.
pub mod codes {
    /// Points value is not a non-negative integer.
    pub const INVALID_POINTS_TYPE: &str = "INVALID_POINTS_TYPE";
    /// Points value is not on the Fibonacci scale.
    pub const INVALID_POINTS_VALUE: &str = "INVALID_POINTS_VALUE";
    /// Experience level outside the closed set.
    pub const INVALID_EXPERIENCE_LEVEL: &str = "INVALID_EXPERIENCE_LEVEL";
    /// Domain knowledge outside the closed set.
    pub const INVALID_DOMAIN_KNOWLEDGE: &str = "INVALID_DOMAIN_KNOWLEDGE";
    /// Technical stack outside the closed set.
    pub const INVALID_TECHNICAL_STACK: &str = "INVALID_TECHNICAL_STACK";
    /// Team size outside the 1..=12 range.
    pub const INVALID_TEAM_SIZE: &str = "INVALID_TEAM_SIZE";
    /// Confidence level outside the closed set.
    pub const INVALID_CONFIDENCE_LEVEL: &str = "INVALID_CONFIDENCE_LEVEL";
    /// Complexity factor outside the closed set.
    pub const INVALID_COMPLEXITY_FACTOR: &str = "INVALID_COMPLEXITY_FACTOR";
    /// A large story is not flagged as requiring breakdown.
    pub const MISSING_BREAKDOWN_REQUIREMENT: &str = "MISSING_BREAKDOWN_REQUIREMENT";
    /// Breakdown required but no suggestions provided.
    pub const MISSING_BREAKDOWN_SUGGESTIONS: &str = "MISSING_BREAKDOWN_SUGGESTIONS";
    /// Breakdown technique outside the closed set.
    pub const INVALID_BREAKDOWN_TECHNIQUE: &str = "INVALID_BREAKDOWN_TECHNIQUE";
    /// A breakdown's resulting story is still larger than 8 points.
    pub const BREAKDOWN_RESULT_TOO_LARGE: &str = "BREAKDOWN_RESULT_TOO_LARGE";
    /// A required string field is empty or missing.
    pub const MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
    /// Acceptance criteria list is empty.
    pub const EMPTY_ACCEPTANCE_CRITERIA: &str = "EMPTY_ACCEPTANCE_CRITERIA";
    /// No estimation perspectives present.
    pub const MISSING_ESTIMATION_VARIANCE: &str = "MISSING_ESTIMATION_VARIANCE";
    /// Non-estimable work type outside the closed set.
    pub const INVALID_WORK_TYPE: &str = "INVALID_WORK_TYPE";
    /// Dataset metadata block absent.
    pub const MISSING_METADATA: &str = "MISSING_METADATA";
    /// Exercise id is not a positive integer.
    pub const INVALID_EXERCISE_ID: &str = "INVALID_EXERCISE_ID";
    /// Too few small stories across the collection.
    pub const POOR_SIZE_DISTRIBUTION: &str = "POOR_SIZE_DISTRIBUTION";
    /// Large stories present without breakdown guidance.
    pub const MISSING_BREAKDOWN_GUIDANCE: &str = "MISSING_BREAKDOWN_GUIDANCE";
}

/// A single validation violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Dotted field path, e.g. `stories[2].estimationVariance.baseTeam.points`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
    /// Stable code from [`codes`].
    pub code: String,
}

impl ValidationError {
    /// Builds a violation entry.
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// The outcome of a validation entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no violations were found.
    pub is_valid: bool,
    /// Every violation found, in rule order.
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Builds a result from accumulated errors; `is_valid` follows from
    /// whether the list is empty.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A result with no violations.
    pub fn valid() -> Self {
        Self::from_errors(Vec::new())
    }

    /// True if any violation carries the given code.
    pub fn has_code(&self, code: &str) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_errors_sets_validity() {
        assert!(ValidationResult::from_errors(vec![]).is_valid);

        let result = ValidationResult::from_errors(vec![ValidationError::new(
            "points",
            "bad",
            codes::INVALID_POINTS_VALUE,
        )]);
        assert!(!result.is_valid);
        assert!(result.has_code(codes::INVALID_POINTS_VALUE));
        assert!(!result.has_code(codes::INVALID_POINTS_TYPE));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&ValidationResult::valid()).unwrap();
        assert!(json.contains("isValid"));
    }
}
