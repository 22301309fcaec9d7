//! Domain errors for the storygauge estimation engine.
//!
//! Expected-shape violations (bad points, missing fields, disallowed enum
//! values) never surface here -- they accumulate into
//! [`ValidationResult`](crate::domain::models::ValidationResult) entries.
//! `DomainError` is reserved for structurally malformed input that the
//! transformer cannot recover from.

use thiserror::Error;

/// Domain-level errors that can occur in the storygauge system.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Legacy dataset transformation could not complete.
    #[error("Legacy dataset transformation failed: {0}")]
    TransformFailed(String),

    /// Legacy input is structurally malformed (e.g. no story collection).
    #[error("Malformed legacy dataset: {0}")]
    MalformedLegacyData(String),

    /// Dataset file could not be parsed.
    #[error("Dataset parse error: {0}")]
    ParseError(String),
}

/// Convenience alias used throughout the transformer and CLI layers.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::ParseError(err.to_string())
    }
}
