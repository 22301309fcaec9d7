//! Working-set story form used by the live consistency checks.
//!
//! During an estimation session the UI holds a flat list of stories with a
//! single agreed point value each. The pairwise, set, cross-domain, and
//! real-time validators all operate on this form rather than the full
//! enhanced schema.

use serde::{Deserialize, Serialize};

use super::story::ComplexityFactors;

/// A story as seen by the live estimation validators: one point value plus
/// a complexity profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedStory {
    /// Short story title, used in feedback and issue text.
    pub title: String,
    /// Agreed story points. Zero means "not yet estimated" and is treated
    /// as invalid by the pairwise comparator.
    #[serde(default)]
    pub points: i64,
    /// Qualitative complexity profile.
    #[serde(default)]
    pub complexity_factors: ComplexityFactors,
    /// Free-text domain tag for cross-domain grouping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl EstimatedStory {
    /// Convenience constructor for a titled, pointed story with a profile.
    pub fn new(title: impl Into<String>, points: i64, complexity_factors: ComplexityFactors) -> Self {
        Self {
            title: title.into(),
            points,
            complexity_factors,
            domain: None,
        }
    }
}
