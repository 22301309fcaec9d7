//! Legacy (flat) story schema.
//!
//! Older exercise datasets describe stories with a single "correct" point
//! value and free-text complexity factors. Every field is optional: the
//! transformer must accept any shape and synthesize defaults, so nothing
//! here is allowed to fail deserialization.

use serde::{Deserialize, Serialize};

/// Free-text estimation factors carried by legacy stories.
///
/// The values are prose ("High - several unknowns"), not enums. The
/// transformer classifies them with a tolerant substring matcher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyFactors {
    /// Free-text complexity description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    /// Free-text effort description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    /// Free-text uncertainty description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<String>,
}

/// A story in the legacy flat schema. All fields optional by design.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStory {
    /// Identifier, if the legacy record carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Story title. Falls back to `name`, then to a placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Alternate title field used by the oldest datasets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Story description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The exercise's reference point value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_points: Option<i64>,
    /// Acceptance criteria, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<Vec<String>>,
    /// Free-text estimation factors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<LegacyFactors>,
    /// Domain tag, carried through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

/// Metadata on a legacy dataset file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyMetadata {
    /// Exercise number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercise_id: Option<i64>,
    /// Exercise type tag.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub exercise_type: Option<String>,
    /// Schema version string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Human description of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A legacy dataset: optional metadata plus an optional story collection.
///
/// A missing story collection is the one structurally malformed case the
/// transformer refuses to repair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyDataset {
    /// Dataset metadata, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<LegacyMetadata>,
    /// The legacy story records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stories: Option<Vec<LegacyStory>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes() {
        let story: LegacyStory = serde_json::from_str("{}").unwrap();
        assert!(story.title.is_none());
        assert!(story.correct_points.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let story: LegacyStory = serde_json::from_str(
            r#"{"correctPoints": 8, "acceptanceCriteria": ["a", "b"], "factors": {"complexity": "High - legacy code"}}"#,
        )
        .unwrap();
        assert_eq!(story.correct_points, Some(8));
        assert_eq!(story.acceptance_criteria.as_deref(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(
            story.factors.unwrap().complexity.as_deref(),
            Some("High - legacy code")
        );
    }

    #[test]
    fn test_metadata_type_field_rename() {
        let meta: LegacyMetadata =
            serde_json::from_str(r#"{"exerciseId": 3, "type": "estimation"}"#).unwrap();
        assert_eq!(meta.exercise_id, Some(3));
        assert_eq!(meta.exercise_type.as_deref(), Some("estimation"));
    }
}
