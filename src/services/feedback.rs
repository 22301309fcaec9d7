//! Real-time estimation feedback.
//!
//! Called by the UI on every estimate change during a session. Wraps the set
//! validator for an aggregate score and, when reference stories are
//! available, checks each working story against its closest-complexity
//! anchor.

use serde::{Deserialize, Serialize};

use super::complexity_scorer::ComplexityScorer;
use super::consistency::{ConsistencyValidator, CROSS_DOMAIN_SCORE_CUTOFF};
use crate::domain::models::EstimatedStory;

/// Maximum complexity-score distance for a reference story to count as an
/// anchor for a working story.
pub const REFERENCE_SIMILARITY_TOLERANCE: f64 = 2.0;

const INCONSISTENCY_WARNING: &str =
    "Some of your estimates are inconsistent with each other - check the flagged pairs";
const INCONSISTENCY_SUGGESTION: &str =
    "Re-estimate the flagged stories side by side, starting from the one you are most confident about";

/// Live feedback for an in-progress estimation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResult {
    /// Problems worth interrupting the user for.
    pub warnings: Vec<String>,
    /// Softer guidance.
    pub suggestions: Vec<String>,
    /// Aggregate consistency score for the working set.
    pub consistency_score: u32,
}

/// Service producing live feedback from a working set plus optional
/// reference (baseline) stories.
#[derive(Debug, Clone, Default)]
pub struct FeedbackEngine {
    scorer: ComplexityScorer,
    validator: ConsistencyValidator,
}

impl FeedbackEngine {
    /// Create a feedback engine with the standard scorer and validator.
    pub fn new() -> Self {
        Self {
            scorer: ComplexityScorer::new(),
            validator: ConsistencyValidator::new(),
        }
    }

    /// Produce feedback for the current working set.
    ///
    /// Fewer than two working stories yields a perfect score and no output:
    /// there is no pairwise basis yet. Reference stories beyond the
    /// similarity tolerance are silently skipped.
    pub fn feedback(
        &self,
        current: &[EstimatedStory],
        reference: &[EstimatedStory],
    ) -> FeedbackResult {
        if current.len() < 2 {
            return FeedbackResult {
                warnings: Vec::new(),
                suggestions: Vec::new(),
                consistency_score: 100,
            };
        }

        let set_result = self.validator.validate_set(current);
        let mut warnings = Vec::new();
        let mut suggestions = Vec::new();

        if !set_result.issues.is_empty() {
            warnings.push(INCONSISTENCY_WARNING.to_string());
            suggestions.push(INCONSISTENCY_SUGGESTION.to_string());
        }

        for story in current {
            if let Some(anchor) = self.closest_reference(story, reference) {
                let comparison = self.validator.compare(story, anchor);
                if comparison.score < CROSS_DOMAIN_SCORE_CUTOFF {
                    warnings.push(format!(
                        "'{}' sizes inconsistently against reference story '{}'",
                        story.title, anchor.title
                    ));
                }
            }
        }

        FeedbackResult {
            warnings,
            suggestions,
            consistency_score: set_result.overall_score,
        }
    }

    /// Find the reference story with the closest complexity score, if any
    /// lies within the similarity tolerance.
    fn closest_reference<'a>(
        &self,
        story: &EstimatedStory,
        reference: &'a [EstimatedStory],
    ) -> Option<&'a EstimatedStory> {
        let target = self.scorer.score(&story.complexity_factors);
        reference
            .iter()
            .map(|r| {
                let distance = (self.scorer.score(&r.complexity_factors) - target).abs();
                (r, distance)
            })
            .filter(|(_, distance)| *distance <= REFERENCE_SIMILARITY_TOLERANCE)
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(r, _)| r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ComplexityFactors, Level};

    fn story(title: &str, points: i64, level: Level) -> EstimatedStory {
        EstimatedStory::new(title, points, ComplexityFactors::uniform(level))
    }

    #[test]
    fn test_fewer_than_two_stories_is_silent() {
        let engine = FeedbackEngine::new();
        let result = engine.feedback(&[story("Only", 3, Level::Medium)], &[]);
        assert_eq!(result.consistency_score, 100);
        assert!(result.warnings.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_consistent_set_has_no_warnings() {
        let engine = FeedbackEngine::new();
        let current = vec![story("A", 2, Level::Low), story("B", 5, Level::Medium)];
        let result = engine.feedback(&current, &[]);
        assert!(result.warnings.is_empty());
        assert!(result.consistency_score > 70);
    }

    #[test]
    fn test_inconsistent_set_warns_once() {
        let engine = FeedbackEngine::new();
        let current = vec![story("Big", 21, Level::Low), story("Small", 1, Level::Low)];
        let result = engine.feedback(&current, &[]);
        // One fixed warning for the set, not one per issue.
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.consistency_score < 60);
    }

    #[test]
    fn test_reference_mismatch_adds_named_warning() {
        let engine = FeedbackEngine::new();
        // Both medium complexity, but the working story claims 21 points
        // where the reference anchor sits at 3.
        let current = vec![
            story("Feature A", 21, Level::Medium),
            story("Feature B", 20, Level::Medium),
        ];
        let reference = vec![story("Anchor", 3, Level::Medium)];

        let result = engine.feedback(&current, &reference);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Feature A") && w.contains("Anchor")));
    }

    #[test]
    fn test_reference_beyond_tolerance_is_skipped() {
        let engine = FeedbackEngine::new();
        // Complexity distance is |2 - 8| = 6, well past the tolerance of 2.
        let current = vec![story("A", 2, Level::Low), story("B", 3, Level::Low)];
        let reference = vec![story("Far anchor", 21, Level::High)];

        let result = engine.feedback(&current, &reference);
        assert!(result.warnings.iter().all(|w| !w.contains("Far anchor")));
    }

    #[test]
    fn test_matching_reference_produces_no_warning() {
        let engine = FeedbackEngine::new();
        let current = vec![story("A", 5, Level::Medium), story("B", 5, Level::Medium)];
        let reference = vec![story("Anchor", 5, Level::Medium)];

        let result = engine.feedback(&current, &reference);
        assert!(result.warnings.is_empty());
    }
}
