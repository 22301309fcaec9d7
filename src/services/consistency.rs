//! Relative-sizing consistency checks.
//!
//! Estimates are ratios, not absolutes: a 5-point story should be roughly
//! 2.5 times the work of a 2-point story. The pairwise comparator measures
//! how well the ratio of two stories' point values matches the ratio of
//! their complexity scores, working in log-space so that "twice too high"
//! and "half what it should be" deviate by the same amount.
//!
//! The thresholds in this module (80 for good sizing, 1.5x/0.67x for the
//! over/under feedback branches, 60 for set issues, 70 and 0.3 for the
//! cross-domain check) are behavioral contracts inherited from the exercise
//! content. Do not re-derive them.

use serde::{Deserialize, Serialize};

use super::complexity_scorer::ComplexityScorer;
use crate::domain::models::EstimatedStory;

/// Pairwise score at or above which sizing is reported as good.
pub const GOOD_SIZING_SCORE: u32 = 80;
/// Points ratio more than this multiple of the complexity ratio reads as
/// over-estimation.
pub const OVER_ESTIMATION_FACTOR: f64 = 1.5;
/// Points ratio less than this multiple of the complexity ratio reads as
/// under-estimation.
pub const UNDER_ESTIMATION_FACTOR: f64 = 0.67;
/// Pairwise score below which a set comparison becomes an issue.
pub const SET_ISSUE_CUTOFF: u32 = 60;
/// Pairwise score below which a cross-domain pair becomes an issue.
pub const CROSS_DOMAIN_SCORE_CUTOFF: u32 = 70;
/// Complexity ratios within this distance of 1.0 count as "same complexity"
/// for the cross-domain check.
pub const CROSS_DOMAIN_COMPLEXITY_TOLERANCE: f64 = 0.3;

/// Result of comparing two estimated stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Consistency score from 0 (inconsistent) to 100 (perfectly sized).
    pub score: u32,
    /// Ratio of story A's points to story B's points.
    pub points_ratio: f64,
    /// Ratio of story A's complexity score to story B's.
    pub complexity_ratio: f64,
    /// Human-readable assessment of the pair.
    pub feedback: String,
}

/// A single comparison within a set validation, with the stories named.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairComparison {
    /// Title of the first story in the pair.
    pub story_a: String,
    /// Title of the second story in the pair.
    pub story_b: String,
    /// The pairwise result.
    pub comparison: ComparisonResult,
}

/// Kinds of consistency issues a set validation can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Two stories' point ratio disagrees with their complexity ratio.
    InconsistentSizing,
}

/// A flagged pair from a set validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyIssue {
    /// What kind of issue this is.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Title of the first story in the flagged pair.
    pub story_a: String,
    /// Title of the second story in the flagged pair.
    pub story_b: String,
    /// The pairwise score that triggered the flag.
    pub score: u32,
    /// The pairwise feedback text.
    pub feedback: String,
}

/// Result of validating a whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetConsistencyResult {
    /// Rounded mean of all pairwise scores; 100 for fewer than two stories.
    pub overall_score: u32,
    /// Every unordered pair's comparison.
    pub comparisons: Vec<PairComparison>,
    /// Pairs scoring below the issue cutoff.
    pub issues: Vec<ConsistencyIssue>,
    /// Fixed guidance, present only when issues were found.
    pub recommendations: Vec<String>,
}

/// A flagged pair spanning the domain boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossDomainIssue {
    /// Title of the story from the first (technical) group.
    pub technical_story: String,
    /// Title of the story from the second (business) group.
    pub business_story: String,
    /// Fixed description of the inconsistency.
    pub issue: String,
    /// Fixed suggestion for resolving it.
    pub suggestion: String,
}

/// Result of validating consistency across two domain partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossDomainResult {
    /// Flagged same-complexity, different-estimate pairs.
    pub cross_domain_issues: Vec<CrossDomainIssue>,
    /// Fixed guidance, present only when issues were found.
    pub recommendations: Vec<String>,
    /// True when at least one pair was flagged.
    pub has_cross_domain_inconsistencies: bool,
}

const SET_RECOMMENDATIONS: [&str; 2] = [
    "Review the complexity factors of the flagged stories together before committing to estimates",
    "Use well-understood reference stories as sizing anchors for each point value",
];

const CROSS_DOMAIN_ISSUE_TEXT: &str =
    "Stories of similar complexity received inconsistent estimates across domains";
const CROSS_DOMAIN_SUGGESTION_TEXT: &str =
    "Estimate both stories together and agree on what drives the difference";

const CROSS_DOMAIN_RECOMMENDATIONS: [&str; 3] = [
    "Hold a joint estimation session with members from both domains",
    "Build a shared reference set containing stories from each domain",
    "Compare complexity factors side by side before assigning points",
];

/// Service for pairwise, set-wide, and cross-domain consistency validation.
#[derive(Debug, Clone, Default)]
pub struct ConsistencyValidator {
    scorer: ComplexityScorer,
}

impl ConsistencyValidator {
    /// Create a validator with the standard complexity scorer.
    pub fn new() -> Self {
        Self {
            scorer: ComplexityScorer::new(),
        }
    }

    /// Compare two stories' relative sizing.
    ///
    /// Fails soft: a missing or zero point value yields a zero score with
    /// explanatory feedback rather than an error, since a zero-point story
    /// has no ratio to compare.
    pub fn compare(&self, story_a: &EstimatedStory, story_b: &EstimatedStory) -> ComparisonResult {
        if story_a.points <= 0 || story_b.points <= 0 {
            return ComparisonResult {
                score: 0,
                points_ratio: 0.0,
                complexity_ratio: 0.0,
                feedback: "Invalid story data - both stories need point estimates".to_string(),
            };
        }

        let points_ratio = story_a.points as f64 / story_b.points as f64;
        let complexity_ratio =
            self.scorer.score(&story_a.complexity_factors) / self.scorer.score(&story_b.complexity_factors);

        // Ratios are multiplicative, so deviation lives in log-space.
        let deviation = (points_ratio.ln() - complexity_ratio.ln()).abs();
        let score = (100.0 - deviation * 50.0).max(0.0).round() as u32;

        let feedback = if score >= GOOD_SIZING_SCORE {
            "Good relative sizing - the point ratio matches the complexity difference".to_string()
        } else if points_ratio > complexity_ratio * OVER_ESTIMATION_FACTOR {
            format!(
                "'{}' may be over-estimated relative to '{}' - the points gap exceeds the complexity gap",
                story_a.title, story_b.title
            )
        } else if points_ratio < complexity_ratio * UNDER_ESTIMATION_FACTOR {
            format!(
                "'{}' may be under-estimated relative to '{}' - the complexity gap exceeds the points gap",
                story_a.title, story_b.title
            )
        } else {
            "Review the relative complexity of these stories against their point estimates"
                .to_string()
        };

        ComparisonResult {
            score,
            points_ratio,
            complexity_ratio,
            feedback,
        }
    }

    /// Validate relative sizing across every unordered pair in a collection.
    ///
    /// O(n^2) over the collection size, which is acceptable for
    /// exercise-sized inputs.
    pub fn validate_set(&self, stories: &[EstimatedStory]) -> SetConsistencyResult {
        if stories.len() < 2 {
            return SetConsistencyResult {
                overall_score: 100,
                comparisons: Vec::new(),
                issues: Vec::new(),
                recommendations: Vec::new(),
            };
        }

        let mut comparisons = Vec::new();
        let mut issues = Vec::new();
        let mut score_sum: u64 = 0;

        for (i, story_a) in stories.iter().enumerate() {
            for story_b in stories.iter().skip(i + 1) {
                let comparison = self.compare(story_a, story_b);
                score_sum += u64::from(comparison.score);

                if comparison.score < SET_ISSUE_CUTOFF {
                    issues.push(ConsistencyIssue {
                        kind: IssueKind::InconsistentSizing,
                        story_a: story_a.title.clone(),
                        story_b: story_b.title.clone(),
                        score: comparison.score,
                        feedback: comparison.feedback.clone(),
                    });
                }

                comparisons.push(PairComparison {
                    story_a: story_a.title.clone(),
                    story_b: story_b.title.clone(),
                    comparison,
                });
            }
        }

        let overall_score = (score_sum as f64 / comparisons.len() as f64).round() as u32;

        let recommendations = if issues.is_empty() {
            Vec::new()
        } else {
            SET_RECOMMENDATIONS.iter().map(ToString::to_string).collect()
        };

        SetConsistencyResult {
            overall_score,
            comparisons,
            issues,
            recommendations,
        }
    }

    /// Validate consistency between two partitions of a collection.
    ///
    /// Flags pairs whose complexity is nearly equal but whose estimates
    /// diverged anyway: the classic symptom of two sub-teams sizing against
    /// different anchors.
    pub fn validate_cross_domain(
        &self,
        group_a: &[EstimatedStory],
        group_b: &[EstimatedStory],
    ) -> CrossDomainResult {
        let mut cross_domain_issues = Vec::new();

        for a in group_a {
            for b in group_b {
                let comparison = self.compare(a, b);
                let similar_complexity =
                    (comparison.complexity_ratio - 1.0).abs() < CROSS_DOMAIN_COMPLEXITY_TOLERANCE;
                if similar_complexity && comparison.score < CROSS_DOMAIN_SCORE_CUTOFF {
                    cross_domain_issues.push(CrossDomainIssue {
                        technical_story: a.title.clone(),
                        business_story: b.title.clone(),
                        issue: CROSS_DOMAIN_ISSUE_TEXT.to_string(),
                        suggestion: CROSS_DOMAIN_SUGGESTION_TEXT.to_string(),
                    });
                }
            }
        }

        let has_cross_domain_inconsistencies = !cross_domain_issues.is_empty();
        let recommendations = if has_cross_domain_inconsistencies {
            CROSS_DOMAIN_RECOMMENDATIONS.iter().map(ToString::to_string).collect()
        } else {
            Vec::new()
        };

        CrossDomainResult {
            cross_domain_issues,
            recommendations,
            has_cross_domain_inconsistencies,
        }
    }
}
