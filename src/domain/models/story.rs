//! Enhanced story domain model.
//!
//! Stories are the central estimation entity. An enhanced story carries
//! multi-perspective estimates (`estimation_variance`), a qualitative
//! complexity profile, the estimating team's context, and breakdown
//! suggestions for stories too large to deliver in one slice.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The fixed estimation scale. Every point value in the system must be a
/// member of this set.
pub const FIBONACCI_POINTS: [i64; 8] = [1, 2, 3, 5, 8, 13, 21, 34];

/// Estimates above this value require a breakdown before the story is
/// considered sprint-ready.
pub const BREAKDOWN_THRESHOLD: i64 = 8;

/// Returns true if `points` is a member of the estimation scale.
pub fn is_valid_points(points: i64) -> bool {
    FIBONACCI_POINTS.contains(&points)
}

/// Smallest scale value greater than or equal to `raw`, if any.
pub fn fibonacci_at_least(raw: f64) -> Option<i64> {
    FIBONACCI_POINTS
        .iter()
        .copied()
        .find(|&p| p as f64 >= raw)
}

/// Largest scale value less than or equal to `raw`, if any.
pub fn fibonacci_at_most(raw: f64) -> Option<i64> {
    FIBONACCI_POINTS
        .iter()
        .rev()
        .copied()
        .find(|&p| p as f64 <= raw)
}

/// Qualitative level used for complexity dimensions and domain knowledge.
///
/// Out-of-set wire values deserialize to [`Level::Unknown`] so that the
/// schema validator (not the loader) reports them with a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Low complexity or knowledge.
    Low,
    /// Medium complexity or knowledge.
    Medium,
    /// High complexity or knowledge.
    High,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

impl Level {
    /// Numeric scoring weight: low maps to 2, medium to 5, high to 8.
    /// Unknown values score as the neutral medium.
    pub fn score_value(self) -> f64 {
        match self {
            Self::Low => 2.0,
            Self::Medium | Self::Unknown => 5.0,
            Self::High => 8.0,
        }
    }

    /// Wire-format name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

/// Confidence attached to a single estimation perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// Low confidence in the estimate.
    Low,
    /// Medium confidence in the estimate.
    Medium,
    /// High confidence in the estimate.
    High,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// Experience level of the estimating team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Mostly junior engineers.
    Junior,
    /// Mixed or mid-level team.
    Intermediate,
    /// Mostly senior engineers.
    Senior,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// How familiar the team is with the technical stack involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalStack {
    /// The team works with this stack daily.
    Familiar,
    /// The stack is new to the team.
    New,
    /// Some parts familiar, some new.
    Mixed,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// Recognized story-splitting techniques.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BreakdownTechnique {
    /// Split along workflow steps.
    ByWorkflow,
    /// Split along data variations.
    ByData,
    /// Split along acceptance criteria.
    ByAcceptanceCriteria,
    /// Split the complex part from the simple part.
    ByComplexity,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

impl BreakdownTechnique {
    /// Wire-format name of the technique.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ByWorkflow => "by-workflow",
            Self::ByData => "by-data",
            Self::ByAcceptanceCriteria => "by-acceptance-criteria",
            Self::ByComplexity => "by-complexity",
            Self::Unknown => "unknown",
        }
    }
}

/// One team's (or perspective's) estimate for a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateEntry {
    /// Story points on the Fibonacci scale.
    pub points: i64,
    /// Why this perspective arrived at this estimate.
    pub reasoning: String,
    /// Confidence in the estimate.
    pub confidence_level: ConfidenceLevel,
}

/// Qualitative complexity profile over four fixed dimensions.
///
/// Absent dimensions are excluded from scoring (weights are renormalized
/// over the dimensions that are present).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityFactors {
    /// Technical difficulty of the implementation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical: Option<Level>,
    /// Business-rule complexity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business: Option<Level>,
    /// Number and difficulty of external integrations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integration: Option<Level>,
    /// How much is unknown about the work.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uncertainty: Option<Level>,
}

impl ComplexityFactors {
    /// Builds a profile with every dimension set to the same level.
    pub fn uniform(level: Level) -> Self {
        Self {
            technical: Some(level),
            business: Some(level),
            integration: Some(level),
            uncertainty: Some(level),
        }
    }

    /// Number of dimensions rated high.
    pub fn high_dimension_count(&self) -> usize {
        [self.technical, self.business, self.integration, self.uncertainty]
            .iter()
            .filter(|d| **d == Some(Level::High))
            .count()
    }
}

/// Context of the team producing the estimates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamContext {
    /// Overall experience level.
    pub experience_level: ExperienceLevel,
    /// Familiarity with the business domain.
    pub domain_knowledge: Level,
    /// Familiarity with the technical stack.
    pub technical_stack: TechnicalStack,
    /// Number of people on the team. Valid range is 1 through 12.
    pub team_size: i64,
    /// Working agreements the team follows.
    pub working_agreements: Vec<String>,
}

/// A suggested way to split a story that is too large.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSuggestion {
    /// The splitting technique applied.
    pub technique: BreakdownTechnique,
    /// What the split looks like.
    pub description: String,
    /// The smaller stories the split produces.
    pub resulting_stories: Vec<Story>,
    /// Why this split helps.
    pub benefits: Vec<String>,
}

/// The enhanced story schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    /// Unique identifier, stable across transformations.
    pub id: String,
    /// Short story title.
    pub title: String,
    /// Full story description.
    pub description: String,
    /// Conditions that must hold for the story to be done.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    /// Estimates keyed by team or perspective name.
    #[serde(default)]
    pub estimation_variance: BTreeMap<String, EstimateEntry>,
    /// Qualitative complexity profile.
    #[serde(default)]
    pub complexity_factors: ComplexityFactors,
    /// Context of the estimating team, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_context: Option<TeamContext>,
    /// Whether the story must be broken down before sprint planning.
    #[serde(default)]
    pub breakdown_required: bool,
    /// Suggested splits. Must be non-empty when `breakdown_required` is set.
    #[serde(default)]
    pub breakdown_suggestions: Vec<BreakdownSuggestion>,
    /// Free-text domain tag (e.g. "technical", "business") used by
    /// cross-domain consistency checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Story {
    /// Largest estimate across all perspectives, if any exist.
    pub fn max_estimate(&self) -> Option<i64> {
        self.estimation_variance.values().map(|e| e.points).max()
    }

    /// Smallest estimate across all perspectives, if any exist.
    pub fn min_estimate(&self) -> Option<i64> {
        self.estimation_variance.values().map(|e| e.points).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_membership() {
        for p in FIBONACCI_POINTS {
            assert!(is_valid_points(p));
        }
        assert!(!is_valid_points(0));
        assert!(!is_valid_points(4));
        assert!(!is_valid_points(-3));
        assert!(!is_valid_points(55));
    }

    #[test]
    fn test_fibonacci_rounding() {
        assert_eq!(fibonacci_at_least(6.5), Some(8));
        assert_eq!(fibonacci_at_least(8.0), Some(8));
        assert_eq!(fibonacci_at_least(35.0), None);
        assert_eq!(fibonacci_at_most(4.5), Some(3));
        assert_eq!(fibonacci_at_most(1.0), Some(1));
        assert_eq!(fibonacci_at_most(0.8), None);
    }

    #[test]
    fn test_level_score_values() {
        assert_eq!(Level::Low.score_value(), 2.0);
        assert_eq!(Level::Medium.score_value(), 5.0);
        assert_eq!(Level::High.score_value(), 8.0);
        assert_eq!(Level::Unknown.score_value(), 5.0);
    }

    #[test]
    fn test_level_unknown_from_out_of_set_string() {
        let level: Level = serde_json::from_str("\"extreme\"").unwrap();
        assert_eq!(level, Level::Unknown);
    }

    #[test]
    fn test_technique_kebab_case_serialization() {
        assert_eq!(
            serde_json::to_string(&BreakdownTechnique::ByAcceptanceCriteria).unwrap(),
            "\"by-acceptance-criteria\""
        );
        let t: BreakdownTechnique = serde_json::from_str("\"by-workflow\"").unwrap();
        assert_eq!(t, BreakdownTechnique::ByWorkflow);
        let t: BreakdownTechnique = serde_json::from_str("\"by-magic\"").unwrap();
        assert_eq!(t, BreakdownTechnique::Unknown);
    }

    #[test]
    fn test_high_dimension_count() {
        let factors = ComplexityFactors {
            technical: Some(Level::High),
            business: Some(Level::Low),
            integration: Some(Level::High),
            uncertainty: None,
        };
        assert_eq!(factors.high_dimension_count(), 2);
        assert_eq!(ComplexityFactors::default().high_dimension_count(), 0);
    }

    #[test]
    fn test_story_estimate_extremes() {
        let mut variance = BTreeMap::new();
        variance.insert(
            "a".to_string(),
            EstimateEntry {
                points: 3,
                reasoning: String::new(),
                confidence_level: ConfidenceLevel::Medium,
            },
        );
        variance.insert(
            "b".to_string(),
            EstimateEntry {
                points: 8,
                reasoning: String::new(),
                confidence_level: ConfidenceLevel::High,
            },
        );

        let story = Story {
            id: "s-1".to_string(),
            title: "Test".to_string(),
            description: "Test".to_string(),
            acceptance_criteria: vec![],
            estimation_variance: variance,
            complexity_factors: ComplexityFactors::default(),
            team_context: None,
            breakdown_required: false,
            breakdown_suggestions: vec![],
            domain: None,
        };
        assert_eq!(story.max_estimate(), Some(8));
        assert_eq!(story.min_estimate(), Some(3));
    }

    #[test]
    fn test_story_camel_case_round_trip() {
        let json = r#"{
            "id": "s-1",
            "title": "Login",
            "description": "As a user...",
            "acceptanceCriteria": ["User can log in"],
            "estimationVariance": {
                "baseTeam": {
                    "points": 5,
                    "reasoning": "Standard form work",
                    "confidenceLevel": "high"
                }
            },
            "complexityFactors": {"technical": "medium", "uncertainty": "low"},
            "breakdownRequired": false
        }"#;

        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.estimation_variance["baseTeam"].points, 5);
        assert_eq!(story.complexity_factors.technical, Some(Level::Medium));
        assert_eq!(story.complexity_factors.business, None);

        let out = serde_json::to_string(&story).unwrap();
        assert!(out.contains("acceptanceCriteria"));
        assert!(out.contains("estimationVariance"));
        assert!(!out.contains("teamContext"));
    }
}
