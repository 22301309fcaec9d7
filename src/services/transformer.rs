//! Legacy-to-enhanced story transformation.
//!
//! Older exercise datasets carry a single "correct" point value and
//! free-text factor descriptions. The transformer lifts those records into
//! the enhanced schema: it classifies the free text with a tolerant
//! substring matcher, synthesizes a three-perspective estimation variance
//! around the base value, picks a team-context preset, and generates
//! breakdown suggestions for stories above the threshold.
//!
//! Transformation of a single story is total: any record shape produces a
//! well-formed enhanced story. Only a structurally malformed dataset (no
//! story collection at all) raises a [`DomainError`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    story::{fibonacci_at_least, fibonacci_at_most},
    BreakdownSuggestion, BreakdownTechnique, ComplexityFactors, ConfidenceLevel, Dataset,
    DatasetMetadata, EstimateEntry, ExperienceLevel, LegacyDataset, LegacyStory, Level, Story,
    TeamContext, TechnicalStack, BREAKDOWN_THRESHOLD,
};

/// Base point value used when a legacy record carries none.
pub const DEFAULT_BASE_POINTS: i64 = 3;

/// Junior-team multiplier for high-complexity work.
const JUNIOR_HIGH_FACTOR: f64 = 1.6;
/// Junior-team multiplier otherwise.
const JUNIOR_DEFAULT_FACTOR: f64 = 1.3;
/// Senior-team multiplier for low-complexity work.
const SENIOR_LOW_FACTOR: f64 = 0.8;
/// Senior-team multiplier otherwise.
const SENIOR_DEFAULT_FACTOR: f64 = 0.9;

/// A transformed dataset plus advisory warnings from the post-transform
/// self-check.
#[derive(Debug, Clone)]
pub struct TransformOutcome {
    /// The enhanced dataset.
    pub dataset: Dataset,
    /// Advisory warnings. These are not validation errors; the dataset is
    /// still usable.
    pub warnings: Vec<String>,
}

/// Classify a free-text factor description into a level.
///
/// This is deliberately a fuzzy, case-insensitive substring match, not an
/// enum parse: legacy values are prose like "High - several unknowns", and
/// the tolerance is load-bearing for backward compatibility.
pub fn classify_level(text: Option<&str>) -> Level {
    let Some(text) = text else {
        return Level::Medium;
    };
    let lower = text.to_lowercase();
    if lower.contains("low") || lower.contains("simple") {
        Level::Low
    } else if lower.contains("high") || lower.contains("complex") {
        Level::High
    } else {
        Level::Medium
    }
}

/// Team-context preset for low-complexity legacy work.
fn low_complexity_team() -> TeamContext {
    TeamContext {
        experience_level: ExperienceLevel::Intermediate,
        domain_knowledge: Level::High,
        technical_stack: TechnicalStack::Familiar,
        team_size: 5,
        working_agreements: vec![
            "Definition of done agreed per story".to_string(),
            "Estimates revisited at sprint review".to_string(),
        ],
    }
}

/// Team-context preset for high-complexity legacy work.
fn high_complexity_team() -> TeamContext {
    TeamContext {
        experience_level: ExperienceLevel::Senior,
        domain_knowledge: Level::Medium,
        technical_stack: TechnicalStack::Mixed,
        team_size: 6,
        working_agreements: vec![
            "Definition of done agreed per story".to_string(),
            "Pair programming on unfamiliar components".to_string(),
            "Spike before estimating unknowns".to_string(),
        ],
    }
}

/// Middle-ground team-context preset.
fn default_team() -> TeamContext {
    TeamContext {
        experience_level: ExperienceLevel::Intermediate,
        domain_knowledge: Level::Medium,
        technical_stack: TechnicalStack::Familiar,
        team_size: 5,
        working_agreements: vec![
            "Definition of done agreed per story".to_string(),
            "Estimates revisited at sprint review".to_string(),
        ],
    }
}

fn team_preset_for(complexity: Level) -> TeamContext {
    match complexity {
        Level::Low => low_complexity_team(),
        Level::High => high_complexity_team(),
        Level::Medium | Level::Unknown => default_team(),
    }
}

/// Service converting legacy records into the enhanced schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyTransformer;

impl LegacyTransformer {
    /// Create a transformer.
    pub fn new() -> Self {
        Self
    }

    /// Transform one legacy story. Total over any record shape: missing
    /// fields get defaults rather than failing.
    pub fn transform_story(&self, legacy: &LegacyStory) -> Story {
        let title = legacy
            .title
            .clone()
            .or_else(|| legacy.name.clone())
            .unwrap_or_else(|| "Untitled Story".to_string());
        let id = legacy.id.clone().unwrap_or_else(|| "legacy-story".to_string());
        let description = legacy.description.clone().unwrap_or_else(|| title.clone());
        let acceptance_criteria = legacy
            .acceptance_criteria
            .clone()
            .filter(|criteria| !criteria.is_empty())
            .unwrap_or_else(|| vec!["Story behavior can be demonstrated to the team".to_string()]);

        let factors = legacy.factors.clone().unwrap_or_default();
        let complexity = classify_level(factors.complexity.as_deref());
        let effort = classify_level(factors.effort.as_deref());
        let uncertainty = classify_level(factors.uncertainty.as_deref());

        let base = legacy.correct_points.unwrap_or(DEFAULT_BASE_POINTS);
        let breakdown_required = base > BREAKDOWN_THRESHOLD;
        let breakdown_suggestions = if breakdown_required {
            self.build_breakdown_suggestions(&id, base, &acceptance_criteria)
        } else {
            Vec::new()
        };

        Story {
            id,
            title,
            description,
            acceptance_criteria,
            estimation_variance: synthesize_variance(base, complexity, uncertainty, None),
            complexity_factors: ComplexityFactors {
                technical: Some(complexity),
                business: Some(effort),
                integration: Some(complexity),
                uncertainty: Some(uncertainty),
            },
            team_context: Some(team_preset_for(complexity)),
            breakdown_required,
            breakdown_suggestions,
            domain: legacy.domain.clone(),
        }
    }

    /// Transform a whole legacy dataset.
    ///
    /// This is the hard-failure channel: a dataset with no story collection
    /// is structurally malformed and cannot be repaired.
    pub fn transform_dataset(&self, legacy: &LegacyDataset) -> DomainResult<Dataset> {
        let legacy_stories = legacy.stories.as_ref().ok_or_else(|| {
            DomainError::MalformedLegacyData("dataset has no story collection".to_string())
        })?;

        debug!(stories = legacy_stories.len(), "transforming legacy dataset");

        let metadata = legacy.metadata.clone().unwrap_or_default();
        let stories = legacy_stories.iter().map(|s| self.transform_story(s)).collect();

        Ok(Dataset {
            metadata: Some(DatasetMetadata {
                exercise_id: metadata.exercise_id.unwrap_or(1),
                exercise_type: metadata
                    .exercise_type
                    .unwrap_or_else(|| "estimation".to_string()),
                version: "2.0".to_string(),
                description: metadata
                    .description
                    .unwrap_or_else(|| "Transformed from legacy dataset".to_string()),
            }),
            stories,
            non_estimable_work: None,
        })
    }

    /// Transform a legacy dataset and run post-hoc advisory checks.
    ///
    /// The checks are a consistency self-check on the transformer's own
    /// output, reported as warning strings rather than validation errors.
    /// Any transformation failure is wrapped into one descriptive error;
    /// a partially-built dataset is never returned.
    pub fn safe_transform_dataset(&self, legacy: &LegacyDataset) -> DomainResult<TransformOutcome> {
        let dataset = self.transform_dataset(legacy).map_err(|err| {
            DomainError::TransformFailed(format!("legacy dataset could not be transformed: {err}"))
        })?;

        let mut warnings = Vec::new();
        for (index, story) in dataset.stories.iter().enumerate() {
            if story.acceptance_criteria.is_empty() {
                warnings.push(format!(
                    "stories[{index}] '{}' has no acceptance criteria",
                    story.title
                ));
            }
            if story.estimation_variance.is_empty() {
                warnings.push(format!(
                    "stories[{index}] '{}' has no estimation perspectives",
                    story.title
                ));
            }
            if story.max_estimate().is_some_and(|p| p > BREAKDOWN_THRESHOLD)
                && !story.breakdown_required
            {
                warnings.push(format!(
                    "stories[{index}] '{}' carries a large estimate but is not flagged for breakdown",
                    story.title
                ));
            }
        }

        Ok(TransformOutcome { dataset, warnings })
    }

    /// Build the breakdown suggestions for a large legacy story.
    ///
    /// A `by-workflow` split is generated from the first three acceptance
    /// criteria when more than two exist; a templated
    /// `by-acceptance-criteria` split into a core slice and a validation
    /// slice is always present.
    fn build_breakdown_suggestions(
        &self,
        id: &str,
        base: i64,
        acceptance_criteria: &[String],
    ) -> Vec<BreakdownSuggestion> {
        let mut suggestions = Vec::new();

        if acceptance_criteria.len() > 2 {
            let step_points = (base as f64 / 3.0).ceil() as i64;
            let resulting_stories = acceptance_criteria
                .iter()
                .take(3)
                .enumerate()
                .map(|(step, criterion)| {
                    sub_story(
                        format!("{id}-step-{}", step + 1),
                        criterion.clone(),
                        vec![criterion.clone()],
                        step_points,
                    )
                })
                .collect();

            suggestions.push(BreakdownSuggestion {
                technique: BreakdownTechnique::ByWorkflow,
                description: "Split along the workflow steps implied by the acceptance criteria"
                    .to_string(),
                resulting_stories,
                benefits: vec![
                    "Each step is independently testable".to_string(),
                    "The riskiest step gets feedback first".to_string(),
                ],
            });
        }

        suggestions.push(BreakdownSuggestion {
            technique: BreakdownTechnique::ByAcceptanceCriteria,
            description: "Separate the core behavior from validation and error handling"
                .to_string(),
            resulting_stories: vec![
                sub_story(
                    format!("{id}-core"),
                    "Core Functionality".to_string(),
                    vec!["Core behavior works for the main flow".to_string()],
                    5,
                ),
                sub_story(
                    format!("{id}-validation"),
                    "Validation & Error Handling".to_string(),
                    vec!["Invalid input is rejected with clear messages".to_string()],
                    3,
                ),
            ],
            benefits: vec![
                "Core value ships first".to_string(),
                "Error handling can follow in the next iteration".to_string(),
            ],
        });

        suggestions
    }
}

/// Build a breakdown sub-story sized around `base` points.
///
/// Sub-stories use the variance synthesis with forced medium complexity and
/// low uncertainty, capped so that every perspective stays at or below 8.
fn sub_story(id: String, title: String, acceptance_criteria: Vec<String>, base: i64) -> Story {
    Story {
        id,
        description: title.clone(),
        title,
        acceptance_criteria,
        estimation_variance: synthesize_variance(
            base,
            Level::Medium,
            Level::Low,
            Some(BREAKDOWN_THRESHOLD),
        ),
        complexity_factors: ComplexityFactors {
            technical: Some(Level::Medium),
            business: Some(Level::Medium),
            integration: Some(Level::Medium),
            uncertainty: Some(Level::Low),
        },
        team_context: Some(default_team()),
        breakdown_required: false,
        breakdown_suggestions: Vec::new(),
        domain: None,
    }
}

/// Synthesize the three standard estimation perspectives around a base value.
///
/// The intended ordering `seniorTeam <= baseTeam <= juniorTeam` falls out of
/// the arithmetic: junior estimates round up to the next scale value, senior
/// estimates round down. `cap`, when present, clamps every perspective (used
/// for breakdown sub-stories, which must stay at or below 8).
fn synthesize_variance(
    base: i64,
    complexity: Level,
    uncertainty: Level,
    cap: Option<i64>,
) -> BTreeMap<String, EstimateEntry> {
    let junior_factor = if complexity == Level::High {
        JUNIOR_HIGH_FACTOR
    } else {
        JUNIOR_DEFAULT_FACTOR
    };
    let junior_raw = (base as f64 * junior_factor).min(34.0);
    let junior_points = fibonacci_at_least(junior_raw).unwrap_or(base);

    let senior_factor = if complexity == Level::Low {
        SENIOR_LOW_FACTOR
    } else {
        SENIOR_DEFAULT_FACTOR
    };
    let senior_raw = (base as f64 * senior_factor).max(1.0);
    let senior_points = fibonacci_at_most(senior_raw).unwrap_or(base);

    let clamp = |points: i64| cap.map_or(points, |cap| points.min(cap));

    let mut variance = BTreeMap::new();
    variance.insert(
        "juniorTeam".to_string(),
        EstimateEntry {
            points: clamp(junior_points),
            reasoning: "Less familiarity with this kind of work; buffer added for learning"
                .to_string(),
            confidence_level: if uncertainty == Level::High {
                ConfidenceLevel::Low
            } else {
                ConfidenceLevel::Medium
            },
        },
    );
    variance.insert(
        "seniorTeam".to_string(),
        EstimateEntry {
            points: clamp(senior_points),
            reasoning: "Prior experience with similar work reduces the effort".to_string(),
            confidence_level: if uncertainty == Level::High {
                ConfidenceLevel::Medium
            } else {
                ConfidenceLevel::High
            },
        },
    );
    variance.insert(
        "baseTeam".to_string(),
        EstimateEntry {
            points: clamp(base),
            reasoning: "Reference estimate from the exercise dataset".to_string(),
            confidence_level: if uncertainty == Level::Low {
                ConfidenceLevel::High
            } else {
                ConfidenceLevel::Medium
            },
        },
    );
    variance
}
