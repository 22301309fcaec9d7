//! Dataset-level facade combining validation, transformation, and
//! complexity analysis into reports the UI can render directly.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::complexity_scorer::ComplexityScorer;
use super::schema_validator::SchemaValidator;
use super::transformer::LegacyTransformer;
use crate::domain::errors::DomainResult;
use crate::domain::models::{
    Dataset, LegacyDataset, Story, ValidationError, ValidationResult, BREAKDOWN_THRESHOLD,
};

/// Max-to-min perspective ratio above which a story's estimates count as
/// inconsistent.
pub const VARIANCE_RATIO_LIMIT: f64 = 2.5;

/// Summary statistics over a dataset's stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSummary {
    /// Number of stories in the dataset.
    pub total_stories: usize,
    /// Stories flagged as requiring breakdown.
    pub stories_needing_breakdown: usize,
    /// Mean over every estimate value across all perspectives.
    pub average_story_size: f64,
    /// Histogram of estimate value to occurrence count.
    pub size_distribution: BTreeMap<i64, usize>,
}

/// Validation plus summary statistics for a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetValidationReport {
    /// Combined schema and distribution validation.
    pub validation: ValidationResult,
    /// Summary statistics.
    pub summary: DatasetSummary,
}

/// Outcome of loading a legacy dataset through transform-then-validate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyLoadResult {
    /// True when validation produced no errors.
    pub success: bool,
    /// The transformed dataset.
    pub dataset: Dataset,
    /// Validation errors found in the transformed output.
    pub errors: Vec<ValidationError>,
    /// Advisory warnings from the transformer's self-check.
    pub warnings: Vec<String>,
}

/// Story-level complexity findings over a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexityAnalysis {
    /// Titles of stories with two or more high complexity dimensions.
    pub high_complexity_stories: Vec<String>,
    /// Titles of stories that need breakdown but are not flagged for it.
    pub unmarked_breakdown_stories: Vec<String>,
    /// Titles of stories whose perspectives disagree by more than the
    /// variance ratio limit.
    pub inconsistent_estimate_stories: Vec<String>,
    /// Percentage-based prose guidance.
    pub recommendations: Vec<String>,
}

/// Weighted data-quality report for a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Penalized by validation error count.
    pub validation_score: u32,
    /// Share of estimate values at or below 8 points.
    pub distribution_score: u32,
    /// Penalized by the share of high-complexity stories.
    pub complexity_score: u32,
    /// Penalized per story lacking acceptance criteria or perspectives.
    pub completeness_score: u32,
    /// Mean of the four sub-scores.
    pub overall_score: u32,
}

/// Facade over the validator, transformer, and scorer.
#[derive(Debug, Clone, Default)]
pub struct StoryDataManager {
    validator: SchemaValidator,
    transformer: LegacyTransformer,
    scorer: ComplexityScorer,
}

impl StoryDataManager {
    /// Create a manager with the standard services.
    pub fn new() -> Self {
        Self {
            validator: SchemaValidator::new(),
            transformer: LegacyTransformer::new(),
            scorer: ComplexityScorer::new(),
        }
    }

    /// Validate a dataset and compute its summary statistics.
    pub fn validate_dataset(&self, dataset: &Dataset) -> DatasetValidationReport {
        let mut errors = self.validator.validate_dataset(dataset).errors;
        errors.extend(self.validator.validate_distribution(&dataset.stories).errors);

        let all_points: Vec<i64> = dataset
            .stories
            .iter()
            .flat_map(|s| s.estimation_variance.values().map(|e| e.points))
            .collect();

        let mut size_distribution = BTreeMap::new();
        for &points in &all_points {
            *size_distribution.entry(points).or_insert(0) += 1;
        }

        let average_story_size = if all_points.is_empty() {
            0.0
        } else {
            all_points.iter().sum::<i64>() as f64 / all_points.len() as f64
        };

        DatasetValidationReport {
            validation: ValidationResult::from_errors(errors),
            summary: DatasetSummary {
                total_stories: dataset.stories.len(),
                stories_needing_breakdown: dataset
                    .stories
                    .iter()
                    .filter(|s| s.breakdown_required)
                    .count(),
                average_story_size,
                size_distribution,
            },
        }
    }

    /// Transform a legacy dataset and validate the result, merging the
    /// transformer's warnings with any validation errors.
    pub fn load_and_transform_legacy_data(
        &self,
        legacy: &LegacyDataset,
    ) -> DomainResult<LegacyLoadResult> {
        let outcome = self.transformer.safe_transform_dataset(legacy)?;

        let mut errors = self.validator.validate_dataset(&outcome.dataset).errors;
        errors.extend(
            self.validator
                .validate_distribution(&outcome.dataset.stories)
                .errors,
        );

        debug!(
            stories = outcome.dataset.stories.len(),
            errors = errors.len(),
            warnings = outcome.warnings.len(),
            "legacy dataset loaded"
        );

        Ok(LegacyLoadResult {
            success: errors.is_empty(),
            dataset: outcome.dataset,
            errors,
            warnings: outcome.warnings,
        })
    }

    /// Analyze the complexity profile of a story collection.
    pub fn analyze_story_complexity(&self, stories: &[Story]) -> ComplexityAnalysis {
        let mut high_complexity_stories = Vec::new();
        let mut unmarked_breakdown_stories = Vec::new();
        let mut inconsistent_estimate_stories = Vec::new();

        for story in stories {
            if story.complexity_factors.high_dimension_count() >= 2 {
                high_complexity_stories.push(story.title.clone());
            }
            if story.max_estimate().is_some_and(|p| p > BREAKDOWN_THRESHOLD)
                && !story.breakdown_required
            {
                unmarked_breakdown_stories.push(story.title.clone());
            }
            if let (Some(max), Some(min)) = (story.max_estimate(), story.min_estimate()) {
                if min > 0 && max as f64 / min as f64 > VARIANCE_RATIO_LIMIT {
                    inconsistent_estimate_stories.push(story.title.clone());
                }
            }
        }

        let mut recommendations = Vec::new();
        if !stories.is_empty() {
            let high_pct = high_complexity_stories.len() as f64 / stories.len() as f64 * 100.0;
            if high_pct > 30.0 {
                recommendations.push(format!(
                    "{high_pct:.0}% of stories are high complexity; consider spikes or earlier breakdown"
                ));
            }
            if !unmarked_breakdown_stories.is_empty() {
                recommendations.push(format!(
                    "{} large stories are not flagged for breakdown; flag and split them before planning",
                    unmarked_breakdown_stories.len()
                ));
            }
            let inconsistent_pct =
                inconsistent_estimate_stories.len() as f64 / stories.len() as f64 * 100.0;
            if inconsistent_pct > 20.0 {
                recommendations.push(format!(
                    "{inconsistent_pct:.0}% of stories have widely divergent perspective estimates; align on assumptions before committing"
                ));
            }
        }

        ComplexityAnalysis {
            high_complexity_stories,
            unmarked_breakdown_stories,
            inconsistent_estimate_stories,
            recommendations,
        }
    }

    /// Generate a four-part data-quality report for a dataset.
    pub fn generate_data_quality_report(&self, dataset: &Dataset) -> QualityReport {
        let stories = &dataset.stories;

        let validation_errors = self.validator.validate_dataset(dataset).errors.len();
        let validation_score = 100_i64.saturating_sub(10 * validation_errors as i64).max(0) as u32;

        let all_points: Vec<i64> = stories
            .iter()
            .flat_map(|s| s.estimation_variance.values().map(|e| e.points))
            .collect();
        let distribution_score = if all_points.is_empty() {
            100
        } else {
            let small = all_points.iter().filter(|&&p| p <= BREAKDOWN_THRESHOLD).count();
            (small as f64 / all_points.len() as f64 * 100.0).round() as u32
        };

        let complexity_score = if stories.is_empty() {
            100
        } else {
            let high = stories
                .iter()
                .filter(|s| s.complexity_factors.high_dimension_count() >= 2)
                .count();
            let high_pct = high as f64 / stories.len() as f64 * 100.0;
            (100.0 - high_pct / 2.0).round() as u32
        };

        let missing_criteria = stories.iter().filter(|s| s.acceptance_criteria.is_empty()).count();
        let thin_variance = stories
            .iter()
            .filter(|s| s.estimation_variance.len() < 2)
            .count();
        let completeness_score = (100_i64 - 5 * missing_criteria as i64 - 3 * thin_variance as i64)
            .max(0) as u32;

        let overall_score = (f64::from(
            validation_score + distribution_score + complexity_score + completeness_score,
        ) / 4.0)
            .round() as u32;

        QualityReport {
            generated_at: Utc::now(),
            validation_score,
            distribution_score,
            complexity_score,
            completeness_score,
            overall_score,
        }
    }

    /// Complexity score for one story's profile, exposed for UI sorting.
    pub fn score_story(&self, story: &Story) -> f64 {
        self.scorer.score(&story.complexity_factors)
    }
}
