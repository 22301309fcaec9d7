//! Rule engine for the enhanced story schema.
//!
//! Every entry point accumulates violations into a [`ValidationResult`] and
//! never stops at the first failure: callers (and learners) must see all
//! violations at once. Field paths use wire-format (camelCase) names so
//! errors point at the JSON the user actually wrote.

use crate::domain::models::{
    codes, BreakdownTechnique, ConfidenceLevel, Dataset, ExperienceLevel, Level, NonEstimableWork,
    Story, TeamContext, TechnicalStack, ValidationError, ValidationResult, BREAKDOWN_THRESHOLD,
    FIBONACCI_POINTS,
};

/// Minimum share of estimate values that must be 8 points or fewer for a
/// collection to have a healthy size distribution.
pub const SMALL_STORY_SHARE: f64 = 0.70;

/// Inclusive team size bounds.
pub const TEAM_SIZE_RANGE: (i64, i64) = (1, 12);

/// Rule engine over stories, non-estimable work, and whole datasets.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator;

impl SchemaValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a raw point value.
    ///
    /// Type and value rules are independent: a negative or fractional value
    /// fires `INVALID_POINTS_TYPE`, and any value off the Fibonacci scale
    /// fires `INVALID_POINTS_VALUE`. Both can fire for the same input.
    pub fn validate_story_points(&self, points: f64) -> ValidationResult {
        let mut errors = Vec::new();
        self.collect_points_errors(points, "points", &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Validate a team context block.
    pub fn validate_team_context(&self, context: &TeamContext) -> ValidationResult {
        let mut errors = Vec::new();
        self.collect_team_context_errors(context, "", &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Validate the breakdown rules for one story.
    pub fn validate_story_breakdown(&self, story: &Story) -> ValidationResult {
        let mut errors = Vec::new();
        self.collect_breakdown_errors(story, "", &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Validate one enhanced story against every rule group.
    pub fn validate_story(&self, story: &Story) -> ValidationResult {
        let mut errors = Vec::new();
        self.collect_story_errors(story, "", &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Validate a non-estimable work entry.
    pub fn validate_non_estimable_work(&self, work: &NonEstimableWork) -> ValidationResult {
        let mut errors = Vec::new();
        self.collect_work_errors(work, "", &mut errors);
        ValidationResult::from_errors(errors)
    }

    /// Validate a whole dataset: metadata, every story, and any
    /// non-estimable work, with field paths prefixed by collection index.
    pub fn validate_dataset(&self, dataset: &Dataset) -> ValidationResult {
        let mut errors = Vec::new();

        match &dataset.metadata {
            None => errors.push(ValidationError::new(
                "metadata",
                "Dataset metadata block is required",
                codes::MISSING_METADATA,
            )),
            Some(metadata) => {
                if metadata.exercise_id <= 0 {
                    errors.push(ValidationError::new(
                        "metadata.exerciseId",
                        format!(
                            "Exercise id must be a positive integer, got {}",
                            metadata.exercise_id
                        ),
                        codes::INVALID_EXERCISE_ID,
                    ));
                }
            }
        }

        for (index, story) in dataset.stories.iter().enumerate() {
            self.collect_story_errors(story, &format!("stories[{index}]."), &mut errors);
        }

        if let Some(work_items) = &dataset.non_estimable_work {
            for (index, work) in work_items.iter().enumerate() {
                self.collect_work_errors(
                    work,
                    &format!("nonEstimableWork[{index}]."),
                    &mut errors,
                );
            }
        }

        ValidationResult::from_errors(errors)
    }

    /// Validate the size distribution of a collection.
    ///
    /// At least 70% of all estimate values across all perspectives must be
    /// 8 points or fewer; stories above 8 points must carry the breakdown
    /// flag. An empty collection is trivially valid.
    pub fn validate_distribution(&self, stories: &[Story]) -> ValidationResult {
        let mut errors = Vec::new();

        let all_points: Vec<i64> = stories
            .iter()
            .flat_map(|s| s.estimation_variance.values().map(|e| e.points))
            .collect();

        if !all_points.is_empty() {
            let small = all_points.iter().filter(|&&p| p <= BREAKDOWN_THRESHOLD).count();
            let share = small as f64 / all_points.len() as f64;
            if share < SMALL_STORY_SHARE {
                errors.push(ValidationError::new(
                    "stories",
                    format!(
                        "Only {:.1}% of estimates are {} points or fewer; at least 70% should be",
                        share * 100.0,
                        BREAKDOWN_THRESHOLD
                    ),
                    codes::POOR_SIZE_DISTRIBUTION,
                ));
            }

            let unguided = stories
                .iter()
                .filter(|s| {
                    s.max_estimate().is_some_and(|p| p > BREAKDOWN_THRESHOLD)
                        && !s.breakdown_required
                })
                .count();
            if unguided > 0 {
                errors.push(ValidationError::new(
                    "stories",
                    format!(
                        "{unguided} large stories lack breakdown guidance (breakdownRequired is false)"
                    ),
                    codes::MISSING_BREAKDOWN_GUIDANCE,
                ));
            }
        }

        ValidationResult::from_errors(errors)
    }

    fn collect_points_errors(&self, points: f64, field: &str, errors: &mut Vec<ValidationError>) {
        if !points.is_finite() || points.fract() != 0.0 || points < 0.0 {
            errors.push(ValidationError::new(
                field,
                format!("Story points must be a non-negative integer, got {points}"),
                codes::INVALID_POINTS_TYPE,
            ));
        }
        let on_scale = points.is_finite()
            && points.fract() == 0.0
            && FIBONACCI_POINTS.contains(&(points as i64));
        if !on_scale {
            errors.push(ValidationError::new(
                field,
                format!(
                    "Story points must be one of {FIBONACCI_POINTS:?}, got {points}"
                ),
                codes::INVALID_POINTS_VALUE,
            ));
        }
    }

    fn collect_team_context_errors(
        &self,
        context: &TeamContext,
        prefix: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        if context.experience_level == ExperienceLevel::Unknown {
            errors.push(ValidationError::new(
                format!("{prefix}experienceLevel"),
                "Experience level must be one of: junior, intermediate, senior",
                codes::INVALID_EXPERIENCE_LEVEL,
            ));
        }
        if context.domain_knowledge == Level::Unknown {
            errors.push(ValidationError::new(
                format!("{prefix}domainKnowledge"),
                "Domain knowledge must be one of: low, medium, high",
                codes::INVALID_DOMAIN_KNOWLEDGE,
            ));
        }
        if context.technical_stack == TechnicalStack::Unknown {
            errors.push(ValidationError::new(
                format!("{prefix}technicalStack"),
                "Technical stack must be one of: familiar, new, mixed",
                codes::INVALID_TECHNICAL_STACK,
            ));
        }
        let (min, max) = TEAM_SIZE_RANGE;
        if context.team_size < min || context.team_size > max {
            errors.push(ValidationError::new(
                format!("{prefix}teamSize"),
                format!(
                    "Team size must be between {min} and {max}, got {}",
                    context.team_size
                ),
                codes::INVALID_TEAM_SIZE,
            ));
        }
    }

    fn collect_breakdown_errors(
        &self,
        story: &Story,
        prefix: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let max_estimate = story.max_estimate().unwrap_or(0);

        if max_estimate >= 13 && !story.breakdown_required {
            errors.push(ValidationError::new(
                format!("{prefix}breakdownRequired"),
                format!(
                    "Stories estimated at 13 or more points must be flagged for breakdown (max estimate is {max_estimate})"
                ),
                codes::MISSING_BREAKDOWN_REQUIREMENT,
            ));
        }

        if story.breakdown_required && story.breakdown_suggestions.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}breakdownSuggestions"),
                "Stories flagged for breakdown must carry at least one suggestion",
                codes::MISSING_BREAKDOWN_SUGGESTIONS,
            ));
        }

        for (index, suggestion) in story.breakdown_suggestions.iter().enumerate() {
            if suggestion.technique == BreakdownTechnique::Unknown {
                errors.push(ValidationError::new(
                    format!("{prefix}breakdownSuggestions[{index}].technique"),
                    "Breakdown technique must be one of: by-workflow, by-data, by-acceptance-criteria, by-complexity",
                    codes::INVALID_BREAKDOWN_TECHNIQUE,
                ));
            }
            for (story_index, sub_story) in suggestion.resulting_stories.iter().enumerate() {
                if sub_story.max_estimate().is_some_and(|p| p > BREAKDOWN_THRESHOLD) {
                    errors.push(ValidationError::new(
                        format!(
                            "{prefix}breakdownSuggestions[{index}].resultingStories[{story_index}]"
                        ),
                        format!(
                            "Breakdown results must be {BREAKDOWN_THRESHOLD} points or fewer"
                        ),
                        codes::BREAKDOWN_RESULT_TOO_LARGE,
                    ));
                }
            }
        }
    }

    fn collect_story_errors(&self, story: &Story, prefix: &str, errors: &mut Vec<ValidationError>) {
        for (field, value) in [
            ("id", &story.id),
            ("title", &story.title),
            ("description", &story.description),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("{prefix}{field}"),
                    format!("Story {field} must be a non-empty string"),
                    codes::MISSING_REQUIRED_FIELD,
                ));
            }
        }

        if story.acceptance_criteria.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}acceptanceCriteria"),
                "Stories must carry at least one acceptance criterion",
                codes::EMPTY_ACCEPTANCE_CRITERIA,
            ));
        }

        if story.estimation_variance.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}estimationVariance"),
                "Stories must carry at least one estimation perspective",
                codes::MISSING_ESTIMATION_VARIANCE,
            ));
        }

        for (perspective, entry) in &story.estimation_variance {
            self.collect_points_errors(
                entry.points as f64,
                &format!("{prefix}estimationVariance.{perspective}.points"),
                errors,
            );
            if entry.confidence_level == ConfidenceLevel::Unknown {
                errors.push(ValidationError::new(
                    format!("{prefix}estimationVariance.{perspective}.confidenceLevel"),
                    "Confidence level must be one of: low, medium, high",
                    codes::INVALID_CONFIDENCE_LEVEL,
                ));
            }
        }

        for (dimension, level) in [
            ("technical", story.complexity_factors.technical),
            ("business", story.complexity_factors.business),
            ("integration", story.complexity_factors.integration),
            ("uncertainty", story.complexity_factors.uncertainty),
        ] {
            if level == Some(Level::Unknown) {
                errors.push(ValidationError::new(
                    format!("{prefix}complexityFactors.{dimension}"),
                    "Complexity factors must be one of: low, medium, high",
                    codes::INVALID_COMPLEXITY_FACTOR,
                ));
            }
        }

        if let Some(context) = &story.team_context {
            self.collect_team_context_errors(context, &format!("{prefix}teamContext."), errors);
        }

        self.collect_breakdown_errors(story, prefix, errors);
    }

    fn collect_work_errors(
        &self,
        work: &NonEstimableWork,
        prefix: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        if work.work_type == crate::domain::models::WorkType::Unknown {
            errors.push(ValidationError::new(
                format!("{prefix}type"),
                "Work type must be one of: spike, research, proof-of-concept, learning",
                codes::INVALID_WORK_TYPE,
            ));
        }

        for (field, value) in [
            ("title", &work.title),
            ("timeBox", &work.time_box),
            ("learningObjective", &work.learning_objective),
            ("reasoning", &work.reasoning),
        ] {
            if value.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("{prefix}{field}"),
                    format!("Non-estimable work {field} must be a non-empty string"),
                    codes::MISSING_REQUIRED_FIELD,
                ));
            }
        }

        if work.acceptance_criteria.is_empty() {
            errors.push(ValidationError::new(
                format!("{prefix}acceptanceCriteria"),
                "Non-estimable work must carry at least one acceptance criterion",
                codes::EMPTY_ACCEPTANCE_CRITERIA,
            ));
        }
    }
}
