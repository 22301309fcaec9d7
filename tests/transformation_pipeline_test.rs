//! End-to-end transform-then-validate pipeline checks.

use storygauge::domain::models::{codes, LegacyDataset, LegacyFactors, LegacyStory, Story};
use storygauge::services::{LegacyTransformer, SchemaValidator, StoryDataManager};

fn legacy_story(id: &str, points: i64, complexity: &str) -> LegacyStory {
    LegacyStory {
        id: Some(id.to_string()),
        title: Some(format!("Story {id}")),
        description: Some("A legacy story".to_string()),
        correct_points: Some(points),
        acceptance_criteria: Some(vec![
            "criterion one".to_string(),
            "criterion two".to_string(),
            "criterion three".to_string(),
        ]),
        factors: Some(LegacyFactors {
            complexity: Some(complexity.to_string()),
            effort: Some("Medium".to_string()),
            uncertainty: Some("Medium".to_string()),
        }),
        ..LegacyStory::default()
    }
}

#[test]
fn test_transformed_stories_validate_cleanly() {
    let transformer = LegacyTransformer::new();
    let validator = SchemaValidator::new();

    for points in [1, 2, 3, 5] {
        let story = transformer.transform_story(&legacy_story("s", points, "Medium"));
        let result = validator.validate_story(&story);
        assert!(result.is_valid, "points {points}: {:?}", result.errors);
    }
}

#[test]
fn test_base_eight_story_junior_estimate_crosses_threshold() {
    // 8 * 1.3 = 10.4 rounds up to 13, so the junior perspective of an
    // unflagged base-8 story trips the breakdown requirement. This mirrors
    // the legacy arithmetic; the validator is the safety net.
    let transformer = LegacyTransformer::new();
    let validator = SchemaValidator::new();

    let story = transformer.transform_story(&legacy_story("s", 8, "Medium"));
    assert!(!story.breakdown_required);
    assert_eq!(story.estimation_variance["juniorTeam"].points, 13);
    let result = validator.validate_story_breakdown(&story);
    assert!(result.has_code(codes::MISSING_BREAKDOWN_REQUIREMENT));
}

#[test]
fn test_large_transformed_story_satisfies_breakdown_rules() {
    let transformer = LegacyTransformer::new();
    let validator = SchemaValidator::new();

    for points in [13, 21, 34] {
        let story = transformer.transform_story(&legacy_story("s", points, "High"));
        assert!(story.breakdown_required);
        assert!(!story.breakdown_suggestions.is_empty());
        let result = validator.validate_story_breakdown(&story);
        assert!(result.is_valid, "points {points}: {:?}", result.errors);
    }
}

#[test]
fn test_manager_pipeline_reports_success() {
    let manager = StoryDataManager::new();
    let legacy = LegacyDataset {
        metadata: None,
        stories: Some(vec![
            legacy_story("a", 2, "Low"),
            legacy_story("b", 3, "Medium"),
            legacy_story("c", 5, "Medium"),
        ]),
    };

    let result = manager.load_and_transform_legacy_data(&legacy).unwrap();
    assert!(result.success, "errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());

    let report = manager.validate_dataset(&result.dataset);
    assert!(report.validation.is_valid);
    assert_eq!(report.summary.total_stories, 3);
}

#[test]
fn test_unparseable_legacy_collection_fails_hard() {
    let manager = StoryDataManager::new();
    let err = manager
        .load_and_transform_legacy_data(&LegacyDataset::default())
        .unwrap_err();
    assert!(err.to_string().contains("transform"));
}

#[test]
fn test_distribution_over_transformed_large_stories() {
    let transformer = LegacyTransformer::new();
    let validator = SchemaValidator::new();

    // A collection dominated by large stories fails distribution even
    // though each story individually carries breakdown guidance.
    let stories: Vec<Story> = (0..5)
        .map(|i| transformer.transform_story(&legacy_story(&format!("s{i}"), 21, "High")))
        .collect();

    let result = validator.validate_distribution(&stories);
    assert!(result.has_code(codes::POOR_SIZE_DISTRIBUTION));
    assert!(!result.has_code(codes::MISSING_BREAKDOWN_GUIDANCE));
}
