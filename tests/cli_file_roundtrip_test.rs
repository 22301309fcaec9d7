//! CLI command round-trips over real dataset files.

use std::fs;

use storygauge::cli::commands::{transform, validate};
use storygauge::domain::models::Dataset;
use tempfile::tempdir;

const VALID_DATASET: &str = r#"{
    "metadata": {
        "exerciseId": 1,
        "type": "estimation",
        "version": "2.0",
        "description": "CLI round-trip fixture"
    },
    "stories": [
        {
            "id": "s-1",
            "title": "Login form",
            "description": "As a user I can log in",
            "acceptanceCriteria": ["Valid credentials succeed"],
            "estimationVariance": {
                "baseTeam": {
                    "points": 3,
                    "reasoning": "Standard form work",
                    "confidenceLevel": "high"
                },
                "seniorTeam": {
                    "points": 2,
                    "reasoning": "Done this before",
                    "confidenceLevel": "high"
                }
            },
            "complexityFactors": {
                "technical": "low",
                "business": "low",
                "integration": "medium",
                "uncertainty": "low"
            },
            "breakdownRequired": false
        }
    ]
}"#;

const LEGACY_DATASET: &str = r#"{
    "metadata": {"exerciseId": 2, "type": "estimation"},
    "stories": [
        {
            "id": "old-1",
            "title": "Search",
            "correctPoints": 5,
            "acceptanceCriteria": ["Results ranked"],
            "factors": {
                "complexity": "Medium",
                "effort": "Medium",
                "uncertainty": "Low"
            }
        }
    ]
}"#;

#[test]
fn test_validate_accepts_valid_dataset_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    fs::write(&path, VALID_DATASET).unwrap();

    assert!(validate::execute(&path, true).is_ok());
}

#[test]
fn test_validate_rejects_broken_dataset_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    // Points value 4 is off the scale.
    let broken = VALID_DATASET.replace("\"points\": 3", "\"points\": 4");
    fs::write(&path, broken).unwrap();

    assert!(validate::execute(&path, true).is_err());
}

#[test]
fn test_validate_rejects_unparseable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    fs::write(&path, "not json at all").unwrap();

    assert!(validate::execute(&path, true).is_err());
}

#[test]
fn test_transform_writes_enhanced_dataset() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("legacy.json");
    let output = dir.path().join("enhanced.json");
    fs::write(&input, LEGACY_DATASET).unwrap();

    transform::execute(&input, Some(output.as_path()), true).unwrap();

    let enhanced: Dataset = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(enhanced.stories.len(), 1);
    assert_eq!(enhanced.stories[0].id, "old-1");
    assert_eq!(
        enhanced.stories[0].estimation_variance["baseTeam"].points,
        5
    );
    assert_eq!(enhanced.metadata.unwrap().exercise_id, 2);
}

#[test]
fn test_validate_accepts_yaml_dataset() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dataset.yaml");
    let yaml: serde_yaml::Value = serde_json::from_str(VALID_DATASET).unwrap();
    fs::write(&path, serde_yaml::to_string(&yaml).unwrap()).unwrap();

    assert!(validate::execute(&path, true).is_ok());
}
