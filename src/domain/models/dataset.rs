//! Dataset schema: a metadata block, stories, and optional non-estimable work.

use serde::{Deserialize, Serialize};

use super::story::Story;

/// Kinds of time-boxed, non-estimable work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    /// A technical spike.
    Spike,
    /// Open-ended research.
    Research,
    /// A throwaway proof of concept.
    ProofOfConcept,
    /// Team learning time.
    Learning,
    /// Any value outside the closed set.
    #[serde(other)]
    Unknown,
}

/// Time-boxed research work that cannot be point-estimated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonEstimableWork {
    /// What kind of work this is.
    #[serde(rename = "type")]
    pub work_type: WorkType,
    /// Short title.
    pub title: String,
    /// Time box, e.g. "3 days".
    pub time_box: String,
    /// What the team expects to learn.
    pub learning_objective: String,
    /// Conditions for the time box to count as done.
    #[serde(default)]
    pub acceptance_criteria: Vec<String>,
    /// Stories expected to emerge once the unknowns are resolved.
    #[serde(default)]
    pub transition_to_stories: Vec<String>,
    /// Why this work is not estimable.
    pub reasoning: String,
}

/// Metadata describing a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Exercise number. Must be a positive integer.
    pub exercise_id: i64,
    /// Exercise type tag.
    #[serde(rename = "type")]
    pub exercise_type: String,
    /// Schema version string.
    pub version: String,
    /// Human description of the dataset.
    pub description: String,
}

/// A complete enhanced dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset metadata. Required for a valid dataset, but optional in the
    /// schema so the validator can report its absence instead of the loader
    /// rejecting the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DatasetMetadata>,
    /// The story collection.
    #[serde(default)]
    pub stories: Vec<Story>,
    /// Optional non-estimable work items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_estimable_work: Option<Vec<NonEstimableWork>>,
}
