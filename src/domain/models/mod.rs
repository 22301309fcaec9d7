//! Domain models: story schemas, datasets, and validation results.

pub mod dataset;
pub mod estimate;
pub mod legacy;
pub mod story;
pub mod validation;

pub use dataset::{Dataset, DatasetMetadata, NonEstimableWork, WorkType};
pub use estimate::EstimatedStory;
pub use legacy::{LegacyDataset, LegacyFactors, LegacyMetadata, LegacyStory};
pub use story::{
    BreakdownSuggestion, BreakdownTechnique, ComplexityFactors, ConfidenceLevel, EstimateEntry,
    ExperienceLevel, Level, Story, TeamContext, TechnicalStack, BREAKDOWN_THRESHOLD,
    FIBONACCI_POINTS,
};
pub use validation::{codes, ValidationError, ValidationResult};
