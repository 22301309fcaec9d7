//! Storygauge - Story-Point Estimation Consistency Engine
//!
//! Storygauge validates agile estimation datasets: it scores relative-sizing
//! consistency between stories, validates the enhanced story schema against
//! its domain rules (Fibonacci scale, breakdown thresholds, distribution
//! quality), and transforms legacy flat datasets into the enhanced schema.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): story schemas, validation results, errors
//! - **Service Layer** (`services`): pure, synchronous estimation logic
//! - **CLI Layer** (`cli`): command-line interface over dataset files
//!
//! Every service call is a bounded, deterministic computation over in-memory
//! data. Nothing in the core performs I/O, spawns tasks, or retains state
//! between calls.
//!
//! # Example
//!
//! ```
//! use storygauge::domain::models::{ComplexityFactors, EstimatedStory, Level};
//! use storygauge::services::ConsistencyValidator;
//!
//! let validator = ConsistencyValidator::new();
//! let a = EstimatedStory::new("Simple", 2, ComplexityFactors::uniform(Level::Low));
//! let b = EstimatedStory::new("Medium", 5, ComplexityFactors::uniform(Level::Medium));
//! let result = validator.compare(&a, &b);
//! assert!(result.score > 70);
//! ```

pub mod cli;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{DomainError, DomainResult};
pub use domain::models::{
    Dataset, EstimatedStory, LegacyDataset, LegacyStory, Story, ValidationError, ValidationResult,
};
pub use services::{
    ComplexityScorer, ConsistencyValidator, FeedbackEngine, LegacyTransformer, SchemaValidator,
    StoryDataManager,
};
