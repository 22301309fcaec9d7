//! Service layer: pure, synchronous estimation logic.

pub mod complexity_scorer;
pub mod consistency;
pub mod data_manager;
pub mod feedback;
pub mod schema_validator;
pub mod transformer;

pub use complexity_scorer::ComplexityScorer;
pub use consistency::ConsistencyValidator;
pub use data_manager::StoryDataManager;
pub use feedback::FeedbackEngine;
pub use schema_validator::SchemaValidator;
pub use transformer::LegacyTransformer;
