//! Domain layer for the storygauge estimation engine.
//!
//! This module contains the story schemas and domain error types.

pub mod errors;
pub mod models;

pub use errors::{DomainError, DomainResult};
