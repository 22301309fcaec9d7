//! Subcommand implementations.

pub mod analyze;
pub mod report;
pub mod transform;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Load a JSON or YAML document, picking the parser from the file extension.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    if is_yaml {
        serde_yaml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    } else {
        serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
