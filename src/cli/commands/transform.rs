//! `storygauge transform` command.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use super::load_document;
use crate::domain::models::LegacyDataset;
use crate::services::LegacyTransformer;

/// Transform a legacy dataset file into the enhanced schema.
pub fn execute(file: &Path, output: Option<&Path>, json: bool) -> Result<()> {
    let legacy: LegacyDataset = load_document(file)?;
    let transformer = LegacyTransformer::new();
    let outcome = transformer
        .safe_transform_dataset(&legacy)
        .context("Failed to transform legacy dataset")?;

    for warning in &outcome.warnings {
        eprintln!("{} {warning}", style("warning:").yellow().bold());
    }

    let rendered = serde_json::to_string_pretty(&outcome.dataset)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if !json {
                println!(
                    "{} transformed {} stories into {}",
                    style("ok:").green().bold(),
                    outcome.dataset.stories.len(),
                    path.display()
                );
            }
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
