//! `storygauge validate` command.

use std::path::Path;

use anyhow::{bail, Result};
use console::style;

use super::load_document;
use crate::cli::output::table::{format_errors_table, format_summary_table};
use crate::domain::models::Dataset;
use crate::services::StoryDataManager;

/// Validate a dataset file against the schema and distribution rules.
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let dataset: Dataset = load_document(file)?;
    let manager = StoryDataManager::new();
    let report = manager.validate_dataset(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", format_summary_table(&report.summary));
        if report.validation.is_valid {
            println!("{} dataset is valid", style("ok:").green().bold());
        } else {
            println!(
                "\n{} {} validation error(s):",
                style("invalid:").red().bold(),
                report.validation.errors.len()
            );
            println!("{}", format_errors_table(&report.validation.errors));
        }
    }

    if !report.validation.is_valid {
        bail!("dataset failed validation");
    }
    Ok(())
}
