//! `storygauge report` command.

use std::path::Path;

use anyhow::Result;

use super::load_document;
use crate::cli::output::table::format_report_table;
use crate::domain::models::Dataset;
use crate::services::StoryDataManager;

/// Generate a data-quality report for a dataset file.
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let dataset: Dataset = load_document(file)?;
    let manager = StoryDataManager::new();
    let report = manager.generate_data_quality_report(&dataset);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Data quality report ({})",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
        println!("{}", format_report_table(&report));
    }

    Ok(())
}
