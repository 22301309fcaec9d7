//! `storygauge analyze` command.

use std::path::Path;

use anyhow::Result;
use console::style;

use super::load_document;
use crate::cli::output::table::format_analysis_table;
use crate::domain::models::Dataset;
use crate::services::StoryDataManager;

/// Analyze story complexity across a dataset file.
pub fn execute(file: &Path, json: bool) -> Result<()> {
    let dataset: Dataset = load_document(file)?;
    let manager = StoryDataManager::new();
    let analysis = manager.analyze_story_complexity(&dataset.stories);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", format_analysis_table(&analysis));
        if analysis.recommendations.is_empty() {
            println!("{} no complexity concerns", style("ok:").green().bold());
        } else {
            println!("\nRecommendations:");
            for recommendation in &analysis.recommendations {
                println!("  - {recommendation}");
            }
        }
    }

    Ok(())
}
