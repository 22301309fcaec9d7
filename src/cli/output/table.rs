//! Table output formatting for CLI commands.
//!
//! Formats validation errors, dataset summaries, analyses, and quality
//! reports using comfy-table.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};

use crate::domain::models::ValidationError;
use crate::services::data_manager::{ComplexityAnalysis, DatasetSummary, QualityReport};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format validation errors as a table.
pub fn format_errors_table(errors: &[ValidationError]) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Field").add_attribute(Attribute::Bold),
        Cell::new("Code").add_attribute(Attribute::Bold),
        Cell::new("Message").add_attribute(Attribute::Bold),
    ]);
    for error in errors {
        table.add_row(vec![
            Cell::new(&error.field),
            Cell::new(&error.code),
            Cell::new(&error.message),
        ]);
    }
    table.to_string()
}

/// Format dataset summary statistics as a table.
pub fn format_summary_table(summary: &DatasetSummary) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Total stories"),
        Cell::new(summary.total_stories),
    ]);
    table.add_row(vec![
        Cell::new("Stories needing breakdown"),
        Cell::new(summary.stories_needing_breakdown),
    ]);
    table.add_row(vec![
        Cell::new("Average story size"),
        Cell::new(format!("{:.1}", summary.average_story_size)),
    ]);
    let histogram = summary
        .size_distribution
        .iter()
        .map(|(points, count)| format!("{points}pt x{count}"))
        .collect::<Vec<_>>()
        .join(", ");
    table.add_row(vec![Cell::new("Size distribution"), Cell::new(histogram)]);
    table.to_string()
}

/// Format a complexity analysis as a table.
pub fn format_analysis_table(analysis: &ComplexityAnalysis) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Finding").add_attribute(Attribute::Bold),
        Cell::new("Stories").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("High complexity (2+ high dimensions)"),
        Cell::new(analysis.high_complexity_stories.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Large but not flagged for breakdown"),
        Cell::new(analysis.unmarked_breakdown_stories.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Divergent perspective estimates"),
        Cell::new(analysis.inconsistent_estimate_stories.join(", ")),
    ]);
    table.to_string()
}

/// Format a quality report as a table.
pub fn format_report_table(report: &QualityReport) -> String {
    let mut table = base_table();
    table.set_header(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Validation"), Cell::new(report.validation_score)]);
    table.add_row(vec![
        Cell::new("Distribution"),
        Cell::new(report.distribution_score),
    ]);
    table.add_row(vec![Cell::new("Complexity"), Cell::new(report.complexity_score)]);
    table.add_row(vec![
        Cell::new("Completeness"),
        Cell::new(report.completeness_score),
    ]);
    table.add_row(vec![
        Cell::new("Overall").add_attribute(Attribute::Bold),
        Cell::new(report.overall_score).add_attribute(Attribute::Bold),
    ]);
    table.to_string()
}
