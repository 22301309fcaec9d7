//! Command-line interface over dataset files.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Storygauge: validate, transform, and analyze estimation datasets.
#[derive(Debug, Parser)]
#[command(name = "storygauge", version, about)]
pub struct Cli {
    /// Emit machine-readable JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a dataset against the schema and distribution rules.
    Validate {
        /// Dataset file (.json, .yaml, or .yml).
        file: PathBuf,
    },
    /// Transform a legacy dataset into the enhanced schema.
    Transform {
        /// Legacy dataset file.
        file: PathBuf,
        /// Where to write the enhanced dataset (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Analyze story complexity across a dataset.
    Analyze {
        /// Dataset file.
        file: PathBuf,
    },
    /// Generate a data-quality report for a dataset.
    Report {
        /// Dataset file.
        file: PathBuf,
    },
}

/// Render a command failure and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        let payload = serde_json::json!({ "error": err.to_string() });
        eprintln!("{payload}");
    } else {
        eprintln!("{} {err:#}", console::style("error:").red().bold());
    }
    std::process::exit(1);
}
