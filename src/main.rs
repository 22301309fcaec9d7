//! Storygauge CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use storygauge::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => storygauge::cli::commands::validate::execute(&file, cli.json),
        Commands::Transform { file, output } => {
            storygauge::cli::commands::transform::execute(&file, output.as_deref(), cli.json)
        }
        Commands::Analyze { file } => storygauge::cli::commands::analyze::execute(&file, cli.json),
        Commands::Report { file } => storygauge::cli::commands::report::execute(&file, cli.json),
    };

    if let Err(err) = result {
        storygauge::cli::handle_error(err, cli.json);
    }
}
