use std::path::PathBuf;

use clap::Parser;
use storygauge::cli::{Cli, Commands};

#[test]
fn test_parse_validate() {
    let cli = Cli::try_parse_from(vec!["storygauge", "validate", "dataset.json"]).unwrap();
    assert!(!cli.json);
    match cli.command {
        Commands::Validate { file } => assert_eq!(file, PathBuf::from("dataset.json")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_transform_with_output() {
    let cli = Cli::try_parse_from(vec![
        "storygauge",
        "transform",
        "legacy.json",
        "--output",
        "enhanced.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Transform { file, output } => {
            assert_eq!(file, PathBuf::from("legacy.json"));
            assert_eq!(output, Some(PathBuf::from("enhanced.json")));
        }
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_global_json_flag_after_subcommand() {
    let cli =
        Cli::try_parse_from(vec!["storygauge", "report", "dataset.json", "--json"]).unwrap();
    assert!(cli.json);
    match cli.command {
        Commands::Report { file } => assert_eq!(file, PathBuf::from("dataset.json")),
        _ => panic!("Wrong top-level command"),
    }
}

#[test]
fn test_parse_rejects_missing_file() {
    assert!(Cli::try_parse_from(vec!["storygauge", "analyze"]).is_err());
}

#[test]
fn test_parse_rejects_unknown_command() {
    assert!(Cli::try_parse_from(vec!["storygauge", "estimate"]).is_err());
}
