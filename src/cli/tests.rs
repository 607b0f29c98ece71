//! Unit tests for CLI argument parsing

use crate::cli::Cli;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_entity_is_positional() {
    let cli = Cli::try_parse_from(["crudgen", "User"]).unwrap();
    assert_eq!(cli.entity, "User");
    assert!(cli.config.is_none());
    assert!(cli.templates.is_none());
    assert!(!cli.dry_run);
    assert!(!cli.format);
}

#[test]
fn test_all_flags() {
    let cli = Cli::try_parse_from([
        "crudgen",
        "CarRental",
        "--output",
        "src",
        "--config",
        "gen.toml",
        "--templates",
        "tpl",
        "--dry-run",
        "--format",
    ])
    .unwrap();

    assert_eq!(cli.entity, "CarRental");
    assert_eq!(cli.output, Some(PathBuf::from("src")));
    assert_eq!(cli.config, Some(PathBuf::from("gen.toml")));
    assert_eq!(cli.templates, Some(PathBuf::from("tpl")));
    assert!(cli.dry_run);
    assert!(cli.format);
}

#[test]
fn test_short_flags() {
    let cli = Cli::try_parse_from(["crudgen", "Invoice", "-o", "out", "-t", "tpl"]).unwrap();
    assert_eq!(cli.output, Some(PathBuf::from("out")));
    assert_eq!(cli.templates, Some(PathBuf::from("tpl")));
}

#[test]
fn test_entity_is_required() {
    let err = Cli::try_parse_from(["crudgen"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_single_entity_only() {
    assert!(Cli::try_parse_from(["crudgen", "User", "Order"]).is_err());
}
