//! Tests for examples, config, completions.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_examples() {
    match parse(&["authscan", "examples"]) {
        CliCommand::Examples => {}
        _ => panic!("expected Examples"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["authscan", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["authscan", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["authscan", "status"]).is_err());
}
