//! Tests for deps, parse-pom and repos subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_deps_defaults() {
    match parse(&["pomfetch", "deps", "org.acme:app:5.0"]) {
        CliCommand::Deps {
            coordinate,
            repo,
            workers,
        } => {
            assert_eq!(coordinate, "org.acme:app:5.0");
            assert!(repo.is_none());
            assert!(workers.is_none());
        }
        _ => panic!("expected Deps"),
    }
}

#[test]
fn cli_parse_deps_workers() {
    match parse(&["pomfetch", "deps", "org.acme:app:5.0", "--workers", "16"]) {
        CliCommand::Deps { workers, .. } => assert_eq!(workers, Some(16)),
        _ => panic!("expected Deps with --workers"),
    }
}

#[test]
fn cli_parse_deps_rejects_bad_workers() {
    assert!(Cli::try_parse_from(["pomfetch", "deps", "g:a:1", "--workers", "many"]).is_err());
}

#[test]
fn cli_parse_parse_pom() {
    match parse(&["pomfetch", "parse-pom", "./pom.xml"]) {
        CliCommand::ParsePom { path } => assert_eq!(path, Path::new("./pom.xml")),
        _ => panic!("expected ParsePom"),
    }
}

#[test]
fn cli_parse_repos() {
    assert!(matches!(parse(&["pomfetch", "repos"]), CliCommand::Repos));
}

#[test]
fn cli_parse_unknown_subcommand_fails() {
    assert!(Cli::try_parse_from(["pomfetch", "install"]).is_err());
}
