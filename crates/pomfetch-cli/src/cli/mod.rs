//! CLI for pomfetch.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pomfetch_core::config;
use std::path::PathBuf;

use commands::{run_deps, run_fetch, run_parse_pom, run_repos, Document};

/// Top-level CLI for pomfetch.
#[derive(Debug, Parser)]
#[command(name = "pomfetch")]
#[command(about = "Fetch Maven POMs and metadata from a list of fallback mirrors", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the POM of an artifact.
    Pom {
        /// Coordinate as group:artifact:version.
        coordinate: String,
        /// Only try this repository base URL (no fallback).
        #[arg(long, value_name = "URL")]
        repo: Option<String>,
        /// Write the document here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Fetch the maven-metadata.xml of an artifact (version is ignored).
    Metadata {
        /// Coordinate as group:artifact[:version].
        coordinate: String,
        /// Only try this repository base URL (no fallback).
        #[arg(long, value_name = "URL")]
        repo: Option<String>,
        /// Write the document here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Fetch an artifact's POM and then the POMs of its direct dependencies.
    Deps {
        /// Coordinate as group:artifact:version.
        coordinate: String,
        /// Only try this repository base URL (no fallback).
        #[arg(long, value_name = "URL")]
        repo: Option<String>,
        /// Override the configured number of fetch workers.
        #[arg(long, value_name = "N")]
        workers: Option<usize>,
    },

    /// Read a local POM file and print its coordinate and dependencies.
    ParsePom {
        /// Path to the POM file.
        path: PathBuf,
    },

    /// List the repositories tried, in fallback order.
    Repos,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Pom {
                coordinate,
                repo,
                output,
            } => run_fetch(
                &cfg,
                Document::Pom,
                &coordinate,
                repo.as_deref(),
                output.as_deref(),
            )?,
            CliCommand::Metadata {
                coordinate,
                repo,
                output,
            } => run_fetch(
                &cfg,
                Document::Metadata,
                &coordinate,
                repo.as_deref(),
                output.as_deref(),
            )?,
            CliCommand::Deps {
                coordinate,
                repo,
                workers,
            } => {
                if let Some(n) = workers {
                    cfg.workers = n;
                }
                run_deps(&cfg, &coordinate, repo.as_deref())?;
            }
            CliCommand::ParsePom { path } => run_parse_pom(&path)?,
            CliCommand::Repos => run_repos(&cfg)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
