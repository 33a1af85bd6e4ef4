//! `pomfetch pom` / `pomfetch metadata` – fetch one document and print or save it.

use anyhow::{Context, Result};
use pomfetch_core::config::{self, PomfetchConfig};
use pomfetch_core::coordinate::Coordinate;
use pomfetch_core::pool::FetcherPool;
use pomfetch_core::resolver::Resolver;
use std::fs;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Pom,
    Metadata,
}

pub fn run_fetch(
    cfg: &PomfetchConfig,
    doc: Document,
    coordinate: &str,
    repo: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    if let Some(r) = repo {
        config::validate_repository_url(r)?;
    }
    let coord = parse_for(doc, coordinate)?;
    let pool = FetcherPool::from_config(cfg)?;

    let path = match doc {
        Document::Metadata => coord.metadata_path(),
        Document::Pom => Resolver::new(&pool)
            .resolve_version(&coord, repo)?
            .with_context(|| format!("cannot determine a version for {}", coord))?
            .pom_path(),
    };

    let found = pool
        .fetch(&path, repo)?
        .wait()
        .found()
        .with_context(|| format!("{} not found in any repository", path))?;
    tracing::info!("fetched {} ({} bytes)", found.url, found.data.len());
    eprintln!("{}", found.url);

    match output {
        Some(out) => {
            fs::write(out, &found.data)
                .with_context(|| format!("failed to write {}", out.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&found.data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Metadata lookups do not need a version, so `group:artifact` is accepted there.
pub(crate) fn parse_for(doc: Document, text: &str) -> Result<Coordinate> {
    match Coordinate::parse(text) {
        Ok(c) => Ok(c),
        Err(e) => {
            if doc == Document::Metadata {
                if let Some((group, artifact)) = text.split_once(':') {
                    if !group.is_empty() && !artifact.is_empty() && !artifact.contains(':') {
                        return Ok(Coordinate::new(group, artifact, ""));
                    }
                }
            }
            Err(e.into())
        }
    }
}
