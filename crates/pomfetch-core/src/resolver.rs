//! Resolution driver: coordinates in, fetched and bound documents out.
//!
//! Single artifacts only. Dependencies of a fetched POM are listed, never
//! walked transitively.

use anyhow::{Context, Result};

use crate::coordinate::Coordinate;
use crate::pom::{parse_metadata, parse_pom, Metadata, PomError, Project};
use crate::pool::{FetchOutcome, FetcherPool, JobHandle};

/// A bound document and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<T> {
    pub url: String,
    pub repo: String,
    pub value: T,
}

/// Outcome of one POM lookup: `Ok(None)` when no repository had it.
pub type PomLookup = Result<Option<Located<Project>>>;

pub struct Resolver<'a> {
    pool: &'a FetcherPool,
}

impl<'a> Resolver<'a> {
    pub fn new(pool: &'a FetcherPool) -> Self {
        Self { pool }
    }

    pub fn fetch_metadata(
        &self,
        coord: &Coordinate,
        repo: Option<&str>,
    ) -> Result<Option<Located<Metadata>>> {
        let handle = self.pool.fetch(&coord.metadata_path(), repo)?;
        bind(handle.wait(), parse_metadata)
    }

    /// Returns `coord` unchanged when it has a version; otherwise fills the
    /// version in from the artifact's metadata. `None` when that fails.
    pub fn resolve_version(
        &self,
        coord: &Coordinate,
        repo: Option<&str>,
    ) -> Result<Option<Coordinate>> {
        if coord.has_version() {
            return Ok(Some(coord.clone()));
        }
        let meta = self.fetch_metadata(coord, repo)?;
        Ok(meta.and_then(|m| with_metadata_version(coord, &m.value)))
    }

    pub fn fetch_pom(&self, coord: &Coordinate, repo: Option<&str>) -> PomLookup {
        let Some(resolved) = self.resolve_version(coord, repo)? else {
            tracing::info!("no version available for {}", coord);
            return Ok(None);
        };
        let handle = self.pool.fetch(&resolved.pom_path(), repo)?;
        bind(handle.wait(), parse_pom)
    }

    /// Looks up many POMs at once. Every job of a phase is submitted before any
    /// result is awaited, so one slow artifact does not hold up the rest.
    /// Results are in input order.
    pub fn fetch_poms(&self, coords: &[Coordinate], repo: Option<&str>) -> Vec<PomLookup> {
        let metadata_jobs: Vec<Option<Result<JobHandle>>> = coords
            .iter()
            .map(|c| (!c.has_version()).then(|| self.submit(&c.metadata_path(), repo)))
            .collect();
        let resolved: Vec<Result<Option<Coordinate>>> = coords
            .iter()
            .zip(metadata_jobs)
            .map(|(c, job)| match job {
                None => Ok(Some(c.clone())),
                Some(handle) => resolve_from_metadata(c, handle),
            })
            .collect();

        let pom_jobs: Vec<Result<Option<JobHandle>>> = resolved
            .into_iter()
            .map(|r| self.submit_pom(r, repo))
            .collect();
        pom_jobs.into_iter().map(wait_pom).collect()
    }

    fn submit(&self, path: &str, repo: Option<&str>) -> Result<JobHandle> {
        Ok(self.pool.fetch(path, repo)?)
    }

    fn submit_pom(
        &self,
        resolved: Result<Option<Coordinate>>,
        repo: Option<&str>,
    ) -> Result<Option<JobHandle>> {
        match resolved? {
            Some(c) => Ok(Some(self.submit(&c.pom_path(), repo)?)),
            None => Ok(None),
        }
    }
}

fn resolve_from_metadata(
    coord: &Coordinate,
    handle: Result<JobHandle>,
) -> Result<Option<Coordinate>> {
    let meta = bind(handle?.wait(), parse_metadata)?;
    Ok(meta.and_then(|m| with_metadata_version(coord, &m.value)))
}

fn wait_pom(job: Result<Option<JobHandle>>) -> PomLookup {
    match job? {
        Some(handle) => bind(handle.wait(), parse_pom),
        None => Ok(None),
    }
}

fn with_metadata_version(coord: &Coordinate, meta: &Metadata) -> Option<Coordinate> {
    let version = meta.preferred_version().filter(|v| !v.is_empty())?;
    tracing::debug!("resolved {} to version {}", coord, version);
    Some(Coordinate {
        version: version.to_string(),
        ..coord.clone()
    })
}

fn bind<T>(
    outcome: FetchOutcome,
    parse: fn(&[u8]) -> Result<T, PomError>,
) -> Result<Option<Located<T>>> {
    let Some(found) = outcome.found() else {
        return Ok(None);
    };
    let value = parse(&found.data).with_context(|| format!("failed to parse {}", found.url))?;
    Ok(Some(Located {
        url: found.url,
        repo: found.repo,
        value,
    }))
}
