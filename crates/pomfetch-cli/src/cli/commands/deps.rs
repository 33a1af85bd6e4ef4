//! `pomfetch deps` – fetch a POM, then all of its direct dependencies' POMs concurrently.

use anyhow::{Context, Result};
use pomfetch_core::config::{self, PomfetchConfig};
use pomfetch_core::coordinate::Coordinate;
use pomfetch_core::pool::FetcherPool;
use pomfetch_core::resolver::Resolver;

pub fn run_deps(cfg: &PomfetchConfig, coordinate: &str, repo: Option<&str>) -> Result<()> {
    if let Some(r) = repo {
        config::validate_repository_url(r)?;
    }
    let coord = Coordinate::parse(coordinate)?;
    let pool = FetcherPool::from_config(cfg)?;
    let resolver = Resolver::new(&pool);

    let project = resolver
        .fetch_pom(&coord, repo)?
        .with_context(|| format!("{} not found in any repository", coord))?;
    println!("{} ({})", project.value.coordinate(), project.url);

    let deps = project.value.fixed_dependencies();
    if deps.is_empty() {
        println!("No dependencies declared.");
        return Ok(());
    }

    let results = resolver.fetch_poms(&deps, repo);
    println!("{:<60} {:<10} {}", "DEPENDENCY", "SCOPE", "FOUND AT");
    for (dep, result) in deps.iter().zip(results) {
        let found_at = match result {
            Ok(Some(located)) => located.repo,
            Ok(None) => "-".to_string(),
            Err(e) => format!("error: {:#}", e),
        };
        let scope = if dep.scope.is_empty() {
            "compile"
        } else {
            dep.scope.as_str()
        };
        println!("{:<60} {:<10} {}", dep.id(), scope, found_at);
    }
    Ok(())
}
