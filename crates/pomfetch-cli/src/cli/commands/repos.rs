//! `pomfetch repos` – list repositories in fallback order.

use anyhow::Result;
use pomfetch_core::config::PomfetchConfig;

pub fn run_repos(cfg: &PomfetchConfig) -> Result<()> {
    let repos = cfg.repository_list()?;
    if repos.is_empty() {
        println!("No repositories configured.");
        return Ok(());
    }
    for (i, repo) in repos.iter().enumerate() {
        println!("{:<4} {}", i + 1, repo);
    }
    Ok(())
}
