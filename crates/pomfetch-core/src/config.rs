//! Global configuration loaded from `~/.config/pomfetch/config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::RepositoryList;

fn default_workers() -> usize {
    8
}

fn default_follow_redirects() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomfetchConfig {
    /// Number of fetch workers; also the job queue capacity.
    #[serde(default = "default_workers")]
    pub workers: usize,
    /// Repository base URLs in fallback order. When absent the built-in catalog is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repositories: Option<Vec<String>>,
    /// User-Agent header sent with every request (libcurl default when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Follow HTTP redirects (some mirrors redirect to a CDN).
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

impl Default for PomfetchConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            repositories: None,
            user_agent: None,
            follow_redirects: default_follow_redirects(),
        }
    }
}

impl PomfetchConfig {
    /// Repository list in effect. Configured entries must be absolute http(s) URLs.
    pub fn repository_list(&self) -> Result<RepositoryList> {
        match &self.repositories {
            None => Ok(RepositoryList::default()),
            Some(repos) => {
                for repo in repos {
                    validate_repository_url(repo)?;
                }
                Ok(RepositoryList::new(repos))
            }
        }
    }
}

/// Accepts absolute `http`/`https` URLs only.
pub fn validate_repository_url(repo: &str) -> Result<()> {
    let parsed = url::Url::parse(repo.trim())
        .with_context(|| format!("invalid repository URL {:?}", repo))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("unsupported scheme {:?} in repository URL {:?}", other, repo),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pomfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PomfetchConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<PomfetchConfig> {
    if !path.exists() {
        let default_cfg = PomfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let cfg: PomfetchConfig =
        toml::from_str(&data).with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
