//! Ordered catalog of repository base URLs tried when a job is not pinned.
//!
//! Order is fallback priority: the first entry is tried first.

use std::sync::Arc;

/// Well-known public Maven-compatible repositories, in fallback order.
pub const DEFAULT_REPOSITORIES: &[&str] = &[
    "https://repo.maven.apache.org/maven2",
    "https://dl.google.com/dl/android/maven2",
    "https://repository.sonatype.org/content/groups/sonatype-public-grid",
    "https://plugins.gradle.org/m2",
    "https://maven.java.net/content/repositories/releases",
    "https://jcenter.bintray.com",
    "https://jitpack.io",
    "https://repo1.maven.org/maven2",
];

/// Immutable, cheaply cloneable list of repository base URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryList {
    repos: Arc<[String]>,
}

impl RepositoryList {
    /// Builds a list from base URLs, keeping their order. A trailing `/` is
    /// trimmed so request URLs are always `{base}/{path}`.
    pub fn new<I, S>(repos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let repos: Vec<String> = repos
            .into_iter()
            .map(|r| normalize_base(r.as_ref()))
            .collect();
        Self {
            repos: repos.into(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.repos
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.repos.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

impl Default for RepositoryList {
    fn default() -> Self {
        Self::new(DEFAULT_REPOSITORIES)
    }
}

pub(crate) fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
