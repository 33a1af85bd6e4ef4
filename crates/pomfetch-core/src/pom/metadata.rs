//! `maven-metadata.xml`: the per-artifact version listing.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
    pub group_id: String,
    pub artifact_id: String,
    pub versioning: Versioning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Versioning {
    pub latest: String,
    pub release: String,
    pub versions: Versions,
    pub last_updated: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Versions {
    #[serde(rename = "version")]
    pub items: Vec<String>,
}

impl Metadata {
    /// Release if published, else latest, else the last listed version.
    pub fn preferred_version(&self) -> Option<&str> {
        let v = &self.versioning;
        [v.release.as_str(), v.latest.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
            .or_else(|| v.versions.items.last().map(String::as_str))
    }

    pub fn versions(&self) -> &[String] {
        &self.versioning.versions.items
    }
}
