//! Binding of fetched POM and `maven-metadata.xml` bodies.
//!
//! Documents are deserialized with quick-xml's serde support. Only the fields
//! needed for coordinate arithmetic are bound; everything else is skipped.

mod error;
mod metadata;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

use crate::coordinate::Coordinate;

pub use error::PomError;
pub use metadata::{Metadata, Versioning, Versions};

/// A project object model: identity, parent, and declared dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub name: String,
    pub parent: Option<Parent>,
    pub dependencies: Dependencies,
    pub dependency_management: DependencyManagement,
}

/// `<parent>` block. Supplies groupId/version when the project omits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Parent {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Dependencies {
    #[serde(rename = "dependency")]
    pub items: Vec<Coordinate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DependencyManagement {
    pub dependencies: Dependencies,
}

impl Parent {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(&self.group_id, &self.artifact_id, &self.version)
    }
}

impl Project {
    /// Own groupId, or the parent's when the project inherits it.
    pub fn effective_group_id(&self) -> &str {
        match &self.parent {
            Some(p) if self.group_id.is_empty() => &p.group_id,
            _ => &self.group_id,
        }
    }

    /// Own version, or the parent's when the project inherits it.
    pub fn effective_version(&self) -> &str {
        match &self.parent {
            Some(p) if self.version.is_empty() => &p.version,
            _ => &self.version,
        }
    }

    /// The project's own coordinate, with group and version inherited as needed.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(
            self.effective_group_id(),
            &self.artifact_id,
            self.effective_version(),
        )
    }

    /// Coordinate that `${project.*}` placeholders are fixed against. The group
    /// is inherited from `<parent>`, the version is not: a project without its
    /// own `<version>` leaves `${project.version}` dependencies versionless.
    fn fixup_coordinate(&self) -> Coordinate {
        Coordinate::new(self.effective_group_id(), &self.artifact_id, &self.version)
    }

    pub fn parent_coordinate(&self) -> Option<Coordinate> {
        self.parent.as_ref().map(Parent::coordinate)
    }

    /// Declared dependencies with `${project.*}` placeholders fixed against this project.
    pub fn fixed_dependencies(&self) -> Vec<Coordinate> {
        fix_all(&self.dependencies, &self.fixup_coordinate())
    }

    /// `<dependencyManagement>` entries, fixed the same way.
    pub fn managed_dependencies(&self) -> Vec<Coordinate> {
        fix_all(&self.dependency_management.dependencies, &self.fixup_coordinate())
    }
}

fn fix_all(deps: &Dependencies, parent: &Coordinate) -> Vec<Coordinate> {
    deps.items.iter().map(|d| d.fix_fields(parent)).collect()
}

/// Binds a POM body.
pub fn parse_pom(bytes: &[u8]) -> Result<Project, PomError> {
    from_xml(bytes)
}

/// Binds a `maven-metadata.xml` body.
pub fn parse_metadata(bytes: &[u8]) -> Result<Metadata, PomError> {
    from_xml(bytes)
}

/// Reads and binds a POM from disk. I/O errors are propagated.
pub fn read_pom(path: &Path) -> Result<Project, PomError> {
    let bytes = fs::read(path).map_err(|source| PomError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_pom(&bytes)
}

fn from_xml<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, PomError> {
    let text = std::str::from_utf8(bytes)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    Ok(quick_xml::de::from_str(text)?)
}

/// `true` only for a literal `true` (any case). Unresolved `${...}` values read as false.
pub(crate) fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().eq_ignore_ascii_case("true"))
}
