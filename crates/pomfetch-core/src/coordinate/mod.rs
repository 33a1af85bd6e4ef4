//! Maven coordinate model.
//!
//! A [`Coordinate`] is the group/artifact/version tuple of one dependency
//! declaration. Everything here is a pure function of the coordinate's fields:
//! placeholder fixup against a parent, version-range resolution, and the
//! repository-relative paths of the POM and `maven-metadata.xml` documents.

mod parse;
mod path;
mod version;

use serde::Deserialize;
use std::fmt;

pub use parse::ParseCoordinateError;
pub use path::METADATA_FILE;
pub use version::{POM_GROUP_ID, PROJECT_GROUP_ID, PROJECT_VERSION, UNSPECIFIED_VERSION};

/// One Maven artifact reference, as declared in a POM or given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    /// Raw version: a concrete version, a placeholder, a `[a,b]` range, or empty.
    pub version: String,
    /// Informational only (`compile`, `test`, ...).
    pub scope: String,
    #[serde(deserialize_with = "crate::pom::lenient_bool")]
    pub optional: bool,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: String::new(),
            optional: false,
        }
    }

    /// `group:artifact:version` using the raw (unresolved) version.
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }

    /// Verbose one-line description including scope and optionality.
    pub fn describe(&self) -> String {
        format!(
            "<Dep G={} A={} V={} O={} S={} >",
            self.group_id, self.artifact_id, self.version, self.optional, self.scope
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_matches_display() {
        let c = Coordinate::new("org.slf4j", "slf4j-api", "2.0.9");
        assert_eq!(c.id(), "org.slf4j:slf4j-api:2.0.9");
        assert_eq!(c.to_string(), c.id());
    }

    #[test]
    fn describe_includes_scope_and_optional() {
        let mut c = Coordinate::new("junit", "junit", "4.13.2");
        c.scope = "test".to_string();
        c.optional = true;
        assert_eq!(c.describe(), "<Dep G=junit A=junit V=4.13.2 O=true S=test >");
    }

    #[test]
    fn new_defaults_scope_and_optional() {
        let c = Coordinate::new("a", "b", "1");
        assert!(c.scope.is_empty());
        assert!(!c.optional);
    }
}
