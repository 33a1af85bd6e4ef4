//! Repository-relative paths for a coordinate's documents.

use super::Coordinate;

/// File name of the per-artifact version listing.
pub const METADATA_FILE: &str = "maven-metadata.xml";

impl Coordinate {
    /// Group id with every `.` replaced by `/`.
    pub fn group_path(&self) -> String {
        self.group_id.replace('.', "/")
    }

    /// `{group_path}/{artifact_id}/maven-metadata.xml`
    pub fn metadata_path(&self) -> String {
        format!("{}/{}/{}", self.group_path(), self.artifact_id, METADATA_FILE)
    }

    /// `{group_path}/{artifact_id}/{v}/{artifact_id}-{v}.pom` with `v` the resolved version.
    pub fn pom_path(&self) -> String {
        let version = self.resolved_version();
        format!(
            "{}/{}/{}/{}-{}.pom",
            self.group_path(),
            self.artifact_id,
            version,
            self.artifact_id,
            version
        )
    }
}
