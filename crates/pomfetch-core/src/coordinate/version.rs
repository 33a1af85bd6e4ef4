//! Version handling: placeholder fixup, range resolution, presence checks.

use super::Coordinate;

pub const PROJECT_GROUP_ID: &str = "${project.groupId}";
pub const POM_GROUP_ID: &str = "${pom.groupId}";
pub const PROJECT_VERSION: &str = "${project.version}";
/// Written by some build tools in place of a missing version.
pub const UNSPECIFIED_VERSION: &str = "unspecified";

impl Coordinate {
    /// Returns a copy with inherited placeholders replaced from `parent`.
    ///
    /// Only `${project.groupId}` / `${pom.groupId}` (group) and `${project.version}`
    /// (version) are substituted. Any other `${...}` value is passed through as-is.
    pub fn fix_fields(&self, parent: &Coordinate) -> Coordinate {
        let mut fixed = self.clone();
        if fixed.group_id == PROJECT_GROUP_ID || fixed.group_id == POM_GROUP_ID {
            fixed.group_id = parent.group_id.clone();
        }
        if fixed.version == PROJECT_VERSION {
            fixed.version = parent.version.clone();
        }
        fixed
    }

    /// False for empty, `unspecified`, and unresolved `${...}` versions.
    pub fn has_version(&self) -> bool {
        !self.version.is_empty()
            && self.version != UNSPECIFIED_VERSION
            && !self.version.starts_with("${")
    }

    /// Picks one concrete version out of the raw version string.
    ///
    /// Bracket characters are stripped, the remainder is split on `,` and the
    /// lexicographically greatest token wins. This is a string comparison, not
    /// version precedence: `[2.9.0,2.10.0]` resolves to `2.9.0`.
    pub fn resolved_version(&self) -> &str {
        let clean = self.version.trim_matches(|c| c == '[' || c == ']');
        clean.split(',').max().unwrap_or(clean)
    }
}
