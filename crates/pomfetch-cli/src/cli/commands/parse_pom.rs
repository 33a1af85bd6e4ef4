//! `pomfetch parse-pom` – read a local POM and show what would be fetched.

use anyhow::Result;
use pomfetch_core::pom::{self, Project};
use std::path::Path;

pub fn run_parse_pom(path: &Path) -> Result<()> {
    let project = pom::read_pom(path)?;
    println!("{}", project_line(&project));
    if let Some(parent) = project.parent_coordinate() {
        println!("parent:  {}", parent);
    }
    let deps = project.fixed_dependencies();
    if deps.is_empty() {
        println!("No dependencies declared.");
        return Ok(());
    }
    for dep in deps {
        let pom_path = if dep.has_version() {
            dep.pom_path()
        } else {
            format!("{} (version unresolved)", dep.metadata_path())
        };
        println!("{}  {}", dep.describe(), pom_path);
    }
    Ok(())
}

fn project_line(project: &Project) -> String {
    if project.name.is_empty() {
        format!("project: {}", project.coordinate())
    } else {
        format!("project: {} ({})", project.coordinate(), project.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_line_includes_name_when_present() {
        let xml = b"<project><groupId>g</groupId><artifactId>a</artifactId><version>1</version><name>Demo</name></project>";
        let p = pom::parse_pom(xml).unwrap();
        assert_eq!(project_line(&p), "project: g:a:1 (Demo)");

        let p = pom::parse_pom(b"<project><groupId>g</groupId><artifactId>a</artifactId><version>1</version></project>").unwrap();
        assert_eq!(project_line(&p), "project: g:a:1");
    }
}
