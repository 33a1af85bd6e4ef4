//! CLI command handlers, one file per command.

mod deps;
mod fetch;
mod parse_pom;
mod repos;

pub use deps::run_deps;
pub use fetch::{run_fetch, Document};
pub use parse_pom::run_parse_pom;
pub use repos::run_repos;
