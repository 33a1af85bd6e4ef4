pub mod config;
pub mod logging;

pub mod coordinate;
pub mod fetch;
pub mod pom;
pub mod pool;
pub mod repository;
pub mod resolver;
