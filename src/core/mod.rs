//! Core module: curriculum store, lookups, routes and page rendering

pub mod config;
pub mod curriculum;
pub mod models;
pub mod navigation;
pub mod resolver;
pub mod routes;
pub mod site;

/// Returns the current version of the `jvm-roadmap` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
