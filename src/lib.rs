//! Shared library for `jvm-roadmap`
//! Contains the curriculum store, module resolution, route enumeration and
//! static page rendering used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::{config, curriculum, get_version, models, navigation, resolver, routes, site};
