//! Route listing and default-route handlers

use jvm_roadmap::config::Config;
use jvm_roadmap::routes::{default_route, RouteTable, TrackModuleParams};
use jvm_roadmap::verbose;

/// Print every pre-rendered route, one per line.
///
/// Unscoped listings keep repeated ids, exactly as they are enumerated.
pub fn run(config: &Config, unscoped: bool) {
    let curriculum = super::load_or_exit(config);
    let table = RouteTable::build(&curriculum);

    if unscoped {
        for params in &table.unscoped {
            println!("{params}");
        }
        let unique = table.unique_unscoped().count();
        verbose!(
            "{} unscoped routes ({unique} distinct)",
            table.unscoped.len()
        );
    } else {
        for params in &table.scoped {
            println!("{params}");
        }
        verbose!("{} track routes", table.scoped.len());
    }
}

/// Print the route the landing page redirects to
pub fn run_default(config: &Config) {
    let curriculum = super::load_or_exit(config);

    match default_route(&curriculum) {
        Ok(entry) => {
            println!("{}", TrackModuleParams::from(entry));
            verbose!("{} > {} > {}", entry.track.title, entry.phase.title, entry.module.title);
        }
        Err(e) => println!("{e}"),
    }
}
