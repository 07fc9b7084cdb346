//! Check command handler

use jvm_roadmap::config::Config;
use jvm_roadmap::routes::default_route;
use jvm_roadmap::{info, warn};

/// Validate the configured curriculum, printing every problem found.
///
/// Module ids shared by several tracks are reported as warnings only.
pub fn run(config: &Config) {
    let curriculum = super::read_curriculum(config).unwrap_or_else(|message| {
        eprintln!("{message}");
        std::process::exit(1);
    });

    if let Err(problems) = curriculum.validate() {
        for problem in &problems {
            eprintln!("✗ {problem}");
        }
        eprintln!("✗ {} problem(s) found", problems.len());
        std::process::exit(1);
    }

    for (module_id, tracks) in curriculum.cross_track_duplicates() {
        warn!("Module id '{module_id}' is shared by tracks: {}", tracks.join(", "));
    }

    if let Err(e) = default_route(&curriculum) {
        warn!("No default route: {e}");
    }

    info!(
        "{} tracks, {} modules",
        curriculum.tracks.len(),
        curriculum.module_count()
    );
    println!(
        "✓ Curriculum is valid ({} tracks, {} modules)",
        curriculum.tracks.len(),
        curriculum.module_count()
    );
}
