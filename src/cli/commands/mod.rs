//! CLI command handlers for `jvm-roadmap`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗` status
//! lines and exit non-zero when the command failed.

pub mod build;
pub mod check;
pub mod config;
pub mod routes;
pub mod show;
pub mod tree;

use jvm_roadmap::config::Config;
use jvm_roadmap::curriculum::Curriculum;
use jvm_roadmap::{error, info, warn};
use std::borrow::Cow;

/// Read the curriculum named by `paths.curriculum_file`, or the built-in one when
/// the setting is empty. No validation is done here.
fn read_curriculum(config: &Config) -> Result<Cow<'static, Curriculum>, String> {
    let path = &config.paths.curriculum_file;
    if path.is_empty() {
        info!("Using built-in curriculum");
        return Ok(Cow::Borrowed(Curriculum::builtin()));
    }

    let curriculum = Curriculum::from_path(path).map_err(|e| {
        error!("Failed to load curriculum {path}: {e}");
        format!("✗ Failed to load {path}: {e}")
    })?;
    info!("Curriculum loaded: {path}");
    Ok(Cow::Owned(curriculum))
}

/// Load and validate the configured curriculum, warning about module ids that
/// several tracks share
///
/// # Errors
/// Returns a printable message if the data cannot be read or fails validation
pub fn load_curriculum(config: &Config) -> Result<Cow<'static, Curriculum>, String> {
    let curriculum = read_curriculum(config)?;

    if let Err(problems) = curriculum.validate() {
        for problem in &problems {
            error!("{problem}");
        }
        return Err(format!(
            "✗ Curriculum has {} problem(s); run `jvm-roadmap check` for details",
            problems.len()
        ));
    }

    for (module_id, tracks) in curriculum.cross_track_duplicates() {
        warn!(
            "Module id '{module_id}' is used by tracks {}; /modules/{module_id}/ shows the one in '{}'",
            tracks.join(", "),
            tracks[0]
        );
    }

    Ok(curriculum)
}

/// Load the curriculum or print the failure and exit with status 1
pub fn load_or_exit(config: &Config) -> Cow<'static, Curriculum> {
    load_curriculum(config).unwrap_or_else(|message| {
        eprintln!("{message}");
        std::process::exit(1);
    })
}
