//! Module resolution by route parameters
//!
//! Both lookups are pure reads over the curriculum. A miss is an explicit
//! [`LookupError`] value; callers decide whether that becomes a 404 page or an
//! exit code.

use crate::core::curriculum::Curriculum;
use crate::core::models::Entry;
use thiserror::Error;

/// Outcome of a lookup that found nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No track has the requested id
    #[error("track '{track_id}' not found")]
    TrackNotFound {
        /// Requested track id
        track_id: String,
    },

    /// No module with the requested id exists in the searched scope
    #[error("module '{module_id}' not found{}", scope_suffix(.track_id.as_deref()))]
    ModuleNotFound {
        /// Requested module id
        module_id: String,
        /// Track the search was restricted to, if any
        track_id: Option<String>,
    },

    /// A request path has neither the `<track>/<module>` nor the `modules/<module>` shape
    #[error("no route matches '{path}'")]
    NoRoute {
        /// Path as requested
        path: String,
    },

    /// There is no module to fall back to
    #[error("no content available")]
    EmptyCurriculum,
}

fn scope_suffix(track_id: Option<&str>) -> String {
    track_id.map_or_else(String::new, |t| format!(" in track '{t}'"))
}

impl LookupError {
    /// Returns `true` for the variants that map to a missing-page response
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TrackNotFound { .. } | Self::ModuleNotFound { .. } | Self::NoRoute { .. }
        )
    }
}

/// Find a module by id across all tracks.
///
/// Tracks are searched in order, then phases, then modules. When the same id is
/// used by several tracks the first one in that order wins, every time.
///
/// # Errors
/// Returns [`LookupError::ModuleNotFound`] when no track contains the id
pub fn find_module<'a>(curriculum: &'a Curriculum, module_id: &str) -> Result<Entry<'a>, LookupError> {
    curriculum
        .entries()
        .find(|entry| entry.module.id == module_id)
        .ok_or_else(|| LookupError::ModuleNotFound {
            module_id: module_id.to_string(),
            track_id: None,
        })
}

/// Find a module by id within one track.
///
/// Vacant phase slots of the track are skipped.
///
/// # Errors
/// Returns [`LookupError::TrackNotFound`] if the track does not exist, or
/// [`LookupError::ModuleNotFound`] if the track has no such module
pub fn find_module_in_track<'a>(
    curriculum: &'a Curriculum,
    track_id: &str,
    module_id: &str,
) -> Result<Entry<'a>, LookupError> {
    let track = curriculum
        .track(track_id)
        .ok_or_else(|| LookupError::TrackNotFound {
            track_id: track_id.to_string(),
        })?;

    track
        .entries()
        .find(|entry| entry.module.id == module_id)
        .ok_or_else(|| LookupError::ModuleNotFound {
            module_id: module_id.to_string(),
            track_id: Some(track_id.to_string()),
        })
}

/// Resolve optional-track route parameters with the matching lookup mode
///
/// # Errors
/// Propagates the error of [`find_module_in_track`] or [`find_module`]
pub fn resolve<'a>(
    curriculum: &'a Curriculum,
    track_id: Option<&str>,
    module_id: &str,
) -> Result<Entry<'a>, LookupError> {
    match track_id {
        Some(track_id) => find_module_in_track(curriculum, track_id, module_id),
        None => find_module(curriculum, module_id),
    }
}
