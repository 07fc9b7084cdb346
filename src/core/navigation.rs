//! Sidebar tree and previous/next links between modules

use crate::core::curriculum::Curriculum;
use crate::core::models::Entry;
use crate::core::routes::TrackModuleParams;
use std::fmt::Write;

/// Link to a module page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Module title
    pub title: String,
    /// Page path relative to the site root (e.g., `java/generics/`)
    pub path: String,
    /// Whether this is the page being displayed
    pub active: bool,
}

/// Phase node of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavPhase {
    /// Phase title
    pub title: String,
    /// Module links in order
    pub modules: Vec<NavLink>,
}

/// Track node of the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTrack {
    /// Track id
    pub id: String,
    /// Track title
    pub title: String,
    /// Expanded when it holds the active module
    pub expanded: bool,
    /// Present phases in order
    pub phases: Vec<NavPhase>,
}

/// Neighbouring modules within the same track
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Neighbours {
    /// Module before the current one
    pub prev: Option<NavLink>,
    /// Module after the current one
    pub next: Option<NavLink>,
}

fn link(entry: Entry<'_>, active: bool) -> NavLink {
    NavLink {
        title: entry.module.title.clone(),
        path: TrackModuleParams::from(entry).path(),
        active,
    }
}

/// Build the sidebar tree, marking `active` (track id, module id) if given.
///
/// Vacant phase slots are left out.
#[must_use]
pub fn build_sidebar(curriculum: &Curriculum, active: Option<(&str, &str)>) -> Vec<NavTrack> {
    curriculum
        .tracks
        .iter()
        .map(|track| {
            let is_active_track = active.is_some_and(|(track_id, _)| track_id == track.id);
            let phases = track
                .phases()
                .map(|phase| NavPhase {
                    title: phase.title.clone(),
                    modules: phase
                        .modules
                        .iter()
                        .map(|module| NavLink {
                            title: module.title.clone(),
                            path: format!("{}/{}/", track.id, module.id),
                            active: is_active_track
                                && active.is_some_and(|(_, module_id)| module_id == module.id),
                        })
                        .collect(),
                })
                .collect();

            NavTrack {
                id: track.id.clone(),
                title: track.title.clone(),
                expanded: is_active_track,
                phases,
            }
        })
        .collect()
}

/// Previous and next module around `module_id` in its track, crossing phase
/// boundaries. Unknown ids give no neighbours.
#[must_use]
pub fn neighbours(curriculum: &Curriculum, track_id: &str, module_id: &str) -> Neighbours {
    let Some(track) = curriculum.track(track_id) else {
        return Neighbours::default();
    };

    let entries: Vec<_> = track.entries().collect();
    let Some(index) = entries.iter().position(|e| e.module.id == module_id) else {
        return Neighbours::default();
    };

    Neighbours {
        prev: index
            .checked_sub(1)
            .and_then(|i| entries.get(i))
            .map(|e| link(*e, false)),
        next: entries.get(index + 1).map(|e| link(*e, false)),
    }
}

/// Render the sidebar as an indented text tree (used by the `tree` command)
#[must_use]
pub fn render_text_tree(tracks: &[NavTrack]) -> String {
    let mut out = String::new();
    for track in tracks {
        let _ = writeln!(out, "{} ({})", track.title, track.id);
        for phase in &track.phases {
            let _ = writeln!(out, "  {}", phase.title);
            for module in &phase.modules {
                let marker = if module.active { "*" } else { "-" };
                let _ = writeln!(out, "    {marker} {} [/{}]", module.title, module.path);
            }
        }
    }
    out
}
