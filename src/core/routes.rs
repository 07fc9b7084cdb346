//! Static route enumeration and default-route selection
//!
//! The enumerators walk the whole curriculum eagerly and never fail. [`RouteTable`]
//! keeps both enumerations as a snapshot so page generation reads the same list
//! the whole time.

use crate::core::curriculum::Curriculum;
use crate::core::models::Entry;
use crate::core::resolver::LookupError;
use std::collections::HashSet;
use std::fmt;

/// First path segment of unscoped module pages; no track may use it as its id
pub const UNSCOPED_PREFIX: &str = "modules";

/// Route parameters of an unscoped module page (`/modules/<module>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleParams {
    /// Module id
    pub module_id: String,
}

/// Route parameters of a track-scoped module page (`/<track>/<module>`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackModuleParams {
    /// Track id
    pub track_id: String,
    /// Module id
    pub module_id: String,
}

impl ModuleParams {
    /// URL path of the page, relative to the site root
    #[must_use]
    pub fn path(&self) -> String {
        format!("{UNSCOPED_PREFIX}/{}/", self.module_id)
    }
}

impl TrackModuleParams {
    /// URL path of the page, relative to the site root
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}/", self.track_id, self.module_id)
    }
}

impl From<Entry<'_>> for TrackModuleParams {
    fn from(entry: Entry<'_>) -> Self {
        Self {
            track_id: entry.track.id.clone(),
            module_id: entry.module.id.clone(),
        }
    }
}

impl fmt::Display for ModuleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

impl fmt::Display for TrackModuleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// One `{module_id}` per module, in traversal order.
///
/// An id used by several tracks appears once per track.
#[must_use]
pub fn enumerate_module_routes(curriculum: &Curriculum) -> Vec<ModuleParams> {
    curriculum
        .entries()
        .map(|entry| ModuleParams {
            module_id: entry.module.id.clone(),
        })
        .collect()
}

/// One `{track_id, module_id}` per module, in traversal order
#[must_use]
pub fn enumerate_track_module_routes(curriculum: &Curriculum) -> Vec<TrackModuleParams> {
    curriculum.entries().map(TrackModuleParams::from).collect()
}

/// Pick the page shown when no module is requested: the first module of the
/// first phase of the first track.
///
/// Vacant phase slots are skipped when looking for the first phase. If the first
/// phase has no modules there is no default; later phases are not consulted.
///
/// # Errors
/// Returns [`LookupError::EmptyCurriculum`] when there is nothing to show
pub fn default_route(curriculum: &Curriculum) -> Result<Entry<'_>, LookupError> {
    let track = curriculum.tracks.first().ok_or(LookupError::EmptyCurriculum)?;
    let phase = track.phases().next().ok_or(LookupError::EmptyCurriculum)?;
    let module = phase.modules.first().ok_or(LookupError::EmptyCurriculum)?;
    Ok(Entry {
        track,
        phase,
        module,
    })
}

/// Frozen snapshot of every pre-rendered route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    /// Track-scoped routes, exactly one per module
    pub scoped: Vec<TrackModuleParams>,
    /// Unscoped routes, possibly with repeated ids
    pub unscoped: Vec<ModuleParams>,
    /// Default route, if the curriculum has content
    pub default: Option<TrackModuleParams>,
}

impl RouteTable {
    /// Enumerate all routes of a curriculum once
    #[must_use]
    pub fn build(curriculum: &Curriculum) -> Self {
        Self {
            scoped: enumerate_track_module_routes(curriculum),
            unscoped: enumerate_module_routes(curriculum),
            default: default_route(curriculum).ok().map(TrackModuleParams::from),
        }
    }

    /// Unscoped routes with repeats removed, keeping first occurrences in order
    pub fn unique_unscoped(&self) -> impl Iterator<Item = &ModuleParams> {
        let mut seen = HashSet::new();
        self.unscoped
            .iter()
            .filter(move |params| seen.insert(params.module_id.as_str()))
    }

    /// Returns `true` if there are no module routes at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scoped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Module, Phase, Track};
    use crate::core::resolver::{find_module, find_module_in_track};

    fn curriculum() -> Curriculum {
        Curriculum::new(vec![
            Track::new("java", "Java")
                .with_phase(
                    Phase::new("core", "Core", "")
                        .with_module(Module::new("exception-handling", "Exceptions", ""))
                        .with_module(Module::new("collections", "Collections", "")),
                )
                .with_vacant_phase(),
            Track::new("kotlin", "Kotlin").with_phase(
                Phase::new("core", "Core", "")
                    .with_module(Module::new("null-safety", "Null Safety", ""))
                    .with_module(Module::new("collections", "Collections", "")),
            ),
        ])
    }

    fn scoped(track_id: &str, module_id: &str) -> TrackModuleParams {
        TrackModuleParams {
            track_id: track_id.to_string(),
            module_id: module_id.to_string(),
        }
    }

    #[test]
    fn test_scoped_enumeration_one_per_module() {
        let c = curriculum();
        let routes = enumerate_track_module_routes(&c);

        assert_eq!(routes.len(), c.module_count());
        assert!(routes.contains(&scoped("java", "exception-handling")));
        assert!(routes.contains(&scoped("kotlin", "null-safety")));
        assert!(routes.contains(&scoped("kotlin", "collections")));
    }

    #[test]
    fn test_unscoped_enumeration_keeps_duplicates() {
        let c = curriculum();
        let ids: Vec<_> = enumerate_module_routes(&c)
            .into_iter()
            .map(|p| p.module_id)
            .collect();

        assert_eq!(
            ids,
            vec!["exception-handling", "collections", "null-safety", "collections"]
        );
    }

    #[test]
    fn test_enumerated_routes_always_resolve() {
        let c = curriculum();
        for params in enumerate_track_module_routes(&c) {
            let entry = find_module_in_track(&c, &params.track_id, &params.module_id).unwrap();
            assert_eq!(entry.module.id, params.module_id);
        }
        for params in enumerate_module_routes(&c) {
            assert!(find_module(&c, &params.module_id).is_ok());
        }
    }

    #[test]
    fn test_empty_curriculum_yields_no_routes() {
        let table = RouteTable::build(&Curriculum::default());
        assert!(table.is_empty());
        assert!(table.unscoped.is_empty());
        assert!(table.default.is_none());
    }

    #[test]
    fn test_default_route_first_module() {
        let c = curriculum();
        let entry = default_route(&c).unwrap();
        assert_eq!(entry.track.id, "java");
        assert_eq!(entry.module.id, "exception-handling");
    }

    #[test]
    fn test_default_route_empty_store() {
        assert_eq!(
            default_route(&Curriculum::default()).unwrap_err(),
            LookupError::EmptyCurriculum
        );
    }

    #[test]
    fn test_default_route_skips_vacant_first_slot() {
        let c = Curriculum::new(vec![Track::new("java", "Java")
            .with_vacant_phase()
            .with_phase(Phase::new("core", "Core", "").with_module(Module::new("a", "A", "")))]);
        assert_eq!(default_route(&c).unwrap().module.id, "a");
    }

    #[test]
    fn test_default_route_first_phase_without_modules() {
        let c = Curriculum::new(vec![Track::new("java", "Java")
            .with_phase(Phase::new("empty", "Empty", ""))
            .with_phase(Phase::new("core", "Core", "").with_module(Module::new("a", "A", "")))]);
        assert_eq!(default_route(&c).unwrap_err(), LookupError::EmptyCurriculum);

        let no_phases = Curriculum::new(vec![Track::new("java", "Java")]);
        assert_eq!(
            default_route(&no_phases).unwrap_err(),
            LookupError::EmptyCurriculum
        );
    }

    #[test]
    fn test_route_table_snapshot() {
        let c = curriculum();
        let table = RouteTable::build(&c);

        assert_eq!(table.scoped.len(), 4);
        assert_eq!(table.unscoped.len(), 4);
        assert_eq!(table.default, Some(scoped("java", "exception-handling")));

        let unique: Vec<_> = table.unique_unscoped().map(|p| p.module_id.as_str()).collect();
        assert_eq!(unique, vec!["exception-handling", "collections", "null-safety"]);
    }

    #[test]
    fn test_route_paths() {
        let params = scoped("java", "exception-handling");
        assert_eq!(params.path(), "java/exception-handling/");
        assert_eq!(params.to_string(), "/java/exception-handling/");

        let params = ModuleParams {
            module_id: "null-safety".to_string(),
        };
        assert_eq!(params.to_string(), "/modules/null-safety/");
    }
}
