//! Curriculum data store
//!
//! The store is an ordered list of tracks loaded once from TOML and never mutated
//! afterwards. [`Curriculum::entries`] is the single traversal used by the resolver,
//! the route enumerator and navigation.

use crate::core::models::{Entry, Track};
use crate::core::routes::UNSCOPED_PREFIX;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

/// Curriculum compiled into the binary
const BUILTIN_CURRICULUM: &str = include_str!("../../assets/curriculum.toml");

static BUILTIN: LazyLock<Curriculum> = LazyLock::new(|| {
    Curriculum::from_toml(BUILTIN_CURRICULUM).expect("Failed to parse compiled-in curriculum")
});

/// Errors raised while loading a curriculum data file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read
    #[error("failed to read curriculum {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid TOML or does not match the curriculum shape
    #[error("invalid curriculum data: {0}")]
    Parse(#[from] toml::de::Error),

    /// The data parsed but breaks identifier invariants
    #[error("curriculum has {} problem(s): {}", .problems.len(), .problems.join("; "))]
    Invalid {
        /// Every problem found, in traversal order
        problems: Vec<String>,
    },
}

const INVALID_SEGMENT: &str = "id may only contain ASCII letters, digits, '-' and '_'";

/// Whether `id` can be used verbatim as one URL path segment and directory name
fn is_path_segment(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Read-only hierarchy of tracks, phases and modules
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Curriculum {
    /// Tracks in display order
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Curriculum {
    /// Build a curriculum from already constructed tracks
    #[must_use]
    pub const fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    /// The curriculum bundled with the binary, parsed on first use
    ///
    /// # Panics
    /// Panics if the embedded data is invalid. It is compiled in and covered by tests,
    /// so this should never happen in practice.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parse a curriculum from a TOML string
    ///
    /// # Errors
    /// Returns [`LoadError::Parse`] if the TOML is malformed or has the wrong shape
    pub fn from_toml(toml_str: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read and parse a curriculum data file
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] if the file cannot be read, or [`LoadError::Parse`]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Returns `true` when there are no tracks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Find a track by id
    #[must_use]
    pub fn track(&self, track_id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == track_id)
    }

    /// Every module in traversal order: tracks, then phases, then modules.
    ///
    /// Vacant phase slots are skipped. The iterator is lazy and can be cloned to
    /// restart the walk.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + Clone {
        self.tracks.iter().flat_map(Track::entries)
    }

    /// Total number of modules across all tracks
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.tracks.iter().map(Track::module_count).sum()
    }

    /// Check identifier invariants
    ///
    /// Every id must be non-empty. Track and module ids become URL path segments, so
    /// they may only contain ASCII letters, digits, `-` and `_`, and no track may be
    /// called `modules`. Track ids are globally unique. Phase and module ids are
    /// unique within their track. A module id reused by another track is allowed;
    /// see [`cross_track_duplicates`](Self::cross_track_duplicates).
    ///
    /// # Errors
    /// Returns `Err` with one message per problem found
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        let mut track_ids = HashSet::new();

        for (index, track) in self.tracks.iter().enumerate() {
            if track.id.is_empty() {
                problems.push(format!("Track #{}: empty id", index + 1));
            } else if !is_path_segment(&track.id) {
                problems.push(format!("Track '{}': {INVALID_SEGMENT}", track.id));
            } else if track.id == UNSCOPED_PREFIX {
                problems.push(format!(
                    "Track '{}': id is reserved for unscoped module pages",
                    track.id
                ));
            } else if !track_ids.insert(track.id.as_str()) {
                problems.push(format!("Track '{}': duplicate track id", track.id));
            }

            let mut phase_ids = HashSet::new();
            for phase in track.phases() {
                if phase.id.is_empty() {
                    problems.push(format!("Track '{}': phase with empty id", track.id));
                } else if !phase_ids.insert(phase.id.as_str()) {
                    problems.push(format!(
                        "Track '{}': duplicate phase id '{}'",
                        track.id, phase.id
                    ));
                }
            }

            let mut module_ids = HashSet::new();
            for entry in track.entries() {
                if entry.module.id.is_empty() {
                    problems.push(format!(
                        "Track '{}', phase '{}': module with empty id",
                        track.id, entry.phase.id
                    ));
                } else if !is_path_segment(&entry.module.id) {
                    problems.push(format!(
                        "Track '{}': module '{}': {INVALID_SEGMENT}",
                        track.id, entry.module.id
                    ));
                } else if !module_ids.insert(entry.module.id.as_str()) {
                    problems.push(format!(
                        "Track '{}': duplicate module id '{}'",
                        track.id, entry.module.id
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Consume the curriculum, returning it only if [`validate`](Self::validate) passes
    ///
    /// # Errors
    /// Returns [`LoadError::Invalid`] with every problem found
    pub fn validated(self) -> Result<Self, LoadError> {
        match self.validate() {
            Ok(()) => Ok(self),
            Err(problems) => Err(LoadError::Invalid { problems }),
        }
    }

    /// Module ids that appear in more than one track, with the tracks in order.
    ///
    /// Unscoped lookups of these ids resolve to the first track listed.
    #[must_use]
    pub fn cross_track_duplicates(&self) -> Vec<(String, Vec<String>)> {
        let mut owners: HashMap<&str, Vec<String>> = HashMap::new();
        let mut order = Vec::new();

        for track in &self.tracks {
            let mut seen_here = HashSet::new();
            for entry in track.entries() {
                let id = entry.module.id.as_str();
                if !seen_here.insert(id) {
                    continue;
                }
                let tracks = owners.entry(id).or_default();
                if tracks.is_empty() {
                    order.push(id);
                }
                tracks.push(track.id.clone());
            }
        }

        order
            .into_iter()
            .filter_map(|id| {
                let tracks = owners.remove(id)?;
                (tracks.len() > 1).then(|| (id.to_string(), tracks))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Module, Phase};

    fn two_tracks() -> Curriculum {
        Curriculum::new(vec![
            Track::new("java", "Java").with_phase(
                Phase::new("p1", "Phase 1", "")
                    .with_module(Module::new("collections", "Collections", ""))
                    .with_module(Module::new("exception-handling", "Exceptions", "")),
            ),
            Track::new("kotlin", "Kotlin")
                .with_vacant_phase()
                .with_phase(
                    Phase::new("p1", "Phase 1", "")
                        .with_module(Module::new("null-safety", "Null Safety", ""))
                        .with_module(Module::new("collections", "Collections", "")),
                ),
        ])
    }

    #[test]
    fn test_entries_follow_track_then_phase_order() {
        let curriculum = two_tracks();
        let pairs: Vec<_> = curriculum
            .entries()
            .map(|e| (e.track.id.as_str(), e.module.id.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("java", "collections"),
                ("java", "exception-handling"),
                ("kotlin", "null-safety"),
                ("kotlin", "collections"),
            ]
        );
        assert_eq!(curriculum.module_count(), 4);
    }

    #[test]
    fn test_empty_curriculum() {
        let curriculum = Curriculum::default();
        assert!(curriculum.is_empty());
        assert_eq!(curriculum.entries().count(), 0);
        assert!(curriculum.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_cross_track_duplicates() {
        let curriculum = two_tracks();
        assert!(curriculum.validate().is_ok());
        assert_eq!(
            curriculum.cross_track_duplicates(),
            vec![(
                "collections".to_string(),
                vec!["java".to_string(), "kotlin".to_string()]
            )]
        );
    }

    #[test]
    fn test_validate_reports_all_problems() {
        let curriculum = Curriculum::new(vec![
            Track::new("java", "Java")
                .with_phase(
                    Phase::new("p1", "Phase 1", "")
                        .with_module(Module::new("streams", "Streams", ""))
                        .with_module(Module::new("", "Untitled", "")),
                )
                .with_phase(
                    Phase::new("p1", "Again", "").with_module(Module::new("streams", "Dup", "")),
                ),
            Track::new("java", "Java again"),
        ]);

        let problems = curriculum.validate().unwrap_err();
        assert_eq!(problems.len(), 4, "{problems:?}");
        assert!(problems.iter().any(|p| p.contains("duplicate track id")));
        assert!(problems.iter().any(|p| p.contains("duplicate phase id 'p1'")));
        assert!(problems.iter().any(|p| p.contains("duplicate module id 'streams'")));
        assert!(problems.iter().any(|p| p.contains("module with empty id")));

        assert!(matches!(
            curriculum.validated(),
            Err(LoadError::Invalid { problems }) if problems.len() == 4
        ));
    }

    #[test]
    fn test_validate_rejects_ids_unusable_in_paths() {
        let curriculum = Curriculum::new(vec![
            Track::new("java", "Java").with_phase(
                Phase::new("p1", "Phase 1", "")
                    .with_module(Module::new("../../escaped", "Escape", ""))
                    .with_module(Module::new("a/b", "Nested", ""))
                    .with_module(Module::new("generics_2", "Generics", "")),
            ),
            Track::new("java tools", "Tools"),
        ]);

        let problems = curriculum.validate().unwrap_err();
        assert_eq!(problems.len(), 3, "{problems:?}");
        assert!(problems.iter().any(|p| p.contains("'../../escaped'")));
        assert!(problems.iter().any(|p| p.contains("'a/b'")));
        assert!(problems.iter().any(|p| p.starts_with("Track 'java tools'")));
    }

    #[test]
    fn test_validate_rejects_track_named_like_alias_prefix() {
        let curriculum = Curriculum::new(vec![
            Track::new("java", "Java")
                .with_phase(Phase::new("p1", "P", "").with_module(Module::new("x", "Java X", ""))),
            Track::new("modules", "Modules")
                .with_phase(Phase::new("p1", "P", "").with_module(Module::new("x", "Modules X", ""))),
        ]);

        let problems = curriculum.validate().unwrap_err();
        assert_eq!(problems, vec!["Track 'modules': id is reserved for unscoped module pages"]);
    }

    #[test]
    fn test_path_segment() {
        assert!(is_path_segment("exception-handling"));
        assert!(is_path_segment("Java_21"));
        assert!(!is_path_segment(""));
        assert!(!is_path_segment(".."));
        assert!(!is_path_segment("null safety"));
        assert!(!is_path_segment("ünicode"));
    }

    #[test]
    fn test_from_toml_nested_tables() {
        let curriculum = Curriculum::from_toml(
            r#"
[[tracks]]
id = "spring"
title = "Spring"

[[tracks.phases]]
id = "boot"
title = "Spring Boot"
goal = "Ship a REST service"

[[tracks.phases.modules]]
id = "auto-configuration"
title = "Auto-configuration"
topic = "Conditional beans"
key_points = ["@ConditionalOnClass", "spring.factories"]
"#,
        )
        .unwrap();

        assert_eq!(curriculum.tracks.len(), 1);
        let entry = curriculum.entries().next().unwrap();
        assert_eq!(entry.phase.goal, "Ship a REST service");
        assert_eq!(entry.module.key_points.len(), 2);
    }

    #[test]
    fn test_from_toml_rejects_wrong_shape() {
        let result = Curriculum::from_toml("[[tracks]]\ntitle = \"Missing id\"");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = Curriculum::from_path("does/not/exist.toml");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_builtin_is_valid() {
        let curriculum = Curriculum::builtin();
        assert!(!curriculum.is_empty());
        assert!(curriculum.validate().is_ok(), "{:?}", curriculum.validate());
        assert!(curriculum.track("java").is_some());
        assert!(curriculum.track("kotlin").is_some());
    }
}
