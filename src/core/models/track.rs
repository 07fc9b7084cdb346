//! Track model and the shared traversal over its phases and modules

use super::{Module, Phase};
use serde::{Deserialize, Deserializer};

/// Top-level curriculum subject (e.g., Java, Kotlin)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    /// Unique identifier used in routes
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description shown on the index page
    #[serde(default)]
    pub description: String,

    /// Ordered phase slots. A slot may be vacant (`{}` in the data file).
    #[serde(default, deserialize_with = "sparse_phases")]
    pub phases: Vec<Option<Phase>>,
}

/// One step of the traversal: a module together with the phase and track owning it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Owning track
    pub track: &'a Track,
    /// Owning phase
    pub phase: &'a Phase,
    /// The module itself
    pub module: &'a Module,
}

impl Track {
    /// Create a track without phases
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            phases: Vec::new(),
        }
    }

    /// Append a phase, builder style
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phases.push(Some(phase));
        self
    }

    /// Append a vacant phase slot, builder style
    #[must_use]
    pub fn with_vacant_phase(mut self) -> Self {
        self.phases.push(None);
        self
    }

    /// Present phases in order; vacant slots are skipped
    pub fn phases(&self) -> impl Iterator<Item = &Phase> + Clone {
        self.phases.iter().flatten()
    }

    /// Every module of this track in phase order, paired with its owners.
    ///
    /// The iterator is lazy and cheap to clone, so callers can restart it.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> + Clone {
        self.phases().flat_map(move |phase| {
            phase
                .modules
                .iter()
                .map(move |module| Entry { track: self, phase, module })
        })
    }

    /// Number of modules across all present phases
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.phases().map(|p| p.modules.len()).sum()
    }
}

/// Phase slot as written in the data file: a full phase or an empty table
#[derive(Deserialize)]
#[serde(untagged)]
enum PhaseSlot {
    Present(Phase),
    Vacant(Vacant),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Vacant {}

fn sparse_phases<'de, D>(deserializer: D) -> Result<Vec<Option<Phase>>, D::Error>
where
    D: Deserializer<'de>,
{
    let slots = Vec::<PhaseSlot>::deserialize(deserializer)?;
    Ok(slots
        .into_iter()
        .map(|slot| match slot {
            PhaseSlot::Present(phase) => Some(phase),
            PhaseSlot::Vacant(Vacant {}) => None,
        })
        .collect())
}
