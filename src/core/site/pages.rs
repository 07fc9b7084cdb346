//! Askama page templates

use super::content::Block;
use crate::core::models::{Difficulty, InterviewQuestion, Module, Phase, Track};
use crate::core::navigation::{NavTrack, Neighbours};
use askama::Template;

/// Interview questions of one difficulty
#[derive(Debug, Clone)]
pub struct QuestionGroup<'a> {
    /// Shared difficulty
    pub difficulty: Difficulty,
    /// Questions in their original order
    pub questions: Vec<&'a InterviewQuestion>,
}

impl<'a> QuestionGroup<'a> {
    /// Group a module's questions from easiest to hardest, dropping empty groups
    #[must_use]
    pub fn for_module(module: &'a Module) -> Vec<Self> {
        Difficulty::ALL
            .into_iter()
            .map(|difficulty| Self {
                difficulty,
                questions: module.questions_of(difficulty).collect(),
            })
            .filter(|group| !group.questions.is_empty())
            .collect()
    }
}

/// Summary card of a track on the index page
#[derive(Debug, Clone)]
pub struct TrackCard<'a> {
    /// The track
    pub track: &'a Track,
    /// Path of its first module, if it has any
    pub start_path: Option<String>,
    /// Number of modules
    pub module_count: usize,
}

/// A lesson page
#[derive(Template)]
#[template(path = "module.html")]
pub struct ModulePage<'a> {
    /// Site title from configuration
    pub site_title: &'a str,
    /// Prefix for every link (ends with `/`)
    pub base_path: &'a str,
    /// Title shown in the browser tab
    pub page_title: String,
    /// Sidebar tree with the current module active
    pub sidebar: Vec<NavTrack>,
    /// Whether the page needs the diagram script
    pub has_diagrams: bool,
    /// Scoped path of this module, for unscoped alias pages
    pub canonical_path: Option<String>,
    /// Owning track
    pub track: &'a Track,
    /// Owning phase
    pub phase: &'a Phase,
    /// The module
    pub module: &'a Module,
    /// Parsed content body
    pub blocks: Vec<Block>,
    /// Interview questions grouped by difficulty
    pub question_groups: Vec<QuestionGroup<'a>>,
    /// Previous/next links
    pub neighbours: Neighbours,
}

/// Landing page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    /// Site title from configuration
    pub site_title: &'a str,
    /// Prefix for every link (ends with `/`)
    pub base_path: &'a str,
    /// Title shown in the browser tab
    pub page_title: String,
    /// Sidebar tree, nothing active
    pub sidebar: Vec<NavTrack>,
    /// Always `false`; the layout expects the field
    pub has_diagrams: bool,
    /// Always `None`; the layout expects the field
    pub canonical_path: Option<String>,
    /// Default route to redirect to, if there is content
    pub redirect_path: Option<String>,
    /// One card per track
    pub tracks: Vec<TrackCard<'a>>,
}

/// Missing-page response
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage<'a> {
    /// Site title from configuration
    pub site_title: &'a str,
    /// Prefix for every link (ends with `/`)
    pub base_path: &'a str,
    /// Title shown in the browser tab
    pub page_title: String,
    /// Sidebar tree, nothing active
    pub sidebar: Vec<NavTrack>,
    /// Always `false`; the layout expects the field
    pub has_diagrams: bool,
    /// Always `None`; the layout expects the field
    pub canonical_path: Option<String>,
    /// What was requested, shown to the reader
    pub requested: String,
}
