//! Static page generation
//!
//! [`SiteBuilder`] enumerates routes once, resolves each route against the curriculum
//! and renders it with the askama templates under `templates/`. The generated
//! output is plain HTML; diagram blocks are left for the mermaid script to lay out.

pub mod content;
pub mod pages;

use crate::core::curriculum::Curriculum;
use crate::core::models::Entry;
use crate::core::navigation::{build_sidebar, neighbours};
use crate::core::resolver::{find_module, find_module_in_track, LookupError};
use crate::core::routes::{RouteTable, TrackModuleParams, UNSCOPED_PREFIX};
use askama::Template;
use content::parse_blocks;
use pages::{IndexPage, ModulePage, NotFoundPage, QuestionGroup, TrackCard};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while writing the static site
#[derive(Debug, Error)]
pub enum BuildError {
    /// A directory or page could not be written
    #[error("failed to write {path}: {source}")]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A template failed to render
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),

    /// An enumerated route did not resolve
    #[error("route does not resolve: {0}")]
    Lookup(#[from] LookupError),

    /// The curriculum breaks identifier invariants, so its pages cannot be laid out
    #[error("curriculum has {} problem(s): {}", .0.len(), .0.join("; "))]
    Invalid(Vec<String>),
}

/// Presentation settings for generated pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Site title shown in the sidebar and page titles
    pub title: String,
    /// Prefix for every generated link; always ends with `/`
    pub base_path: String,
}

impl SiteOptions {
    /// Create options, normalising `base_path` to start and end with `/`
    #[must_use]
    pub fn new(title: impl Into<String>, base_path: &str) -> Self {
        let trimmed = base_path.trim_matches('/');
        let base_path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{trimmed}/")
        };
        Self {
            title: title.into(),
            base_path,
        }
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self::new("JVM Roadmap", "/")
    }
}

/// Counts reported after a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Track-scoped module pages written
    pub module_pages: usize,
    /// Unscoped alias pages written
    pub alias_pages: usize,
    /// Unscoped routes skipped because an earlier track already produced the path
    pub duplicates_skipped: usize,
    /// Where the index page redirects, if anywhere
    pub default_route: Option<String>,
}

/// Renders every route of a curriculum
pub struct SiteBuilder<'a> {
    curriculum: &'a Curriculum,
    routes: RouteTable,
    options: SiteOptions,
}

impl<'a> SiteBuilder<'a> {
    /// Create a builder; routes are enumerated here, once
    #[must_use]
    pub fn new(curriculum: &'a Curriculum, options: SiteOptions) -> Self {
        Self {
            curriculum,
            routes: RouteTable::build(curriculum),
            options,
        }
    }

    /// The route snapshot this builder renders
    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Render one module page.
    ///
    /// `canonical` is the scoped path for unscoped alias pages.
    ///
    /// # Errors
    /// Returns [`BuildError::Render`] if the template fails
    pub fn render_module(&self, entry: Entry<'a>, canonical: Option<String>) -> Result<String, BuildError> {
        let blocks = parse_blocks(&entry.module.content);
        let page = ModulePage {
            site_title: &self.options.title,
            base_path: &self.options.base_path,
            page_title: entry.module.title.clone(),
            sidebar: build_sidebar(self.curriculum, Some((entry.track.id.as_str(), entry.module.id.as_str()))),
            has_diagrams: blocks.iter().any(content::Block::is_diagram),
            canonical_path: canonical,
            track: entry.track,
            phase: entry.phase,
            module: entry.module,
            blocks,
            question_groups: QuestionGroup::for_module(entry.module),
            neighbours: neighbours(self.curriculum, &entry.track.id, &entry.module.id),
        };
        Ok(page.render()?)
    }

    /// Render the landing page
    ///
    /// # Errors
    /// Returns [`BuildError::Render`] if the template fails
    pub fn render_index(&self) -> Result<String, BuildError> {
        let tracks = self
            .curriculum
            .tracks
            .iter()
            .map(|track| TrackCard {
                track,
                start_path: track
                    .entries()
                    .next()
                    .map(|entry| TrackModuleParams::from(entry).path()),
                module_count: track.module_count(),
            })
            .collect();

        let page = IndexPage {
            site_title: &self.options.title,
            base_path: &self.options.base_path,
            page_title: "Home".to_string(),
            sidebar: build_sidebar(self.curriculum, None),
            has_diagrams: false,
            canonical_path: None,
            redirect_path: self.routes.default.as_ref().map(TrackModuleParams::path),
            tracks,
        };
        Ok(page.render()?)
    }

    /// Render the missing-page response for `requested`
    ///
    /// # Errors
    /// Returns [`BuildError::Render`] if the template fails
    pub fn render_not_found(&self, requested: &str) -> Result<String, BuildError> {
        let page = NotFoundPage {
            site_title: &self.options.title,
            base_path: &self.options.base_path,
            page_title: "Not Found".to_string(),
            sidebar: build_sidebar(self.curriculum, None),
            has_diagrams: false,
            canonical_path: None,
            requested: requested.to_string(),
        };
        Ok(page.render()?)
    }

    /// Render a request path the way a server in front of the site would: a
    /// resolved module page, or the missing-page response.
    ///
    /// Accepts `<track>/<module>` and `modules/<module>`, with or without slashes.
    ///
    /// # Errors
    /// Returns [`BuildError::Render`] if a template fails
    pub fn render_request(&self, request_path: &str) -> Result<(bool, String), BuildError> {
        match self.lookup_request(request_path) {
            Ok((entry, canonical)) => Ok((true, self.render_module(entry, canonical)?)),
            Err(err) => {
                crate::debug!("{request_path}: {err}");
                Ok((false, self.render_not_found(request_path)?))
            }
        }
    }

    /// Map a request path to its module and, for alias paths, the canonical path
    fn lookup_request(
        &self,
        request_path: &str,
    ) -> Result<(Entry<'a>, Option<String>), LookupError> {
        let segments: Vec<&str> = request_path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [UNSCOPED_PREFIX, module_id] => find_module(self.curriculum, module_id)
                .map(|entry| (entry, Some(TrackModuleParams::from(entry).path()))),
            [track_id, module_id] => {
                find_module_in_track(self.curriculum, track_id, module_id).map(|entry| (entry, None))
            }
            _ => Err(LookupError::NoRoute {
                path: request_path.to_string(),
            }),
        }
    }

    /// Write the whole site under `out_dir`
    ///
    /// # Errors
    /// Returns [`BuildError::Invalid`] before writing anything if the curriculum
    /// fails [`Curriculum::validate`]. Otherwise returns an error if a page cannot be
    /// rendered or written, or if an enumerated route fails to resolve
    pub fn build(&self, out_dir: &Path) -> Result<BuildSummary, BuildError> {
        self.curriculum.validate().map_err(BuildError::Invalid)?;

        let mut summary = BuildSummary {
            default_route: self.routes.default.as_ref().map(ToString::to_string),
            ..BuildSummary::default()
        };

        write_page(&out_dir.join("index.html"), &self.render_index()?)?;
        write_page(&out_dir.join("404.html"), &self.render_not_found("this address")?)?;

        for params in &self.routes.scoped {
            let entry = find_module_in_track(self.curriculum, &params.track_id, &params.module_id)?;
            let html = self.render_module(entry, None)?;
            write_page(&out_dir.join(params.path()).join("index.html"), &html)?;
            summary.module_pages += 1;
            crate::debug!("Rendered {params}");
        }

        let mut written = HashSet::new();
        for params in &self.routes.unscoped {
            if !written.insert(params.module_id.as_str()) {
                crate::debug!("Skipping repeated static path {params}");
                summary.duplicates_skipped += 1;
                continue;
            }
            let entry = find_module(self.curriculum, &params.module_id)?;
            let canonical = TrackModuleParams::from(entry).path();
            let html = self.render_module(entry, Some(canonical))?;
            write_page(&out_dir.join(params.path()).join("index.html"), &html)?;
            summary.alias_pages += 1;
        }

        crate::info!(
            "Site written to {}: {} module pages, {} alias pages",
            out_dir.display(),
            summary.module_pages,
            summary.alias_pages
        );
        Ok(summary)
    }
}

fn write_page(path: &Path, html: &str) -> Result<(), BuildError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| BuildError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, html).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
