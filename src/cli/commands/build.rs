//! Build command handler

use jvm_roadmap::config::Config;
use jvm_roadmap::site::{SiteBuilder, SiteOptions};
use jvm_roadmap::{error, verbose, warn};
use std::path::{Path, PathBuf};

/// Render the static site into `out_dir`, or the configured `out_dir` when omitted
pub fn run(config: &Config, out_dir: Option<&Path>) {
    let out_dir = out_dir.map_or_else(|| PathBuf::from(&config.paths.out_dir), Path::to_path_buf);
    let curriculum = super::load_or_exit(config);
    let options = SiteOptions::new(config.site.title.clone(), &config.site.base_path);

    verbose!(
        "Rendering {} modules into {} (base path {})",
        curriculum.module_count(),
        out_dir.display(),
        options.base_path
    );

    let builder = SiteBuilder::new(&curriculum, options);
    match builder.build(&out_dir) {
        Ok(summary) => {
            if summary.duplicates_skipped > 0 {
                verbose!(
                    "{} repeated /modules/ routes already written by an earlier track",
                    summary.duplicates_skipped
                );
            }
            match &summary.default_route {
                Some(route) => verbose!("Landing page redirects to {route}"),
                None => warn!("No content available; the landing page has nothing to redirect to"),
            }
            println!(
                "✓ Site written to {}: {} module pages, {} alias pages",
                out_dir.display(),
                summary.module_pages,
                summary.alias_pages
            );
        }
        Err(e) => {
            error!("Site build failed for {}: {e}", out_dir.display());
            eprintln!("✗ Failed to build site: {e}");
            std::process::exit(1);
        }
    }
}
