//! Integration tests for static site generation

use jvm_roadmap::curriculum::Curriculum;
use jvm_roadmap::site::{BuildError, SiteBuilder, SiteOptions};
use std::fs;
use tempfile::TempDir;

const SHARED_IDS: &str = r#"
[[tracks]]
id = "java"
title = "Java"

[[tracks.phases]]
id = "core"
title = "Core"

[[tracks.phases.modules]]
id = "exception-handling"
title = "Exception Handling"
content = """
# Hierarchy
```mermaid
graph TD
  Throwable --> Exception
```
"""

[[tracks.phases.modules]]
id = "generics"
title = "Java Generics"

[[tracks]]
id = "kotlin"
title = "Kotlin"

[[tracks.phases]]
id = "core"
title = "Core"

[[tracks.phases.modules]]
id = "null-safety"
title = "Null Safety"

[[tracks.phases.modules]]
id = "generics"
title = "Kotlin Generics"
"#;

fn read(dir: &TempDir, rel: &str) -> String {
    fs::read_to_string(dir.path().join(rel)).unwrap_or_else(|e| panic!("{rel}: {e}"))
}

#[test]
fn build_writes_every_route() {
    let curriculum = Curriculum::from_toml(SHARED_IDS).unwrap();
    let out = TempDir::new().expect("Failed to create temp dir");

    let summary = SiteBuilder::new(&curriculum, SiteOptions::default())
        .build(out.path())
        .expect("build should succeed");

    assert_eq!(summary.module_pages, 4);
    assert_eq!(summary.alias_pages, 3);
    assert_eq!(summary.duplicates_skipped, 1);
    assert_eq!(
        summary.default_route.as_deref(),
        Some("/java/exception-handling/")
    );

    for rel in [
        "index.html",
        "404.html",
        "java/exception-handling/index.html",
        "java/generics/index.html",
        "kotlin/null-safety/index.html",
        "kotlin/generics/index.html",
        "modules/exception-handling/index.html",
        "modules/null-safety/index.html",
        "modules/generics/index.html",
    ] {
        assert!(out.path().join(rel).is_file(), "missing {rel}");
    }
}

#[test]
fn alias_page_for_shared_id_shows_first_track() {
    let curriculum = Curriculum::from_toml(SHARED_IDS).unwrap();
    let out = TempDir::new().expect("Failed to create temp dir");
    SiteBuilder::new(&curriculum, SiteOptions::default())
        .build(out.path())
        .unwrap();

    let alias = read(&out, "modules/generics/index.html");
    assert!(alias.contains("<h1>Java Generics</h1>"));
    assert!(alias.contains("rel=\"canonical\" href=\"/java/generics/\""));

    let scoped = read(&out, "kotlin/generics/index.html");
    assert!(scoped.contains("<h1>Kotlin Generics</h1>"));
    assert!(!scoped.contains("rel=\"canonical\""));
}

#[test]
fn pages_link_under_base_path() {
    let curriculum = Curriculum::from_toml(SHARED_IDS).unwrap();
    let out = TempDir::new().expect("Failed to create temp dir");
    SiteBuilder::new(&curriculum, SiteOptions::new("Roadmap", "roadmap"))
        .build(out.path())
        .unwrap();

    let index = read(&out, "index.html");
    assert!(index.contains("url=/roadmap/java/exception-handling/"));

    let page = read(&out, "java/exception-handling/index.html");
    assert!(page.contains("<pre class=\"mermaid\">"));
    assert!(page.contains("href=\"/roadmap/java/generics/\""));
    assert!(page.contains("href=\"/roadmap/kotlin/null-safety/\""));

    let missing = read(&out, "404.html");
    assert!(missing.contains("Page not found"));
}

#[test]
fn empty_curriculum_builds_placeholder_site() {
    let curriculum = Curriculum::default();
    let out = TempDir::new().expect("Failed to create temp dir");

    let summary = SiteBuilder::new(&curriculum, SiteOptions::default())
        .build(out.path())
        .unwrap();

    assert_eq!(summary.module_pages, 0);
    assert_eq!(summary.alias_pages, 0);
    assert!(summary.default_route.is_none());
    assert!(read(&out, "index.html").contains("No content available"));
    assert!(out.path().join("404.html").is_file());
}

#[test]
fn builtin_curriculum_builds() {
    let curriculum = Curriculum::builtin();
    let out = TempDir::new().expect("Failed to create temp dir");

    let summary = SiteBuilder::new(curriculum, SiteOptions::default())
        .build(out.path())
        .unwrap();

    assert_eq!(summary.module_pages, curriculum.module_count());
    assert!(out
        .path()
        .join("kotlin/null-safety/index.html")
        .is_file());
    assert!(read(&out, "java/exception-handling/index.html").contains("difficulty-hell"));
}

#[test]
fn build_refuses_ids_that_escape_out_dir() {
    let toml = r#"
[[tracks]]
id = "java"
title = "Java"

[[tracks.phases]]
id = "core"
title = "Core"

[[tracks.phases.modules]]
id = "../../escaped"
title = "Escaped"
"#;
    let curriculum = Curriculum::from_toml(toml).unwrap();
    assert!(curriculum.validate().is_err());

    let root = TempDir::new().expect("Failed to create temp dir");
    let out_dir = root.path().join("a").join("b");
    let err = SiteBuilder::new(&curriculum, SiteOptions::default())
        .build(&out_dir)
        .unwrap_err();

    assert!(matches!(err, BuildError::Invalid(ref problems) if problems.len() == 1));
    assert!(!root.path().join("escaped").exists());
    assert!(!out_dir.exists(), "nothing is written for an invalid curriculum");
}

#[test]
fn track_named_modules_is_rejected_before_it_shadows_aliases() {
    let toml = r#"
[[tracks]]
id = "java"
title = "Java"

[[tracks.phases]]
id = "core"
title = "Core"

[[tracks.phases.modules]]
id = "x"
title = "Java X"

[[tracks]]
id = "modules"
title = "Modules"

[[tracks.phases]]
id = "core"
title = "Core"

[[tracks.phases.modules]]
id = "x"
title = "Modules X"
"#;
    let curriculum = Curriculum::from_toml(toml).unwrap();
    let problems = curriculum.validate().unwrap_err();
    assert!(problems[0].contains("reserved"), "{problems:?}");

    let out = TempDir::new().expect("Failed to create temp dir");
    let err = SiteBuilder::new(&curriculum, SiteOptions::default())
        .build(out.path())
        .unwrap_err();
    assert!(matches!(err, BuildError::Invalid(_)));
    assert!(!out.path().join("modules/x/index.html").exists());
}
