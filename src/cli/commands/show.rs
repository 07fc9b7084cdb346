//! Show command handler

use jvm_roadmap::config::Config;
use jvm_roadmap::models::{Difficulty, Entry};
use jvm_roadmap::resolver::resolve;
use jvm_roadmap::routes::TrackModuleParams;
use jvm_roadmap::{error, verbose};
use std::fmt::Write;

/// Resolve a module and print it; exits with status 1 when it does not exist
pub fn run(config: &Config, module_id: &str, track_id: Option<&str>) {
    let curriculum = super::load_or_exit(config);

    match resolve(&curriculum, track_id, module_id) {
        Ok(entry) => {
            verbose!("Resolved {}", TrackModuleParams::from(entry));
            print!("{}", format_entry(entry));
        }
        Err(e) => {
            error!("Lookup failed: {e}");
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Plain-text rendering of a module for the terminal
fn format_entry(entry: Entry<'_>) -> String {
    let Entry {
        track,
        phase,
        module,
    } = entry;
    let mut out = String::new();

    let _ = writeln!(out, "{}", module.title);
    let _ = writeln!(out, "{}", "=".repeat(module.title.chars().count()));
    let _ = writeln!(out, "Track: {} ({})", track.title, track.id);
    let _ = writeln!(out, "Phase: {}", phase.title);
    if !module.topic.is_empty() {
        let _ = writeln!(out, "Topic: {}", module.topic);
    }

    let body = module.content.trim();
    if !body.is_empty() {
        let _ = writeln!(out, "\n{body}");
    }

    for example in &module.code_examples {
        let _ = writeln!(out, "\n--- {} [{}]", example.title, example.language);
        let _ = writeln!(out, "{}", example.code.trim_end());
    }

    if !module.key_points.is_empty() {
        let _ = writeln!(out, "\nKey points:");
        for point in &module.key_points {
            let _ = writeln!(out, "  * {point}");
        }
    }

    for difficulty in Difficulty::ALL {
        let mut questions = module.questions_of(difficulty).peekable();
        if questions.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\nInterview questions ({difficulty}):");
        for q in questions {
            let _ = writeln!(out, "  Q: {}", q.question);
            let _ = writeln!(out, "  A: {}", q.answer);
        }
    }

    out
}
