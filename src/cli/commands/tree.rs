//! Tree command handler

use jvm_roadmap::config::Config;
use jvm_roadmap::navigation::{build_sidebar, render_text_tree};

/// Print the sidebar tree as indented text
pub fn run(config: &Config) {
    let curriculum = super::load_or_exit(config);
    let sidebar = build_sidebar(&curriculum, None);

    if sidebar.is_empty() {
        println!("(no tracks)");
    } else {
        print!("{}", render_text_tree(&sidebar));
    }
}
