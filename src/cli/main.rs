//! Command-line interface entry point for `jvm-roadmap`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use jvm_roadmap::config::Config;
use jvm_roadmap::info;
use jvm_roadmap::logger::{init_file_logging, set_debug, set_level, set_verbose, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        set_debug(true);
    }

    let verbose = args.verbose || config.logging.verbose;
    set_verbose(verbose);
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Show { module, track } => {
            commands::show::run(&config, &module, track.as_deref());
        }
        Command::Routes { unscoped } => commands::routes::run(&config, unscoped),
        Command::Default => commands::routes::run_default(&config),
        Command::Tree => commands::tree::run(&config),
        Command::Check => commands::check::run(&config),
        Command::Build { out_dir } => commands::build::run(&config, out_dir.as_deref()),
    }
}
