//! CLI argument definitions for `jvm-roadmap`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use jvm_roadmap::config::ConfigOverrides;
use jvm_roadmap::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `title`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print a module.
    ///
    /// Without `--track` the first module with that id in curriculum order is shown.
    Show {
        /// Module id (e.g., `exception-handling`)
        #[arg(value_name = "MODULE")]
        module: String,

        /// Restrict the lookup to one track
        #[arg(short, long, value_name = "TRACK")]
        track: Option<String>,
    },
    /// List every pre-rendered route.
    Routes {
        /// List `/modules/<module>/` routes instead of `/<track>/<module>/`
        #[arg(long)]
        unscoped: bool,
    },
    /// Print the route the landing page redirects to.
    Default,
    /// Print the navigation tree.
    Tree,
    /// Validate the curriculum data.
    ///
    /// Reports every identifier problem and warns about module ids shared by tracks.
    Check,
    /// Render the static site.
    Build {
        /// Output directory (optional; defaults to config `out_dir` when omitted)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "jvm-roadmap",
    about = "JVM learning roadmap site generator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config site title
    #[arg(long = "config-title", value_name = "TITLE")]
    pub config_title: Option<String>,

    /// Override config base path
    #[arg(long = "config-base-path", value_name = "PATH")]
    pub config_base_path: Option<String>,

    /// Override config base path (short form)
    #[arg(long = "base-path", value_name = "PATH")]
    pub base_path: Option<String>,

    /// Override config curriculum data file
    #[arg(long = "config-curriculum-file", value_name = "FILE")]
    pub config_curriculum_file: Option<PathBuf>,

    /// Override config curriculum data file (short form)
    #[arg(long = "curriculum", value_name = "FILE")]
    pub curriculum: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: Option<&PathBuf>) -> Option<String> {
    path.map(|p| p.to_string_lossy().to_string())
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--curriculum`) take precedence over long-form flags
    /// (e.g., `--config-curriculum-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: path_string(self.config_log_file.as_ref()),
            verbose: self.config_verbose,
            title: self.config_title.clone(),
            base_path: self
                .base_path
                .clone()
                .or_else(|| self.config_base_path.clone()),
            curriculum_file: path_string(self.curriculum.as_ref())
                .or_else(|| path_string(self.config_curriculum_file.as_ref())),
            out_dir: path_string(self.out_dir.as_ref())
                .or_else(|| path_string(self.config_out_dir.as_ref())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_title: None,
            config_base_path: None,
            base_path: None,
            config_curriculum_file: None,
            curriculum: None,
            config_out_dir: None,
            out_dir: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.title.is_none());
        assert!(overrides.base_path.is_none());
        assert!(overrides.curriculum_file.is_none());
        assert!(overrides.out_dir.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let cli = Cli {
            config_level: Some(LogLevelArg::Debug),
            config_log_file: Some(PathBuf::from("/tmp/test.log")),
            config_verbose: Some(true),
            config_title: Some("Roadmap".to_string()),
            base_path: Some("/learn/".to_string()),
            curriculum: Some(PathBuf::from("data.toml")),
            out_dir: Some(PathBuf::from("/output")),
            ..bare(Command::Tree)
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.title, Some("Roadmap".to_string()));
        assert_eq!(overrides.base_path, Some("/learn/".to_string()));
        assert_eq!(overrides.curriculum_file, Some("data.toml".to_string()));
        assert_eq!(overrides.out_dir, Some("/output".to_string()));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = Cli {
            config_base_path: Some("/long/".to_string()),
            base_path: Some("/short/".to_string()),
            config_curriculum_file: Some(PathBuf::from("long.toml")),
            curriculum: Some(PathBuf::from("short.toml")),
            config_out_dir: Some(PathBuf::from("/long/out")),
            out_dir: Some(PathBuf::from("/short/out")),
            ..bare(Command::Default)
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.base_path, Some("/short/".to_string()));
        assert_eq!(overrides.curriculum_file, Some("short.toml".to_string()));
        assert_eq!(overrides.out_dir, Some("/short/out".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = Cli {
            config_base_path: Some("/long/".to_string()),
            config_curriculum_file: Some(PathBuf::from("long.toml")),
            config_out_dir: Some(PathBuf::from("/long/out")),
            ..bare(Command::Check)
        };

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.base_path, Some("/long/".to_string()));
        assert_eq!(overrides.curriculum_file, Some("long.toml".to_string()));
        assert_eq!(overrides.out_dir, Some("/long/out".to_string()));
    }

    #[test]
    fn test_parse_show_with_track() {
        let cli = Cli::parse_from(["jvm-roadmap", "show", "null-safety", "--track", "kotlin"]);
        match cli.command {
            Command::Show { module, track } => {
                assert_eq!(module, "null-safety");
                assert_eq!(track.as_deref(), Some("kotlin"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_before_subcommand() {
        let cli = Cli::parse_from([
            "jvm-roadmap",
            "--debug",
            "--curriculum",
            "custom.toml",
            "routes",
            "--unscoped",
        ]);
        assert!(cli.debug_flag);
        assert_eq!(cli.curriculum, Some(PathBuf::from("custom.toml")));
        assert!(matches!(cli.command, Command::Routes { unscoped: true }));
    }
}
