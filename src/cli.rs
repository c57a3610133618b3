// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `bundlewatch`.
///
/// Values given here override the config file.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "bundlewatch",
    version,
    about = "Poll a source tree and exit 0 once a debounced change should trigger a rebuild.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory to watch (relative to the working directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to a config file (TOML).
    ///
    /// Default: `Bundlewatch.toml` in the working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Tracked filename suffix, e.g. `.lua`. Repeat to track several;
    /// replaces the configured list.
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Glob (relative to the root) of files to ignore. Repeatable; appended
    /// to the configured list.
    #[arg(long, value_name = "GLOB")]
    pub exclude: Vec<String>,

    /// Quiet period in milliseconds before a change triggers a rebuild.
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Pause between scans in milliseconds.
    #[arg(long, value_name = "MS")]
    pub poll_ms: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BUNDLEWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the effective settings and tracked files, then exit without
    /// watching.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeatable_flags() {
        let args = CliArgs::try_parse_from([
            "bundlewatch",
            "--root",
            "game/src",
            "--ext",
            ".lua",
            "--ext",
            ".luau",
            "--exclude",
            "vendor/**",
            "--debounce-ms",
            "500",
        ])
        .unwrap();

        assert_eq!(args.root, Some(PathBuf::from("game/src")));
        assert_eq!(args.extensions, vec![".lua", ".luau"]);
        assert_eq!(args.exclude, vec!["vendor/**"]);
        assert_eq!(args.debounce_ms, Some(500));
        assert_eq!(args.poll_ms, None);
        assert!(!args.dry_run);
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let args = CliArgs::try_parse_from(["bundlewatch"]).unwrap();
        assert!(args.root.is_none());
        assert!(args.extensions.is_empty());
        assert!(args.config.is_none());
    }
}
