// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod logging;
pub mod types;
pub mod watch;

use std::sync::Arc;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::{ConfigFile, RawConfigFile, load_raw_or_default};
use crate::engine::{RebuildSignal, Runtime};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::watch::{Snapshot, Snapshotter};

/// How a successful run ended.
#[derive(Debug)]
pub enum Outcome {
    /// The debounce timer fired; the caller should announce it and exit 0.
    Rebuild(RebuildSignal),
    /// `--dry-run`: settings and tracked files were printed, nothing watched.
    DryRun,
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading and CLI overrides
/// - the snapshotter over the real filesystem
/// - the poll/debounce runtime
pub async fn run(args: CliArgs) -> Result<Outcome> {
    let cfg = resolve_config(&args)?;
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);

    if args.dry_run {
        let snapshot = snapshotter_for(&cfg, fs).scan()?;
        print_dry_run(&cfg, &snapshot);
        return Ok(Outcome::DryRun);
    }

    watch_until_rebuild(&cfg, fs).await.map(Outcome::Rebuild)
}

/// Load the config file (or defaults), apply CLI overrides and validate.
pub fn resolve_config(args: &CliArgs) -> Result<ConfigFile> {
    let mut raw = load_raw_or_default(args.config.as_deref())?;
    apply_cli_overrides(&mut raw, args);
    ConfigFile::try_from(raw)
}

/// Merge command-line values into a raw config.
///
/// `--root` is taken relative to the working directory, so it clears the
/// config file's base directory. `--ext` replaces the extension list,
/// `--exclude` appends to it.
pub fn apply_cli_overrides(raw: &mut RawConfigFile, args: &CliArgs) {
    if let Some(root) = &args.root {
        raw.watch.root = root.clone();
        raw.base_dir = None;
    }
    if !args.extensions.is_empty() {
        raw.watch.extensions = args.extensions.clone();
    }
    raw.watch.exclude.extend(args.exclude.iter().cloned());
    if let Some(ms) = args.debounce_ms {
        raw.timing.debounce_ms = ms;
    }
    if let Some(ms) = args.poll_ms {
        raw.timing.poll_ms = ms;
    }
}

/// Poll `cfg`'s root through `fs` until a debounced change fires.
pub async fn watch_until_rebuild(
    cfg: &ConfigFile,
    fs: Arc<dyn FileSystem>,
) -> Result<RebuildSignal> {
    let runtime = Runtime::new(snapshotter_for(cfg, fs), cfg.runtime_options());
    runtime.run().await
}

fn snapshotter_for(cfg: &ConfigFile, fs: Arc<dyn FileSystem>) -> Snapshotter {
    Snapshotter::new(fs, cfg.root_path(), cfg.filter().clone())
}

fn print_dry_run(cfg: &ConfigFile, snapshot: &Snapshot) {
    println!("bundlewatch dry-run");
    println!("  root = {}", cfg.root_path().display());
    println!("  extensions = {:?}", cfg.watch().extensions);
    if !cfg.watch().exclude.is_empty() {
        println!("  exclude = {:?}", cfg.watch().exclude);
    }
    println!("  debounce_ms = {}", cfg.timing().debounce_ms);
    println!("  poll_ms = {}", cfg.timing().poll_ms);
    println!();

    println!("tracked files ({}):", snapshot.len());
    for (path, fingerprint) in snapshot.iter() {
        println!("  - {path}  {}", &fingerprint.as_hex()[..12]);
    }

    debug!("dry-run complete (no watching)");
}
