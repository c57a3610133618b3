// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::engine::{DEFAULT_DEBOUNCE, DEFAULT_POLL_INTERVAL, RuntimeOptions};
use crate::watch::patterns::{DEFAULT_EXTENSIONS, FileFilter};

/// Raw configuration as read from a TOML file, before validation.
///
/// ```toml
/// [watch]
/// root = "src"
/// extensions = [".lua", ".luau"]
/// exclude = ["vendor/**"]
///
/// [timing]
/// debounce_ms = 300
/// poll_ms = 100
/// ```
///
/// All sections are optional and have the defaults shown above (with an
/// empty `exclude`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub watch: WatchSection,

    #[serde(default)]
    pub timing: TimingSection,

    /// Directory a relative `watch.root` is resolved against. Set by the
    /// loader to the config file's directory; `None` means the working
    /// directory.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// `[watch]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchSection {
    /// Directory scanned recursively.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Case-sensitive filename suffixes that are tracked.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Globs (relative to `root`) for files that are never tracked.
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from("src")
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            root: default_root(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// `[timing]` section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TimingSection {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE.as_millis() as u64
}

fn default_poll_ms() -> u64 {
    DEFAULT_POLL_INTERVAL.as_millis() as u64
}

impl Default for TimingSection {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            poll_ms: default_poll_ms(),
        }
    }
}

/// Validated configuration. Obtain one via `ConfigFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    watch: WatchSection,
    timing: TimingSection,
    base_dir: Option<PathBuf>,
    filter: FileFilter,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(raw: RawConfigFile, filter: FileFilter) -> Self {
        Self {
            watch: raw.watch,
            timing: raw.timing,
            base_dir: raw.base_dir,
            filter,
        }
    }

    pub fn watch(&self) -> &WatchSection {
        &self.watch
    }

    pub fn timing(&self) -> &TimingSection {
        &self.timing
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// The watch root, resolved against the config file's directory when
    /// it is relative.
    pub fn root_path(&self) -> PathBuf {
        let root = &self.watch.root;
        match &self.base_dir {
            Some(base) if root.is_relative() && !base.as_os_str().is_empty() => base.join(root),
            _ => root.clone(),
        }
    }

    pub fn runtime_options(&self) -> RuntimeOptions {
        RuntimeOptions {
            debounce: Duration::from_millis(self.timing.debounce_ms),
            poll_interval: Duration::from_millis(self.timing.poll_ms),
        }
    }
}
