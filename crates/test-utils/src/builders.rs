#![allow(dead_code)]

use std::path::PathBuf;

use bundlewatch::config::{ConfigFile, RawConfigFile};
use bundlewatch::fs::mock::MockFileSystem;
use bundlewatch::watch::{Fingerprint, Snapshot};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.watch.root = root.into();
        self
    }

    pub fn with_extensions(mut self, extensions: &[&str]) -> Self {
        self.config.watch.extensions = extensions.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_exclude(mut self, pattern: &str) -> Self {
        self.config.watch.exclude.push(pattern.to_string());
        self
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.config.timing.debounce_ms = ms;
        self
    }

    pub fn with_poll_ms(mut self, ms: u64) -> Self {
        self.config.timing.poll_ms = ms;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Snapshot`, fingerprinting the given contents.
#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: Snapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.snapshot
            .insert(path, Fingerprint::of_bytes(content.as_bytes()));
        self
    }

    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}

/// Builder for a `MockFileSystem` holding a small source tree.
pub struct MockTreeBuilder {
    fs: MockFileSystem,
}

impl MockTreeBuilder {
    pub fn new() -> Self {
        Self {
            fs: MockFileSystem::new(),
        }
    }

    pub fn file(self, path: &str, content: &str) -> Self {
        self.fs.add_file(path, content);
        self
    }

    pub fn dir(self, path: &str) -> Self {
        self.fs.add_dir(path);
        self
    }

    pub fn build(self) -> MockFileSystem {
        self.fs
    }
}

impl Default for MockTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
