// src/watch/snapshot.rs

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::errors::{BundlewatchError, Result};
use crate::fs::{EntryKind, FileSystem};
use crate::watch::hash::{Fingerprint, compute_file_hash};
use crate::watch::path_utils::relative_str;
use crate::watch::patterns::FileFilter;

/// Every tracked file at one point in time, keyed by its path relative to
/// the watch root.
///
/// Ordered so that diffs iterate deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    files: BTreeMap<String, Fingerprint>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, rel_path: impl Into<String>, fingerprint: Fingerprint) {
        self.files.insert(rel_path.into(), fingerprint);
    }

    pub fn get(&self, rel_path: &str) -> Option<&Fingerprint> {
        self.files.get(rel_path)
    }

    pub fn contains(&self, rel_path: &str) -> bool {
        self.files.contains_key(rel_path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fingerprint)> {
        self.files.iter().map(|(path, fp)| (path.as_str(), fp))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Fingerprint)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (String, Fingerprint)>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Walks the watch root and fingerprints every tracked file.
///
/// Any failure to list a directory or read a file aborts the whole scan with
/// [`BundlewatchError::ScanIo`]; there is no partial snapshot.
#[derive(Clone)]
pub struct Snapshotter {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    filter: FileFilter,
}

impl fmt::Debug for Snapshotter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshotter")
            .field("root", &self.root)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl Snapshotter {
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>, filter: FileFilter) -> Self {
        Self {
            fs,
            root: root.into(),
            filter,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    pub fn scan(&self) -> Result<Snapshot> {
        let mut snapshot = Snapshot::new();
        let mut stack = vec![self.root.clone()];

        while let Some(dir) = stack.pop() {
            let entries = self
                .fs
                .read_dir(&dir)
                .map_err(|e| BundlewatchError::scan_io(&dir, e))?;

            for entry in entries {
                match entry.kind {
                    EntryKind::Dir => stack.push(entry.path),
                    EntryKind::File | EntryKind::Symlink => self.visit_file(&entry.path, &mut snapshot)?,
                    EntryKind::Other => trace!(path = ?entry.path, "skipping special file"),
                }
            }
        }

        debug!(root = ?self.root, files = snapshot.len(), "scan complete");
        Ok(snapshot)
    }

    fn visit_file(&self, path: &Path, snapshot: &mut Snapshot) -> Result<()> {
        let Some(rel) = relative_str(&self.root, path) else {
            warn!(?path, root = ?self.root, "skipping file: not under root or name is not UTF-8");
            return Ok(());
        };

        if !self.filter.matches(&rel) {
            return Ok(());
        }

        let fingerprint = compute_file_hash(self.fs.as_ref(), path)
            .map_err(|e| BundlewatchError::scan_io(path, e))?;
        trace!(path = %rel, %fingerprint, "fingerprinted");
        snapshot.insert(rel, fingerprint);
        Ok(())
    }
}
