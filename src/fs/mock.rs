// src/fs/mock.rs

use super::{DirEntry, EntryKind, FileSystem};
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
}

#[derive(Debug, Default)]
struct MockState {
    entries: BTreeMap<PathBuf, MockEntry>,
    failing: HashSet<PathBuf>,
}

/// In-memory filesystem for tests.
///
/// Clones share the same tree, so a test can keep one handle to mutate files
/// while the watcher scans through another. Paths without a parent hang off
/// `"."`.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

fn parent_of(path: &Path) -> Option<&Path> {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Some(Path::new(".")),
        other => other,
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        let fs = Self::default();
        fs.lock()
            .entries
            .insert(PathBuf::from("."), MockEntry::Dir);
        fs
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create or overwrite a file, creating parent directories implicitly.
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = path.as_ref();
        let mut state = self.lock();
        if let Some(parent) = parent_of(path) {
            Self::ensure_dir(&mut state, parent);
        }
        state
            .entries
            .insert(path.to_path_buf(), MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let mut state = self.lock();
        Self::ensure_dir(&mut state, path.as_ref());
    }

    /// Remove a file or a directory together with everything below it.
    pub fn remove(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.lock();
        state
            .entries
            .retain(|key, _| key != path && !key.starts_with(path));
    }

    /// Make every subsequent open/list of `path` fail with `PermissionDenied`.
    pub fn fail_on(&self, path: impl AsRef<Path>) {
        self.lock().failing.insert(path.as_ref().to_path_buf());
    }

    pub fn clear_failure(&self, path: impl AsRef<Path>) {
        self.lock().failing.remove(path.as_ref());
    }

    fn ensure_dir(state: &mut MockState, path: &Path) {
        let mut current = Some(path);
        while let Some(dir) = current {
            if state.entries.contains_key(dir) {
                break;
            }
            state.entries.insert(dir.to_path_buf(), MockEntry::Dir);
            current = parent_of(dir).filter(|p| *p != dir);
        }
    }

    fn check_failure(state: &MockState, path: &Path) -> io::Result<()> {
        if state.failing.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected failure for {:?}", path),
            ));
        }
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn open_read(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let state = self.lock();
        Self::check_failure(&state, path)?;
        match state.entries.get(path) {
            Some(MockEntry::File(content)) => Ok(Box::new(Cursor::new(content.clone()))),
            Some(MockEntry::Dir) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {:?}", path),
            )),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let state = self.lock();
        Self::check_failure(&state, path)?;
        match state.entries.get(path) {
            Some(MockEntry::Dir) => {}
            Some(MockEntry::File(_)) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("not a directory: {:?}", path),
                ));
            }
            None => {
                return Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("directory not found: {:?}", path),
                ));
            }
        }

        let children = state
            .entries
            .iter()
            .filter(|(key, _)| key.as_path() != path && parent_of(key) == Some(path))
            .map(|(key, entry)| DirEntry {
                path: key.clone(),
                kind: match entry {
                    MockEntry::File(_) => EntryKind::File,
                    MockEntry::Dir => EntryKind::Dir,
                },
            })
            .collect();
        Ok(children)
    }
}
