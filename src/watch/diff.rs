// src/watch/diff.rs

//! Snapshot diffing.

use crate::types::ChangeKind;
use crate::watch::snapshot::Snapshot;

/// The single path named when a change is reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: String,
    pub kind: ChangeKind,
}

/// All differences between two consecutive snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub removed: Vec<String>,
    representative: Option<ChangeEvent>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len() + self.modified.len() + self.removed.len()
    }

    /// The last change observed while diffing, or `None` when nothing changed.
    ///
    /// Additions and modifications are visited in path order of the current
    /// snapshot, then removals in path order of the previous one, so a removal
    /// wins over an edit in the same cycle.
    pub fn representative(&self) -> Option<&ChangeEvent> {
        self.representative.as_ref()
    }

    fn record(&mut self, path: &str, kind: ChangeKind) {
        let list = match kind {
            ChangeKind::Added => &mut self.added,
            ChangeKind::Modified => &mut self.modified,
            ChangeKind::Removed => &mut self.removed,
        };
        list.push(path.to_string());
        self.representative = Some(ChangeEvent {
            path: path.to_string(),
            kind,
        });
    }
}

/// Classify every difference between `previous` and `current`.
pub fn detect_changes(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (path, fingerprint) in current.iter() {
        match previous.get(path) {
            None => changes.record(path, ChangeKind::Added),
            Some(old) if old != fingerprint => changes.record(path, ChangeKind::Modified),
            Some(_) => {}
        }
    }

    for path in previous.paths() {
        if !current.contains(path) {
            changes.record(path, ChangeKind::Removed);
        }
    }

    changes
}
