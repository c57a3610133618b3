// src/watch/mod.rs

//! Polling change detection.
//!
//! This module is responsible for:
//! - Deciding which files are tracked (extension allow-list + exclude globs).
//! - Fingerprinting file contents.
//! - Building a [`Snapshot`] of the watch root per poll.
//! - Diffing consecutive snapshots into a [`ChangeSet`].
//!
//! It does **not** know about timing or debouncing; that lives in `engine`.

pub mod diff;
pub mod hash;
pub mod path_utils;
pub mod patterns;
pub mod snapshot;

pub use diff::{ChangeEvent, ChangeSet, detect_changes};
pub use hash::{Fingerprint, compute_file_hash};
pub use patterns::{DEFAULT_EXTENSIONS, FileFilter};
pub use snapshot::{Snapshot, Snapshotter};
