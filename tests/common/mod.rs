#![allow(dead_code)]

pub use bundlewatch_test_utils::builders;
pub use bundlewatch_test_utils::{init_tracing, with_timeout};

use std::time::Duration;

use tokio::time::sleep;

use bundlewatch::fs::mock::MockFileSystem;

/// A scripted filesystem mutation, applied `at` after the test starts.
pub struct Edit {
    pub at: Duration,
    pub apply: Box<dyn FnOnce(&MockFileSystem) + Send>,
}

impl Edit {
    pub fn write(at_ms: u64, path: &'static str, content: &'static str) -> Self {
        Self {
            at: Duration::from_millis(at_ms),
            apply: Box::new(move |fs| fs.add_file(path, content)),
        }
    }

    pub fn remove(at_ms: u64, path: &'static str) -> Self {
        Self {
            at: Duration::from_millis(at_ms),
            apply: Box::new(move |fs| fs.remove(path)),
        }
    }

    pub fn fail(at_ms: u64, path: &'static str) -> Self {
        Self {
            at: Duration::from_millis(at_ms),
            apply: Box::new(move |fs| fs.fail_on(path)),
        }
    }
}

/// Spawn a task that applies `edits` (sorted by time) to `fs`.
pub fn spawn_edits(fs: &MockFileSystem, edits: Vec<Edit>) -> tokio::task::JoinHandle<()> {
    let fs = fs.clone();
    let start = tokio::time::Instant::now();
    tokio::spawn(async move {
        for edit in edits {
            let target = start + edit.at;
            sleep(target.saturating_duration_since(tokio::time::Instant::now())).await;
            (edit.apply)(&fs);
        }
    })
}
