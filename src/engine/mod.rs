// src/engine/mod.rs

//! Poll loop and debounce engine.
//!
//! The pure state machine lives in [`core`]; the async IO shell that scans,
//! sleeps and stamps wall-clock time is implemented in [`runtime`].

use std::fmt;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

use crate::watch::ChangeEvent;

/// Quiet period a burst of changes must settle for before triggering.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Pause between scans.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Timing options used by both the core and the async shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeOptions {
    pub debounce: Duration,
    pub poll_interval: Duration,
}

/// Debounce state as seen from outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No pending rebuild.
    Idle,
    /// A change was seen; rebuild at `deadline` unless another arrives.
    Armed { deadline: Instant },
    /// Terminal: the rebuild signal has been emitted.
    Triggered,
}

/// Result of a completed watch: the process should exit and the supervisor
/// should rebuild.
#[derive(Debug, Clone)]
pub struct RebuildSignal {
    pub change: ChangeEvent,
    pub coalesced: usize,
    pub triggered_at: DateTime<Local>,
}

impl fmt::Display for RebuildSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Updating {} [{}]",
            self.change.path,
            self.triggered_at.format("%H:%M:%S")
        )
    }
}

pub mod core;
pub mod debounce;
pub mod runtime;

pub use self::core::{CoreCommand, CoreStep, PendingRebuild, WatchCore};
pub use self::debounce::Debouncer;
pub use self::runtime::Runtime;
