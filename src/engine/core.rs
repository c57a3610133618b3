// src/engine/core.rs

//! Pure core state machine.
//!
//! [`WatchCore`] consumes one [`Snapshot`] per poll together with the instant
//! it was taken, and returns a [`CoreStep`] describing what the IO shell
//! (`engine::runtime::Runtime`) should do next.
//!
//! The core owns all loop state: the previous snapshot, the debounce timer
//! and the pending change. It has no channels, no Tokio types and performs
//! no IO, so it can be driven with synthetic instants in unit tests.

use std::time::Instant;

use crate::engine::debounce::Debouncer;
use crate::engine::{DebounceState, RuntimeOptions};
use crate::watch::diff::{ChangeEvent, ChangeSet, detect_changes};
use crate::watch::snapshot::Snapshot;

/// The change a rebuild will be reported for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRebuild {
    /// Most recent representative change seen in the debounce window.
    pub change: ChangeEvent,
    /// Number of polls that observed a change in this window.
    pub coalesced: usize,
}

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone)]
pub enum CoreCommand {
    /// First scan completed; `tracked` files form the baseline.
    Baseline { tracked: usize },
    /// A change was observed and the debounce deadline (re)armed.
    Armed {
        change: ChangeEvent,
        changes: ChangeSet,
        deadline: Instant,
    },
    /// The deadline passed quietly: rebuild now.
    Trigger(PendingRebuild),
}

/// Decision returned by the core after a single poll.
#[derive(Debug, Clone)]
pub struct CoreStep {
    pub commands: Vec<CoreCommand>,
    /// Whether the outer loop should keep polling.
    pub keep_running: bool,
}

#[derive(Debug)]
pub struct WatchCore {
    previous: Option<Snapshot>,
    debouncer: Debouncer,
    pending: Option<PendingRebuild>,
    triggered: bool,
}

impl WatchCore {
    pub fn new(options: RuntimeOptions) -> Self {
        Self {
            previous: None,
            debouncer: Debouncer::new(options.debounce),
            pending: None,
            triggered: false,
        }
    }

    pub fn state(&self) -> DebounceState {
        if self.triggered {
            return DebounceState::Triggered;
        }
        match self.debouncer.deadline() {
            Some(deadline) => DebounceState::Armed { deadline },
            None => DebounceState::Idle,
        }
    }

    /// Feed the snapshot taken at `now` into the state machine.
    pub fn observe(&mut self, current: Snapshot, now: Instant) -> CoreStep {
        if self.triggered {
            return CoreStep {
                commands: Vec::new(),
                keep_running: false,
            };
        }

        // The first scan only establishes the baseline.
        let Some(previous) = self.previous.take() else {
            let tracked = current.len();
            self.previous = Some(current);
            return CoreStep {
                commands: vec![CoreCommand::Baseline { tracked }],
                keep_running: true,
            };
        };

        let changes = detect_changes(&previous, &current);
        self.previous = Some(current);

        let mut commands = Vec::new();
        if let Some(change) = changes.representative().cloned() {
            let deadline = self.debouncer.arm(now);
            let coalesced = self.pending.as_ref().map_or(0, |p| p.coalesced) + 1;
            self.pending = Some(PendingRebuild {
                change: change.clone(),
                coalesced,
            });
            commands.push(CoreCommand::Armed {
                change,
                changes,
                deadline,
            });
        }

        if self.debouncer.fire_if_due(now) {
            if let Some(pending) = self.pending.take() {
                self.triggered = true;
                commands.push(CoreCommand::Trigger(pending));
                return CoreStep {
                    commands,
                    keep_running: false,
                };
            }
        }

        CoreStep {
            commands,
            keep_running: true,
        }
    }
}
