// src/engine/runtime.rs

use std::fmt;

use chrono::Local;
use tokio::time::{Instant, sleep};
use tracing::{debug, info};

use crate::errors::Result;
use crate::watch::Snapshotter;

use super::core::WatchCore;
use super::{CoreCommand, PendingRebuild, RebuildSignal, RuntimeOptions};

/// Drives [`WatchCore`] with a fresh snapshot every poll interval.
///
/// This is a pure IO shell: scanning, sleeping and stamping wall-clock time
/// happen here, every decision happens in the core. Scans run inline on the
/// current task; the loop is single-threaded by construction.
pub struct Runtime {
    core: WatchCore,
    snapshotter: Snapshotter,
    options: RuntimeOptions,
}

impl fmt::Debug for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runtime")
            .field("core", &self.core)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Runtime {
    pub fn new(snapshotter: Snapshotter, options: RuntimeOptions) -> Self {
        Self {
            core: WatchCore::new(options),
            snapshotter,
            options,
        }
    }

    /// Main poll loop.
    ///
    /// Returns once the debounce timer fires. Any scan error is returned
    /// immediately; nothing is retried.
    pub async fn run(mut self) -> Result<RebuildSignal> {
        info!(
            root = ?self.snapshotter.root(),
            extensions = ?self.snapshotter.filter().extensions(),
            debounce_ms = self.options.debounce.as_millis() as u64,
            poll_ms = self.options.poll_interval.as_millis() as u64,
            "watch loop started"
        );

        loop {
            let snapshot = self.snapshotter.scan()?;
            let now = Instant::now().into_std();

            let step = self.core.observe(snapshot, now);

            for command in step.commands {
                if let Some(pending) = self.execute_command(command) {
                    return Ok(self.signal(pending));
                }
            }

            if !step.keep_running {
                // The core only stops after emitting a trigger.
                debug!("core stopped without a trigger; polling ends");
                break;
            }

            sleep(self.options.poll_interval).await;
        }

        Err(anyhow::anyhow!("watch loop ended without a rebuild signal").into())
    }

    fn execute_command(&self, command: CoreCommand) -> Option<PendingRebuild> {
        match command {
            CoreCommand::Baseline { tracked } => {
                info!(files = tracked, "baseline snapshot established");
                None
            }
            CoreCommand::Armed {
                change,
                changes,
                deadline,
            } => {
                info!(
                    path = %change.path,
                    kind = %change.kind,
                    added = changes.added.len(),
                    modified = changes.modified.len(),
                    removed = changes.removed.len(),
                    "change detected; debounce armed"
                );
                debug!(?changes, ?deadline, "debounce deadline reset");
                None
            }
            CoreCommand::Trigger(pending) => Some(pending),
        }
    }

    fn signal(&self, pending: PendingRebuild) -> RebuildSignal {
        info!(
            path = %pending.change.path,
            coalesced = pending.coalesced,
            "debounce elapsed; signalling rebuild"
        );
        RebuildSignal {
            change: pending.change,
            coalesced: pending.coalesced,
            triggered_at: Local::now(),
        }
    }
}
