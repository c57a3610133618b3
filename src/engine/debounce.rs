// src/engine/debounce.rs

use std::time::{Duration, Instant};

/// Trailing-edge, single-shot debounce timer.
///
/// Holds at most one deadline. Every [`arm`](Debouncer::arm) pushes the
/// deadline to `now + interval`; [`fire_if_due`](Debouncer::fire_if_due)
/// returns `true` exactly once when a poll sees `now >= deadline`, and clears
/// the deadline.
///
/// Time is passed in by the caller, so the timer never reads a clock.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm or re-arm the timer, returning the new deadline.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.interval;
        self.deadline = Some(deadline);
        deadline
    }

    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
