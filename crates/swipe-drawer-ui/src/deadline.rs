//! One-shot deadlines for deferred drawer work.
//!
//! The drawer never blocks waiting for a delay. Instead it arms a deadline
//! and the host event loop calls `fire_if_due` from its tick, using
//! `deadline()` for `WaitUntil` scheduling between ticks.

use std::cell::Cell;
use web_time::{Duration, Instant};

/// A single pending point in time, fired at most once per arm.
#[derive(Debug, Default)]
pub struct Deadline {
    at: Cell<Option<Instant>>,
}

impl Deadline {
    pub const fn new() -> Self {
        Self { at: Cell::new(None) }
    }

    /// Arms the deadline at `now + delay`, replacing any pending one.
    pub fn arm_after(&self, now: Instant, delay: Duration) {
        self.at.set(Some(now + delay));
    }

    pub fn disarm(&self) {
        self.at.set(None);
    }

    pub fn is_armed(&self) -> bool {
        self.at.get().is_some()
    }

    /// Returns the pending time, if armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.at.get()
    }

    /// Returns `true` and disarms if the deadline has passed.
    pub fn fire_if_due(&self, now: Instant) -> bool {
        match self.at.get() {
            Some(at) if now >= at => {
                self.at.set(None);
                true
            }
            _ => false,
        }
    }
}

/// Earliest of two optional instants.
pub fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
