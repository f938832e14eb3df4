//! One-shot transition completion signal.

use std::cell::Cell;

/// Waits for exactly one transition-end notification after being armed.
///
/// Notifications that arrive while disarmed (another element's transition,
/// the closing transition, a notification after `close()` interrupted the
/// open) are ignored.
#[derive(Debug, Default)]
pub struct TransitionSignal {
    armed: Cell<bool>,
}

impl TransitionSignal {
    pub const fn new() -> Self {
        Self {
            armed: Cell::new(false),
        }
    }

    pub fn arm(&self) {
        self.armed.set(true);
    }

    pub fn disarm(&self) {
        self.armed.set(false);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.get()
    }

    /// Consumes the arm. Returns `true` only for the first notification.
    pub fn fire(&self) -> bool {
        self.armed.replace(false)
    }
}
