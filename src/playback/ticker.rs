//! Cancellable tick schedule

use std::time::Instant;

/// A single pending tick deadline.
///
/// The UI loop polls with the current time instead of registering a callback,
/// so cancelling is just forgetting the deadline: once cleared, nothing can
/// fire until a new tick is scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    pub fn new() -> Self {
        Ticker { deadline: None }
    }

    /// Replace any pending tick with one due at `at`
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the pending tick if it is due at `now`
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
