//! Single-slot deadline timers.
//!
//! Timers are advanced by the event loop tick instead of scheduling
//! callbacks. A `Timer` holds at most one deadline: arming replaces the
//! previous one, firing or cancelling empties the slot.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Timer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(duration: Duration) -> Self {
        Timer {
            duration,
            deadline: None,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Timer::new(Duration::from_millis(millis))
    }

    /// Arm the timer relative to `now`, replacing any pending deadline.
    ///
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True if armed and the deadline has passed.
    ///
    pub fn is_due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(deadline) if now >= deadline)
    }

    /// Fire the timer if due. Firing empties the slot.
    ///
    pub fn fire(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}
