//! Long-press drag reordering of the bottom navigation bar.
//!
//! A touch on a nav item arms the long-press timer. If the timer fires before
//! the touch ends the controller enters dragging, tracks which item is under
//! the finger, and on release reports the move to apply to the order.

use super::{Point, Timer, ViewGeometry};
use log::*;
use std::time::Instant;

pub const LONG_PRESS_MS: u64 = 500;

/// Haptic feedback requested by the controller.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Haptic {
    Engage,
    Tick,
    Success,
}

/// Receives haptic feedback requests.
///
pub trait Haptics {
    fn play(&mut self, haptic: Haptic);
}

/// Haptics backend for devices without a vibration motor.
///
#[derive(Debug, Default)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn play(&mut self, haptic: Haptic) {
        debug!("Haptic feedback: {:?}", haptic);
    }
}

/// Result of releasing a touch on the bottom bar.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DragOutcome {
    /// Released before the long press fired.
    Tap(usize),
    /// Dragged onto a different slot.
    Reorder { from: usize, to: usize },
    /// Dragged and released over the original slot, or nothing was pressed.
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pressed { index: usize },
    Dragging { dragged: usize, over: usize },
}

#[derive(Debug)]
pub struct DragReorder {
    phase: Phase,
    long_press: Timer,
}

impl Default for DragReorder {
    fn default() -> Self {
        DragReorder::new(LONG_PRESS_MS)
    }
}

impl DragReorder {
    pub fn new(long_press_ms: u64) -> Self {
        DragReorder {
            phase: Phase::Idle,
            long_press: Timer::from_millis(long_press_ms),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    pub fn dragged_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Dragging { dragged, .. } => Some(dragged),
            _ => None,
        }
    }

    pub fn drag_over_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Dragging { over, .. } => Some(over),
            _ => None,
        }
    }

    /// Begin a press on the item at `index`.
    ///
    pub fn touch_start(&mut self, index: usize, now: Instant) {
        self.phase = Phase::Pressed { index };
        self.long_press.arm(now);
    }

    /// Advance the long-press timer. Returns `Haptic::Engage` when dragging
    /// begins.
    ///
    pub fn tick(&mut self, now: Instant) -> Option<Haptic> {
        if let Phase::Pressed { index } = self.phase {
            if self.long_press.fire(now) {
                debug!("Long press on nav item {}, dragging", index);
                self.phase = Phase::Dragging {
                    dragged: index,
                    over: index,
                };
                return Some(Haptic::Engage);
            }
        }
        None
    }

    /// Track the finger while dragging. Returns `Haptic::Tick` when the
    /// finger moves onto a different slot.
    ///
    pub fn touch_move(&mut self, point: Point, geometry: &dyn ViewGeometry) -> Option<Haptic> {
        let Phase::Dragging { dragged, over } = self.phase else {
            return None;
        };
        match geometry.nav_index_at(point) {
            Some(index) if index != over => {
                trace!("Dragging nav item {} over slot {}", dragged, index);
                self.phase = Phase::Dragging {
                    dragged,
                    over: index,
                };
                Some(Haptic::Tick)
            }
            _ => None,
        }
    }

    /// Release the touch. Every path leaves the controller idle with no
    /// pending timer. The haptic is `Engage` when the release itself
    /// crossed the long-press deadline.
    ///
    pub fn touch_end(&mut self, now: Instant) -> (DragOutcome, Option<Haptic>) {
        // A release at or after the deadline counts as a long press even if
        // no tick ran in between.
        let haptic = self.tick(now);

        let outcome = match self.phase {
            Phase::Idle => DragOutcome::Unchanged,
            Phase::Pressed { index } => DragOutcome::Tap(index),
            Phase::Dragging { dragged, over } if dragged != over => DragOutcome::Reorder {
                from: dragged,
                to: over,
            },
            Phase::Dragging { .. } => DragOutcome::Unchanged,
        };
        self.cancel();
        (outcome, haptic)
    }

    /// Drop the session and any pending long press.
    ///
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
        self.long_press.cancel();
    }

    pub fn has_pending_timer(&self) -> bool {
        self.long_press.is_pending()
    }
}
