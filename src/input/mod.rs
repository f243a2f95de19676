//! Input recognizers.
//!
//! Raw touch, wheel and keyboard events are turned into the shared
//! `Command` vocabulary here. Recognizers never touch navigation state
//! directly; `State` applies what they emit.

pub mod desktop;
pub mod drag;
pub mod timer;
pub mod touch;

pub use desktop::{DesktopRecognizer, FocusTarget, WheelEvent};
pub use drag::{DragOutcome, DragReorder, Haptic, Haptics, LogHaptics};
pub use timer::Timer;
pub use touch::{Swipe, SwipeThresholds, TouchRecognizer};

use crate::state::{PageId, Route};

/// Commands produced by the recognizers.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Navigate(Route),
    /// Position in the current bottom-bar order.
    JumpToDestination(usize),
    PreviousDestination,
    NextDestination,
    ToggleSettings,
    CloseSettings,
    ToggleNotifications,
    CloseNotifications,
    CloseShortcutsHelp,
}

impl From<PageId> for Command {
    fn from(page: PageId) -> Self {
        Command::Navigate(Route::Page(page))
    }
}

/// Which input modality the device supports, decided once at startup.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InputMode {
    Touch,
    Desktop,
}

impl InputMode {
    pub fn detect(touch_capable: bool) -> Self {
        if touch_capable {
            InputMode::Touch
        } else {
            InputMode::Desktop
        }
    }
}

/// A position in view units.
///
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Opaque handle to an element in the view layer.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ElementId(pub u64);

/// Geometry queries answered by the view layer.
///
pub trait ViewGeometry {
    /// True if the element, or one of its ancestors, scrolls horizontally
    /// and its content overflows its box.
    fn in_horizontal_scroller(&self, element: ElementId) -> bool;

    /// Index of the bottom navigation item under the point.
    fn nav_index_at(&self, point: Point) -> Option<usize>;
}
