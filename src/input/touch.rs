//! Touch swipe recognition.

use super::{ElementId, Point, ViewGeometry};
use crate::state::PageId;
use log::*;
use std::collections::HashMap;

/// Default horizontal travel required for a page swipe.
///
pub const DEFAULT_SWIPE_THRESHOLD: f64 = 80.0;

/// Horizontal swipe directions, named after the finger movement.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Swipe {
    Left,
    Right,
}

/// Swipe thresholds, with optional per-page overrides.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeThresholds {
    pub default: f64,
    pub per_page: HashMap<PageId, f64>,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        let mut per_page = HashMap::new();
        // Dense poster grid, needs a longer swipe.
        per_page.insert(PageId::Tmdb, 120.0);
        SwipeThresholds {
            default: DEFAULT_SWIPE_THRESHOLD,
            per_page,
        }
    }
}

impl SwipeThresholds {
    pub fn for_page(&self, page: PageId) -> f64 {
        self.per_page.get(&page).copied().unwrap_or(self.default)
    }
}

#[derive(Debug, Clone, Copy)]
struct GestureSession {
    start: Point,
    current: Point,
    origin: Option<ElementId>,
}

/// Tracks one touch sequence at a time.
///
#[derive(Debug, Default)]
pub struct TouchRecognizer {
    session: Option<GestureSession>,
    thresholds: SwipeThresholds,
}

impl TouchRecognizer {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        TouchRecognizer {
            session: None,
            thresholds,
        }
    }

    pub fn thresholds(&self) -> &SwipeThresholds {
        &self.thresholds
    }

    pub fn is_tracking(&self) -> bool {
        self.session.is_some()
    }

    pub fn start(&mut self, point: Point, origin: Option<ElementId>) {
        self.session = Some(GestureSession {
            start: point,
            current: point,
            origin,
        });
    }

    pub fn move_to(&mut self, point: Point) {
        if let Some(session) = self.session.as_mut() {
            session.current = point;
        }
    }

    /// Drop the in-flight session so its end emits nothing.
    ///
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            trace!("Touch gesture cancelled");
        }
    }

    /// Finish the sequence at `point` and classify it for `page`.
    ///
    pub fn end(
        &mut self,
        point: Point,
        geometry: &dyn ViewGeometry,
        page: PageId,
    ) -> Option<Swipe> {
        let mut session = self.session.take()?;
        session.current = point;

        if let Some(origin) = session.origin {
            if geometry.in_horizontal_scroller(origin) {
                trace!("Touch started inside a horizontal scroller, not a page swipe");
                return None;
            }
        }

        classify(session.start, session.current, self.thresholds.for_page(page))
    }
}

/// Classify a start/end pair as a page swipe.
///
pub fn classify(start: Point, end: Point, threshold: f64) -> Option<Swipe> {
    let dx = start.x - end.x;
    let dy = (start.y - end.y).abs();

    if dx.abs() <= 2.0 * dy {
        return None;
    }
    if dx > threshold {
        Some(Swipe::Left)
    } else if dx < -threshold {
        Some(Swipe::Right)
    } else {
        None
    }
}
