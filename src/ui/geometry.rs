use crate::input::{ElementId, Point, ViewGeometry};
use crate::state::PageId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Approximate size of a terminal cell in view units, so swipe thresholds
/// keep their meaning on a character grid.
///
pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

pub const HEADER: ElementId = ElementId(1);
pub const CONTENT: ElementId = ElementId(2);
pub const CAROUSEL: ElementId = ElementId(3);
pub const NAV_BAR: ElementId = ElementId(4);

pub const NAV_BAR_HEIGHT: u16 = 3;
pub const CAROUSEL_HEIGHT: u16 = 5;
pub const CAROUSEL_CARD_WIDTH: u16 = 18;

/// Cards in the page's horizontal carousel, zero if it has none.
///
pub fn carousel_cards(page: PageId) -> u16 {
    match page {
        PageId::Dashboard => 8,
        PageId::Tmdb => 12,
        PageId::VideoStudio => 6,
        _ => 0,
    }
}

/// Screen regions for one frame, answering hit-testing for the core.
///
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    pub header: Rect,
    pub carousel: Option<Rect>,
    pub body: Rect,
    pub nav_bar: Rect,
    nav_len: usize,
    carousel_overflows: bool,
}

impl LayoutGeometry {
    pub fn new(area: Rect, page: PageId, nav_len: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(NAV_BAR_HEIGHT),
            ])
            .split(area);

        let cards = carousel_cards(page);
        let (carousel, body) = if cards > 0 {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(CAROUSEL_HEIGHT), Constraint::Min(0)])
                .split(rows[1]);
            (Some(parts[0]), parts[1])
        } else {
            (None, rows[1])
        };
        let carousel_overflows = carousel
            .map(|rect| u32::from(cards) * u32::from(CAROUSEL_CARD_WIDTH) > u32::from(rect.width))
            .unwrap_or(false);

        LayoutGeometry {
            header: rows[0],
            carousel,
            body,
            nav_bar: rows[2],
            nav_len,
            carousel_overflows,
        }
    }

    pub fn carousel_overflows(&self) -> bool {
        self.carousel_overflows
    }

    /// Center of a terminal cell in view units.
    ///
    pub fn point_at(column: u16, row: u16) -> Point {
        Point::new(
            (f64::from(column) + 0.5) * CELL_WIDTH,
            (f64::from(row) + 0.5) * CELL_HEIGHT,
        )
    }

    pub fn element_at(&self, column: u16, row: u16) -> Option<ElementId> {
        if contains(self.nav_bar, column, row) {
            Some(NAV_BAR)
        } else if self.carousel.map_or(false, |rect| contains(rect, column, row)) {
            Some(CAROUSEL)
        } else if contains(self.body, column, row) {
            Some(CONTENT)
        } else if contains(self.header, column, row) {
            Some(HEADER)
        } else {
            None
        }
    }

    /// Area of the bottom bar slot at `index`.
    ///
    pub fn nav_slot(&self, index: usize) -> Option<Rect> {
        if index >= self.nav_len {
            return None;
        }
        let start = self.slot_edge(index);
        let end = self.slot_edge(index + 1);
        Some(Rect::new(
            self.nav_bar.x + start,
            self.nav_bar.y,
            end - start,
            self.nav_bar.height,
        ))
    }

    pub fn nav_index_at_cell(&self, column: u16, row: u16) -> Option<usize> {
        if self.nav_len == 0 || !contains(self.nav_bar, column, row) {
            return None;
        }
        let offset = column - self.nav_bar.x;
        (0..self.nav_len).find(|index| offset < self.slot_edge(index + 1))
    }

    fn slot_edge(&self, index: usize) -> u16 {
        let width = usize::from(self.nav_bar.width);
        u16::try_from(index * width / self.nav_len).unwrap_or(self.nav_bar.width)
    }
}

impl ViewGeometry for LayoutGeometry {
    fn in_horizontal_scroller(&self, element: ElementId) -> bool {
        element == CAROUSEL && self.carousel_overflows
    }

    fn nav_index_at(&self, point: Point) -> Option<usize> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let column = (point.x / CELL_WIDTH).floor().min(f64::from(u16::MAX)) as u16;
        let row = (point.y / CELL_HEIGHT).floor().min(f64::from(u16::MAX)) as u16;
        self.nav_index_at_cell(column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
