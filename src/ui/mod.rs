//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen layout and hit-testing for the input core
//! - Theme management and styling helpers
//! - Page, bottom bar and overlay rendering

type Frame<'a> = ratatui::Frame<'a>;

mod geometry;
mod render;
mod theme;
mod widgets;

pub use geometry::LayoutGeometry;
pub use render::render;
pub use theme::Theme;

/// Shell-side view state that the core does not own.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewState {
    pub body_scroll: u16,
}

impl ViewState {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.body_scroll) + delta;
        self.body_scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    pub fn reset_scroll(&mut self) {
        self.body_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_is_clamped_at_top() {
        let mut view = ViewState::default();
        view.scroll_by(3);
        assert_eq!(view.body_scroll, 3);
        view.scroll_by(-10);
        assert_eq!(view.body_scroll, 0);
        view.scroll_by(5);
        view.reset_scroll();
        assert_eq!(view, ViewState::default());
    }
}
