mod header;
mod nav_bar;
mod overlays;
mod page;

use super::{Frame, LayoutGeometry, Theme, ViewState};
use crate::logger::LogBuffer;
use crate::state::State;

/// Render the dashboard according to state. `geometry` must come from the
/// same frame size.
///
pub fn render(
    frame: &mut Frame,
    state: &State,
    geometry: &LayoutGeometry,
    view: &ViewState,
    logs: &LogBuffer,
    theme: &Theme,
) {
    header::header(frame, geometry.header, state, theme);
    if let Some(area) = geometry.carousel {
        page::carousel(frame, area, state.current_page(), geometry.carousel_overflows(), theme);
    }
    page::page(frame, geometry.body, state, view, logs, theme);
    nav_bar::nav_bar(frame, geometry, state, theme);
    overlays::overlays(frame, geometry.body, state, theme);
}
