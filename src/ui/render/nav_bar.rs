use super::Frame;
use crate::input::InputMode;
use crate::state::State;
use crate::ui::{widgets::styling, LayoutGeometry, Theme};
use ratatui::{
    layout::Alignment,
    widgets::{Block, Borders, Paragraph},
};

/// Render the bottom navigation bar in the persisted order, with drag
/// feedback while reordering.
///
pub fn nav_bar(frame: &mut Frame, geometry: &LayoutGeometry, state: &State, theme: &Theme) {
    let dragged = state.dragged_index();
    let over = state.drag_over_index();

    for (index, page) in state.order().pages().iter().enumerate() {
        let Some(slot) = geometry.nav_slot(index) else {
            continue;
        };

        let style = if dragged == Some(index) {
            styling::drag_source_style(theme)
        } else if over == Some(index) {
            styling::drag_target_style(theme)
        } else if *page == state.current_page() {
            styling::current_nav_item_style(theme)
        } else {
            styling::normal_text_style(theme)
        };

        let label = match state.input_mode() {
            InputMode::Desktop => format!("{} {}", index + 1, page.title()),
            InputMode::Touch => page.title().to_string(),
        };
        let item = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(styling::normal_block_border_style(theme)),
            );
        frame.render_widget(item, slot);
    }
}
