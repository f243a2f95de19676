use super::Frame;
use crate::config::format_binding_display;
use crate::input::InputMode;
use crate::state::{Mode, State};
use crate::ui::{widgets::styling, Theme};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the single-line header: page title, mode and a hint.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let mode = match state.mode() {
        Mode::Browsing => "",
        Mode::SettingsOpen => " [settings]",
        Mode::NotificationsOpen => " [notifications]",
        Mode::Dragging => " [reordering]",
    };

    let hint = match state.input_mode() {
        InputMode::Touch => "swipe to switch pages, hold a tab to reorder".to_string(),
        InputMode::Desktop => {
            let modifier = state.desktop().modifier();
            format!(
                "{} settings  {} notifications  {} help",
                format_binding_display(modifier, ','),
                format_binding_display(modifier, 'n'),
                state.desktop().keymap().help_key
            )
        }
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {}", state.current_page().title()),
            styling::active_block_title_style().fg(theme.primary.to_color()),
        ),
        Span::styled(mode, styling::normal_text_style(theme)),
        Span::styled(format!("   {}", hint), styling::muted_text_style(theme)),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
