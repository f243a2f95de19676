use super::Frame;
use crate::state::{SettingsSection, State};
use crate::ui::{widgets::styling, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Render whichever panels are open on top of the page body.
///
pub fn overlays(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let navigation = state.navigation();
    if navigation.settings_open {
        settings(frame, side_panel(size), navigation.settings_initial_page, theme);
    } else if navigation.notifications_open {
        notifications(frame, side_panel(size), theme);
    }
    if navigation.shortcuts_help_open {
        shortcuts_help(frame, centered(size, 70, 80), state, theme);
    }
}

fn settings(frame: &mut Frame, size: Rect, initial: Option<SettingsSection>, theme: &Theme) {
    let selected = initial.unwrap_or(SettingsSection::General);
    let lines: Vec<Line> = SettingsSection::ALL
        .iter()
        .map(|section| {
            let style = if *section == selected {
                styling::current_nav_item_style(theme)
            } else {
                styling::normal_text_style(theme)
            };
            Line::from(Span::styled(section_title(*section), style))
        })
        .collect();
    frame.render_widget(Clear, size);
    frame.render_widget(Paragraph::new(lines).block(panel_block("Settings", theme)), size);
}

fn notifications(frame: &mut Frame, size: Rect, theme: &Theme) {
    frame.render_widget(Clear, size);
    frame.render_widget(
        Paragraph::new("You're all caught up.")
            .style(styling::muted_text_style(theme))
            .block(panel_block("Notifications", theme)),
        size,
    );
}

fn shortcuts_help(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let desktop = state.desktop();
    let lines: Vec<Line> = desktop
        .keymap()
        .help_entries(desktop.modifier())
        .into_iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<14}", keys), styling::current_nav_item_style(theme)),
                Span::styled(description, styling::normal_text_style(theme)),
            ])
        })
        .collect();
    frame.render_widget(Clear, size);
    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Keyboard shortcuts", theme)),
        size,
    );
}

fn section_title(section: SettingsSection) -> &'static str {
    match section {
        SettingsSection::General => "General",
        SettingsSection::Account => "Account",
        SettingsSection::Channels => "Channels",
        SettingsSection::Notifications => "Notifications",
        SettingsSection::Appearance => "Appearance",
        SettingsSection::Security => "Security",
        SettingsSection::Api => "API",
        SettingsSection::Comments => "Comments",
    }
}

fn panel_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, styling::active_block_title_style()))
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme))
        .style(styling::panel_style(theme))
}

/// Right-hand panel covering 40% of the width.
///
fn side_panel(size: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(size)[1]
}

fn centered(size: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(size);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
