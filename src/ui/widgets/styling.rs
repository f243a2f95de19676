use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the current bottom bar item.
///
pub fn current_nav_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for the item being dragged.
///
pub fn drag_source_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.drag_source.to_color())
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Return the style for the slot the dragged item is over.
///
pub fn drag_target_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.drag_target.to_color())
        .add_modifier(Modifier::UNDERLINED)
}

pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

pub fn panel_style(theme: &Theme) -> Style {
    Style::default().bg(theme.surface.to_color())
}
