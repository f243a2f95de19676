use super::Frame;
use crate::logger::LogBuffer;
use crate::state::{PageId, State};
use crate::ui::geometry::{carousel_cards, CAROUSEL_CARD_WIDTH};
use crate::ui::{widgets::styling, Theme, ViewState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Log lines kept on screen for the logs page.
///
const LOG_LINES: usize = 200;

/// Render the body of the current page.
///
pub fn page(
    frame: &mut Frame,
    size: Rect,
    state: &State,
    view: &ViewState,
    logs: &LogBuffer,
    theme: &Theme,
) {
    let page = state.current_page();
    let block = Block::default()
        .title(page.title())
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    let lines: Vec<Line> = match page {
        PageId::Logs if logs.is_empty() => vec![Line::from("No log entries yet.")],
        PageId::Logs => logs.latest(LOG_LINES).into_iter().map(Line::from).collect(),
        _ => description(page).iter().map(|text| Line::from(*text)).collect(),
    };

    let body = Paragraph::new(lines)
        .style(styling::normal_text_style(theme))
        .wrap(Wrap { trim: false })
        .scroll((view.body_scroll, 0))
        .block(block);
    frame.render_widget(body, size);
}

/// Render the horizontal carousel strip of pages that have one.
///
pub fn carousel(frame: &mut Frame, size: Rect, page: PageId, overflows: bool, theme: &Theme) {
    let cards = carousel_cards(page);
    let visible = (size.width / CAROUSEL_CARD_WIDTH).min(cards);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            (0..visible)
                .map(|_| Constraint::Length(CAROUSEL_CARD_WIDTH))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(size);

    let label = match page {
        PageId::Tmdb => "Trending",
        PageId::VideoStudio => "Clip",
        _ => "Upcoming",
    };
    for index in 0..usize::from(visible) {
        let card = Paragraph::new(format!("{} {}", label, index + 1))
            .style(styling::normal_text_style(theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(styling::normal_block_border_style(theme)),
            );
        frame.render_widget(card, columns[index]);
    }
    if overflows {
        let more = Paragraph::new(format!("+{}", cards - visible))
            .style(styling::muted_text_style(theme));
        frame.render_widget(more, columns[usize::from(visible)]);
    }
}

fn description(page: PageId) -> &'static [&'static str] {
    match page {
        PageId::Dashboard => &[
            "Scheduled posts, engagement and queue health at a glance.",
            "",
            "Swipe the strip above to browse upcoming posts.",
        ],
        PageId::Channels => &["Connected channels and their posting schedules."],
        PageId::Platforms => &["Platform integrations and publishing limits."],
        PageId::Rss => &["RSS feeds that create draft posts automatically."],
        PageId::Tmdb => &["Trending movies and shows to build posts from."],
        PageId::VideoStudio => &["Trim, caption and export clips for upload."],
        PageId::Logs => &[],
        PageId::UploadManager => &["Queued and finished uploads."],
        PageId::Support => &["Questions? Open a ticket and we will get back to you."],
        PageId::Privacy => &[
            "Privacy Policy",
            "",
            "We store only what is needed to publish on your behalf.",
        ],
        PageId::Terms => &[
            "Terms of Service",
            "",
            "Use of the dashboard is subject to these terms.",
        ],
        PageId::Cookies => &[
            "Cookie Policy",
            "",
            "Cookies keep you signed in and remember your preferences.",
        ],
        PageId::NotFound => &["Page not found.", "", "Use the bottom bar to get back."],
    }
}
