//! Bottom tab bar
//!
//! Rendered from the precomputed [`TabBarView`] so the bar and the screen
//! state never disagree about the active tab or the unread badge.
//!
//! [`TabBarView`]: crate::app::TabBarView

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_UNREAD};

pub fn render_bottom_nav(frame: &mut Frame, area: Rect, app: &App) {
    let view = app.tab_bar_view();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for (i, entry) in view.entries.iter().enumerate() {
        let style = if entry.tab == view.active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!("  [{}] {}", i + 1, entry.label), style));
        if let Some(badge) = entry.badge {
            spans.push(Span::styled(
                format!(" ●{}", badge),
                Style::default()
                    .fg(COLOR_UNREAD)
                    .add_modifier(Modifier::BOLD),
            ));
        }
    }

    let bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(bar, inner);
}
