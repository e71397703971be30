//! Messages tab: the chat list
//!
//! One row per conversation in store order (most recent activity first),
//! with the unread badge on chats that have unseen messages.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::App;

use super::helpers::{
    avatar_color, format_relative_time, initials, truncate_to_width, window_start,
};
use super::theme::{COLOR_ACCENT, COLOR_BG, COLOR_DIM, COLOR_HEADER, COLOR_TEXT, COLOR_UNREAD};

/// Rows per chat entry: header, preview, separator
const ROW_HEIGHT: usize = 3;

pub fn render_chat_list(frame: &mut Frame, area: Rect, app: &App) {
    let chats = app.store.chats();

    if chats.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No conversations yet.",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let heights = vec![ROW_HEIGHT; chats.len()];
    let start = window_start(&heights, app.chats_index, area.height as usize);

    let preview_width = area.width.saturating_sub(6) as usize;
    let mut lines = Vec::new();
    for (i, chat) in chats.iter().enumerate().skip(start) {
        let selected = i == app.chats_index;
        let marker = if selected { "▶ " } else { "  " };
        let name_style = if selected {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };

        let mut header = vec![
            Span::styled(
                marker,
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", initials(&chat.user_name)),
                Style::default()
                    .fg(COLOR_BG)
                    .bg(avatar_color(&chat.user_avatar)),
            ),
            Span::raw(" "),
            Span::styled(chat.user_name.clone(), name_style),
            Span::styled(
                format!("  {}", format_relative_time(chat.timestamp)),
                Style::default().fg(COLOR_DIM),
            ),
        ];
        if chat.has_unread() {
            header.push(Span::styled(
                format!("  ● {}", chat.unread),
                Style::default()
                    .fg(COLOR_UNREAD)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(
            format!(
                "    {}",
                truncate_to_width(&chat.last_message, preview_width.max(1))
            ),
            Style::default().fg(COLOR_DIM),
        )));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}
