//! Chat detail: chronological message bubbles plus the input line.
//!
//! The current user's messages render right-aligned in the accent color;
//! incoming messages render left-aligned on the bubble background.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::App;

use super::chats::render_chat_list;
use super::helpers::{avatar_color, initials, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_BG, COLOR_BUBBLE, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub fn render_chat_detail(frame: &mut Frame, area: Rect, app: &App) {
    // The open chat id is validated on entry, but fall back to the list if
    // it no longer resolves.
    let Some(chat) = app.open_chat_id.as_deref().and_then(|id| app.store.chat(id)) else {
        render_chat_list(frame, area, app);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // counterparty header
            Constraint::Min(1),    // bubbles
            Constraint::Length(3), // input
        ])
        .split(area);

    let header_lines = vec![
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!(" {} ", initials(&chat.user_name)),
                Style::default()
                    .fg(COLOR_BG)
                    .bg(avatar_color(&chat.user_avatar)),
            ),
            Span::raw(" "),
            Span::styled(
                chat.user_name.clone(),
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Esc] Back", Style::default().fg(COLOR_DIM)),
        ]),
        Line::from(Span::styled(
            "─".repeat(chunks[0].width as usize),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(header_lines), chunks[0]);

    // Bubbles take at most two thirds of the width so the alignment reads
    // as left/right sides.
    let me = app.store.identity().id.clone();
    let bubble_width = ((chunks[1].width as usize * 2) / 3).max(8);

    let mut lines: Vec<Line> = Vec::new();
    for message in &chat.messages {
        let own = message.sender_id == me;
        for row in wrap_text(&message.preview(), bubble_width) {
            let span = if own {
                Span::styled(
                    format!(" {} ", row),
                    Style::default().fg(COLOR_BG).bg(COLOR_ACCENT),
                )
            } else {
                Span::styled(
                    format!(" {} ", row),
                    Style::default().fg(COLOR_TEXT).bg(COLOR_BUBBLE),
                )
            };
            let line = Line::from(span);
            lines.push(if own {
                line.alignment(Alignment::Right)
            } else {
                line
            });
        }
        lines.push(Line::from(""));
    }

    // Keep the newest messages in view.
    let viewport = chunks[1].height as usize;
    if lines.len() > viewport {
        lines.drain(..lines.len() - viewport);
    }
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    app.chat_input
        .render_with_title(chunks[2], frame.buffer_mut(), " Message ", true);
}
