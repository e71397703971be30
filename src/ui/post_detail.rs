//! Post detail screen
//!
//! The full card (unclamped) plus its comments in insertion order. A post id
//! that no longer resolves renders a fallback instead of a blank screen.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::App;

use super::feed::post_card_lines;
use super::helpers::{avatar_color, format_relative_time, initials, inner_rect, wrap_text};
use super::theme::{COLOR_ACCENT, COLOR_BG, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TEXT};

pub fn render_post_detail(frame: &mut Frame, app: &App, post_id: &str) {
    let area = frame.area();

    let block = Block::default()
        .title(Span::styled(
            " Post ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, area);

    let inner = inner_rect(area, 1);

    let Some(post) = app.store.post(post_id) else {
        let missing = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "This post is gone.",
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(""),
            Line::from(Span::styled("[Esc] Back", Style::default().fg(COLOR_DIM))),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(missing, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // card + comments
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    let content_width = chunks[0].width.saturating_sub(6) as usize;
    let mut lines = post_card_lines(app, post, false, content_width, false);

    lines.push(Line::from(Span::styled(
        format!("Comments ({})", post.comment_count()),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "─".repeat(chunks[0].width as usize),
        Style::default().fg(COLOR_DIM),
    )));

    if post.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No comments yet.",
            Style::default().fg(COLOR_DIM),
        )));
    } else {
        for comment in &post.comments {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", initials(&comment.nickname)),
                    Style::default()
                        .fg(COLOR_BG)
                        .bg(avatar_color(&comment.user_avatar)),
                ),
                Span::raw(" "),
                Span::styled(comment.nickname.clone(), Style::default().fg(COLOR_TEXT)),
                Span::styled(
                    format!("  {}", format_relative_time(comment.timestamp)),
                    Style::default().fg(COLOR_DIM),
                ),
            ]));
            for row in wrap_text(&comment.content, content_width.max(1)) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", row),
                    Style::default().fg(COLOR_TEXT),
                )));
            }
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("[l] Like", Style::default().fg(COLOR_ACCENT)),
        Span::styled("  [Esc] Back", Style::default().fg(COLOR_DIM)),
    ]));
    frame.render_widget(hints, chunks[1]);
}
