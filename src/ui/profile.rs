//! Profile tab: identity header plus the user's own posts.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::App;

use super::feed::post_card_lines;
use super::helpers::{avatar_color, initials, window_start};
use super::theme::{COLOR_BG, COLOR_DIM, COLOR_HEADER};

pub fn render_profile(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // identity header
            Constraint::Min(1),    // own posts
        ])
        .split(area);

    let me = app.store.identity();
    let posts = app.store.posts_by_user(&me.id);

    let mut title = vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", initials(&me.nickname)),
            Style::default().fg(COLOR_BG).bg(avatar_color(&me.avatar)),
        ),
        Span::raw(" "),
        Span::styled(
            me.nickname.clone(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if me.is_anonymous {
        title.push(Span::styled("  · anonymous", Style::default().fg(COLOR_DIM)));
    }

    let header = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("   {} posts", posts.len()),
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(Span::styled(
            "─".repeat(chunks[0].width as usize),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    if posts.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "You haven't posted yet.",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let content_width = chunks[1].width.saturating_sub(6) as usize;
    let cards: Vec<Vec<Line>> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| post_card_lines(app, post, i == app.profile_index, content_width, true))
        .collect();

    let heights: Vec<usize> = cards.iter().map(Vec::len).collect();
    let start = window_start(&heights, app.profile_index, chunks[1].height as usize);

    let lines: Vec<Line> = cards.into_iter().skip(start).flatten().collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);
}
