//! Feed tab rendering
//!
//! Category filter header plus the post card list. Cards clamp their body
//! to four lines; the detail screen reuses the same card unclamped.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::App;
use crate::models::{Category, Post};

use super::helpers::{avatar_color, format_relative_time, initials, window_start, wrap_text};
use super::theme::{
    COLOR_ACCENT, COLOR_BG, COLOR_DIM, COLOR_HEADER, COLOR_LIKE, COLOR_LIVE, COLOR_TEXT,
};

/// Maximum content lines shown per card in list view
const LIST_CONTENT_LINES: usize = 4;

pub fn render_feed(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // filter bar
            Constraint::Min(1),    // post list
        ])
        .split(area);

    render_filter_bar(frame, chunks[0], app);
    render_post_list(frame, chunks[1], app);
}

// ============================================================================
// Category Filter Bar
// ============================================================================

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];
    spans.push(filter_segment("All", app.feed_filter.is_none()));
    for cat in Category::ALL {
        spans.push(Span::raw(" "));
        spans.push(filter_segment(
            &format!("{} {}", cat.icon(), cat.label()),
            app.feed_filter == Some(cat),
        ));
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn filter_segment(label: &str, active: bool) -> Span<'static> {
    if active {
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .fg(COLOR_BG)
                .bg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(format!(" {} ", label), Style::default().fg(COLOR_DIM))
    }
}

// ============================================================================
// Post List
// ============================================================================

fn render_post_list(frame: &mut Frame, area: Rect, app: &App) {
    let posts = app.visible_posts();

    if posts.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Nothing here yet.",
                Style::default().fg(COLOR_DIM),
            )),
            Line::from(Span::styled(
                "[n] Write something",
                Style::default().fg(COLOR_DIM),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let content_width = area.width.saturating_sub(6) as usize;
    let cards: Vec<Vec<Line>> = posts
        .iter()
        .enumerate()
        .map(|(i, post)| post_card_lines(app, post, i == app.feed_index, content_width, true))
        .collect();

    let heights: Vec<usize> = cards.iter().map(Vec::len).collect();
    let start = window_start(&heights, app.feed_index, area.height as usize);

    let lines: Vec<Line> = cards.into_iter().skip(start).flatten().collect();
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines for one post card.
///
/// `clamp` limits the body to four lines for list views; the detail screen
/// passes `false` to render the full content.
pub(super) fn post_card_lines(
    app: &App,
    post: &Post,
    selected: bool,
    content_width: usize,
    clamp: bool,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let marker = if selected { "▶ " } else { "  " };
    let marker_style = Style::default()
        .fg(COLOR_ACCENT)
        .add_modifier(Modifier::BOLD);
    let name_style = if selected {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT)
    };

    lines.push(Line::from(vec![
        Span::styled(marker, marker_style),
        Span::styled(
            format!(" {} ", initials(&post.user_nickname)),
            Style::default()
                .fg(COLOR_BG)
                .bg(avatar_color(&post.user_avatar)),
        ),
        Span::raw(" "),
        Span::styled(post.user_nickname.clone(), name_style),
        Span::styled(
            format!("  {}", format_relative_time(post.timestamp)),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(
            format!("  {} {}", post.category.icon(), post.category.label()),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]));

    let mut body = wrap_text(&post.content, content_width.max(1));
    if clamp && body.len() > LIST_CONTENT_LINES {
        body.truncate(LIST_CONTENT_LINES);
        if let Some(last) = body.last_mut() {
            last.push('…');
        }
    }
    for row in body {
        lines.push(Line::from(Span::styled(
            format!("    {}", row),
            Style::default().fg(COLOR_TEXT),
        )));
    }

    if post.has_media() {
        let mut media = vec![Span::raw("    ")];
        if !post.images.is_empty() {
            media.push(Span::styled("[Photo]", Style::default().fg(COLOR_DIM)));
        }
        if post.is_live_photo {
            media.push(Span::styled(
                " LIVE",
                Style::default().fg(COLOR_LIVE).add_modifier(Modifier::BOLD),
            ));
        }
        if let Some(duration) = &post.audio {
            media.push(Span::styled(
                format!(" [Audio {}]", duration),
                Style::default().fg(COLOR_DIM),
            ));
        }
        lines.push(Line::from(media));
    }

    let like_style = if app.is_liked(&post.id) {
        Style::default().fg(COLOR_LIKE).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(format!("♥ {}", app.displayed_likes(post)), like_style),
        Span::styled(
            format!("   💬 {}", post.comment_count()),
            Style::default().fg(COLOR_DIM),
        ),
    ]));

    lines.push(Line::from(""));
    lines
}
