//! Compose modal
//!
//! Centered overlay for writing a new post: category picker row, content
//! input, attachment toggles, and an inline validation error line.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::models::Category;

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BG, COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

pub fn render_compose_modal(frame: &mut Frame, app: &App) {
    let Some(compose) = &app.compose else {
        return;
    };

    let area = frame.area();
    let dialog_width = 62u16.min(area.width.saturating_sub(4));
    let dialog_height = 12u16.min(area.height.saturating_sub(2));
    let dialog_area = centered_rect(dialog_width, dialog_height, area);

    // Clear the background behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(Span::styled(
            " New Post ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));
    frame.render_widget(block, dialog_area);

    let inner = Rect {
        x: dialog_area.x + 2,
        y: dialog_area.y + 1,
        width: dialog_area.width.saturating_sub(4),
        height: dialog_area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // category picker
            Constraint::Length(3), // content input
            Constraint::Length(1), // attachment toggles
            Constraint::Length(1), // validation error
            Constraint::Length(1), // key hints
        ])
        .split(inner);

    let mut picker = vec![Span::styled("Category: ", Style::default().fg(COLOR_DIM))];
    for cat in Category::ALL {
        let active = cat == compose.selected_category();
        picker.push(if active {
            Span::styled(
                format!(" {} {} ", cat.icon(), cat.label()),
                Style::default()
                    .fg(COLOR_BG)
                    .bg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", cat.label()), Style::default().fg(COLOR_DIM))
        });
    }
    frame.render_widget(Paragraph::new(Line::from(picker)), chunks[0]);

    compose
        .input
        .render_with_title(chunks[1], frame.buffer_mut(), " What's on your mind? ", true);

    let toggles = Line::from(vec![
        toggle_span("Ctrl+P", "Photo", compose.attach_photo),
        Span::raw("  "),
        toggle_span("Ctrl+L", "LIVE", compose.live_photo),
    ]);
    frame.render_widget(Paragraph::new(toggles), chunks[2]);

    if let Some(error) = &compose.error {
        let error_line = Line::from(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(COLOR_ERROR),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    let hints = Line::from(vec![
        Span::styled(
            "[Enter] Post",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  [Tab] Category  [Esc] Cancel",
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

fn toggle_span(key: &str, label: &str, on: bool) -> Span<'static> {
    let mark = if on { "✓" } else { " " };
    let style = if on {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    Span::styled(format!("[{}] {} ({})", mark, label, key), style)
}
