//! Login screen
//!
//! One-tap anonymous sign-in over the persisted session flag. The screen has
//! three states: idle affordance, pending spinner while the flag write is in
//! flight, and a retryable error line when the write fails.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::app::App;

use super::helpers::{centered_rect, SPINNER_FRAMES};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

pub const HOLLOW_LOGO: &[&str] = &[
    "██╗  ██╗ ██████╗ ██╗     ██╗      ██████╗ ██╗    ██╗",
    "██║  ██║██╔═══██╗██║     ██║     ██╔═══██╗██║    ██║",
    "███████║██║   ██║██║     ██║     ██║   ██║██║ █╗ ██║",
    "██╔══██║██║   ██║██║     ██║     ██║   ██║██║███╗██║",
    "██║  ██║╚██████╔╝███████╗███████╗╚██████╔╝╚███╔███╔╝",
    "╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚══════╝ ╚═════╝  ╚══╝╚══╝ ",
];

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Outer block with double border
    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let inner = area.inner(Margin::new(2, 1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(6), // logo
            Constraint::Length(2), // tagline
            Constraint::Length(7), // sign-in dialog
            Constraint::Min(0),
        ])
        .split(inner);

    let logo_lines: Vec<Line> = HOLLOW_LOGO
        .iter()
        .map(|line| Line::from(Span::styled(*line, Style::default().fg(COLOR_ACCENT))))
        .collect();
    let logo = Paragraph::new(logo_lines).alignment(Alignment::Center);
    frame.render_widget(logo, chunks[1]);

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Say it to the hollow. Nobody knows it's you.",
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let dialog_area = centered_rect(44, chunks[3].height, chunks[3]);
    let dialog_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let spinner = SPINNER_FRAMES[app.tick_count as usize % SPINNER_FRAMES.len()];
    let content: Vec<Line> = if app.login_pending {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Signing in...", spinner),
                Style::default().fg(COLOR_ACCENT),
            )),
        ]
    } else if let Some(err) = &app.login_error {
        vec![
            Line::from(Span::styled(
                format!("✗ {}", err),
                Style::default().fg(COLOR_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] Try again  [q] Quit",
                Style::default().fg(COLOR_DIM),
            )),
        ]
    } else {
        vec![
            Line::from("Start anonymously, no account needed."),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Enter] Sign in",
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  [q] Quit", Style::default().fg(COLOR_DIM)),
            ]),
        ]
    };

    let para = Paragraph::new(content)
        .block(dialog_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, dialog_area);
}
