//! Boot screen shown while the persisted session flag is being read.

use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

use crate::app::App;

use super::helpers::SPINNER_FRAMES;
use super::theme::{COLOR_ACCENT, COLOR_DIM};

pub fn render_loading_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let spinner = SPINNER_FRAMES[app.tick_count as usize % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(Span::styled(
            format!("{} Hollow", spinner),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Checking session...",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let height = (lines.len() as u16).min(area.height);
    let centered = Rect {
        x: area.x,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width: area.width,
        height,
    };

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, centered);
}
