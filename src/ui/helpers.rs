//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for formatting, truncation, and common UI patterns.

use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use ratatui::style::Color;
use unicode_width::UnicodeWidthChar;

use super::theme;

/// Spinner frames for pending-state animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// Centered rect for modal overlays, clamped to the containing area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Format a timestamp relative to now, in the compact feed style:
/// under a minute -> "now", then "5m", "3h", "2d".
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let secs = Utc::now().signed_duration_since(timestamp).num_seconds();
    if secs < 60 {
        "now".to_string()
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// Truncate a string to at most `max_width` display columns, appending "…"
/// if anything was cut. Width-aware so CJK and emoji don't overflow rows.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return s.to_string();
    }
    let target = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Greedy word wrap to `max_width` display columns.
///
/// Words longer than the width are split mid-word, so CJK text (no spaces)
/// still wraps instead of overflowing.
pub fn wrap_text(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in s.split_whitespace() {
        let word_width: usize = word.chars().map(|c| c.width().unwrap_or(0)).sum();

        if word_width > max_width {
            // Flush what we have, then split the long word by columns.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut piece = String::new();
            let mut piece_width = 0;
            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if piece_width + w > max_width {
                    lines.push(std::mem::take(&mut piece));
                    piece_width = 0;
                }
                piece.push(c);
                piece_width += w;
            }
            current = piece;
            current_width = piece_width;
            continue;
        }

        let sep = if current.is_empty() { 0 } else { 1 };
        if current_width + sep + word_width > max_width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Map a named avatar tint to its terminal color.
pub fn avatar_color(tint: &str) -> Color {
    match tint {
        "emerald" => Color::Rgb(5, 150, 105),
        "green" => Color::Rgb(34, 197, 94),
        "amber" => Color::Rgb(245, 158, 11),
        "sky" => Color::Rgb(14, 165, 233),
        "indigo" => Color::Rgb(99, 102, 241),
        "rose" => Color::Rgb(244, 63, 94),
        "stone" => Color::Rgb(120, 113, 108),
        _ => theme::COLOR_BORDER,
    }
}

/// Initials for an avatar block: first letter of the first two words,
/// uppercased. Falls back to "?" for empty names.
pub fn initials(name: &str) -> String {
    let mut out = String::new();
    for word in name.split_whitespace().take(2) {
        if let Some(c) = word.chars().next() {
            out.extend(c.to_uppercase());
        }
    }
    if out.is_empty() {
        out.push('?');
    }
    out
}

/// First index of a list window so the selected entry fits in the viewport.
///
/// `heights` holds the row height of each entry; the window starts at the
/// smallest index that still lets the selected entry render fully.
pub fn window_start(heights: &[usize], selected: usize, viewport: usize) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let selected = selected.min(heights.len() - 1);
    let mut start = 0;
    while start < selected {
        let used: usize = heights[start..=selected].iter().sum();
        if used <= viewport {
            break;
        }
        start += 1;
    }
    start
}
