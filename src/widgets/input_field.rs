use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::ui::theme;

/// A single-line text input with cursor handling and scrolling support.
///
/// Features:
/// - Basic text editing (insert, delete, backspace)
/// - Cursor movement (left/right/home/end)
/// - Horizontal scrolling when text exceeds widget width
///
/// The cursor is tracked as a character index, so multi-byte input
/// (emoji, CJK) edits cleanly.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    /// The text content of the field
    content: String,
    /// Current cursor position (character index, 0..=char count)
    cursor: usize,
}

impl InputField {
    /// Create a new empty InputField
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the cursor's character index.
    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Move cursor one position to the left
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to the beginning of the text
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end of the text
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Get the current text content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Get the current cursor position (character index)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set the text content and put the cursor at the end
    pub fn set_value(&mut self, content: String) {
        self.cursor = content.chars().count();
        self.content = content;
    }

    /// Clear all content and reset the cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the field is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Render the field with the given title.
    ///
    /// Scrolls horizontally so the cursor stays visible; the cursor is drawn
    /// as a block over the character it sits on when focused.
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let inner_width = area.width.saturating_sub(2) as usize;

        let border_color = if focused {
            theme::COLOR_ACCENT
        } else {
            theme::COLOR_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width as u16,
            height: if area.height > 2 { 1 } else { 0 },
        };

        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        // Scroll so the cursor stays inside the visible span, leaving one
        // column for the cursor block at the end.
        let scroll_offset = if self.cursor >= inner_width {
            self.cursor - inner_width + 1
        } else {
            0
        };

        let visible_text: String = self
            .content
            .chars()
            .skip(scroll_offset)
            .take(inner_width)
            .collect();

        let text_style = Style::default().fg(theme::COLOR_TEXT);
        for (i, c) in visible_text.chars().enumerate() {
            buf.set_string(
                inner_area.x + i as u16,
                inner_area.y,
                c.to_string(),
                text_style,
            );
        }

        if focused {
            let cursor_x = (self.cursor - scroll_offset) as u16;
            if cursor_x < inner_area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                let cursor_style = Style::default().fg(theme::COLOR_BG).bg(theme::COLOR_ACCENT);
                buf.set_string(
                    inner_area.x + cursor_x,
                    inner_area.y,
                    cursor_char.to_string(),
                    cursor_style,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_field() {
        let input = InputField::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_insert_char() {
        let mut input = InputField::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.value(), "Hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_backspace() {
        let mut input = InputField::new();
        input.insert_char('H');
        input.insert_char('i');
        input.backspace();
        assert_eq!(input.value(), "H");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_delete_char() {
        let mut input = InputField::new();
        input.insert_char('H');
        input.insert_char('i');
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.value(), "H");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_cursor_movement() {
        let mut input = InputField::new();
        input.set_value("Hello".to_string());
        assert_eq!(input.cursor(), 5);

        input.move_cursor_left();
        assert_eq!(input.cursor(), 4);

        input.move_cursor_home();
        assert_eq!(input.cursor(), 0);

        input.move_cursor_right();
        assert_eq!(input.cursor(), 1);

        input.move_cursor_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputField::new();
        input.insert_char('X');

        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor(), 0);

        input.move_cursor_end();
        input.move_cursor_right();
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = InputField::new();
        input.set_value("Hllo".to_string());
        input.move_cursor_home();
        input.move_cursor_right();
        input.insert_char('e');
        assert_eq!(input.value(), "Hello");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputField::new();
        input.insert_char('心');
        input.insert_char('事');
        assert_eq!(input.value(), "心事");
        assert_eq!(input.cursor(), 2);

        // Insert between the two wide characters
        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.value(), "心x事");

        // Backspace removes the inserted char, not a byte
        input.backspace();
        assert_eq!(input.value(), "心事");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_clear() {
        let mut input = InputField::new();
        input.set_value("Hello World".to_string());
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
