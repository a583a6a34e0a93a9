//! UTF-8 safe draft buffer with cursor management.
//!
//! Every presentation surface that accepts typing edits one of these and
//! reports the full new text to the reconciliation core. The cursor is a byte
//! index into the buffer, always on a UTF-8 boundary.

use unicode_width::UnicodeWidthChar;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    /// Cursor byte index into `text` (always on a UTF-8 boundary)
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole buffer and put the cursor at the end.
    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.text.len());
        while !self.text.is_char_boundary(self.cursor) {
            self.cursor -= 1;
        }
    }

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if let Some(ch) = self.text[..self.cursor].chars().last() {
            self.cursor -= ch.len_utf8();
        }
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if let Some(ch) = self.text[..self.cursor].chars().last() {
            let start = self.cursor - ch.len_utf8();
            self.text.drain(start..self.cursor);
            self.cursor = start;
        }
    }

    /// Delete the char under the cursor.
    pub fn delete(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            let end = self.cursor + ch.len_utf8();
            self.text.drain(self.cursor..end);
        }
    }

    /// Display width of the text before the cursor, in terminal columns.
    pub fn cursor_columns(&self) -> usize {
        self.text[..self.cursor]
            .chars()
            .map(|ch| ch.width().unwrap_or(1))
            .sum()
    }

    /// Byte index for a click at display column `column` (relative to the
    /// start of the text).
    pub fn cursor_from_column(&self, column: u16) -> usize {
        let mut width = 0u16;
        for (byte_index, ch) in self.text.char_indices() {
            let w = ch.width().unwrap_or(1) as u16;
            // A wide char owns every column it covers.
            if column < width + w {
                return byte_index;
            }
            width += w;
        }
        self.text.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_move_backspace_are_utf8_safe() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("h🙂llo"); // emoji is 4 bytes
        buffer.set_cursor(1); // between h and 🙂
        buffer.insert_char('e');
        assert_eq!(buffer.text(), "he🙂llo");
        buffer.move_right(); // step over 🙂
        buffer.backspace(); // delete 🙂
        assert_eq!(buffer.text(), "hello");
        buffer.move_left(); // cursor onto the e
        buffer.delete(); // removes the char under the cursor
        assert_eq!(buffer.text(), "hllo");
    }

    #[test]
    fn set_cursor_snaps_to_char_boundary() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("a🙂b");
        buffer.set_cursor(2); // inside the emoji
        assert_eq!(buffer.cursor(), 1);
    }

    #[test]
    fn home_and_end() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("abc");
        buffer.move_home();
        assert_eq!(buffer.cursor(), 0);
        buffer.move_end();
        assert_eq!(buffer.cursor(), 3);
    }

    #[test]
    fn cursor_columns_counts_wide_chars() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("a漢b");
        buffer.move_end();
        assert_eq!(buffer.cursor_columns(), 4);
        buffer.set_cursor("a漢".len());
        assert_eq!(buffer.cursor_columns(), 3);
    }

    #[test]
    fn cursor_from_column_maps_clicks() {
        let mut buffer = InputBuffer::new();
        buffer.set_text("a漢b");
        assert_eq!(buffer.cursor_from_column(0), 0);
        assert_eq!(buffer.cursor_from_column(1), 1);
        // Clicking the second cell of the wide char lands on it, not after.
        assert_eq!(buffer.cursor_from_column(2), 1);
        assert_eq!(buffer.cursor_from_column(3), "a漢".len());
        assert_eq!(buffer.cursor_from_column(9), "a漢b".len());
    }
}
