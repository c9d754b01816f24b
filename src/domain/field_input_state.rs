//! Editing state for a single form field.

/// Length cap for single-line fields (name, email).
pub const SINGLE_LINE_MAX_LENGTH: usize = 256;

/// Length cap for the message body.
pub const MULTI_LINE_MAX_LENGTH: usize = 4096;

/// Text and cursor of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInputState {
    /// The current field value.
    text: String,
    /// Cursor position (character index, not byte).
    cursor_position: usize,
    max_length: usize,
    multiline: bool,
}

impl Default for FieldInputState {
    fn default() -> Self {
        Self::single_line()
    }
}

impl FieldInputState {
    pub fn single_line() -> Self {
        Self {
            text: String::new(),
            cursor_position: 0,
            max_length: SINGLE_LINE_MAX_LENGTH,
            multiline: false,
        }
    }

    pub fn multi_line() -> Self {
        Self {
            text: String::new(),
            cursor_position: 0,
            max_length: MULTI_LINE_MAX_LENGTH,
            multiline: true,
        }
    }

    /// Returns the current text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the cursor position (character index).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replaces the whole value and moves the cursor to its end.
    ///
    /// Input is truncated to the length cap; single-line fields drop newlines.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_text(&mut self, value: &str) {
        let multiline = self.multiline;
        self.text = value
            .chars()
            .filter(|ch| multiline || *ch != '\n')
            .take(self.max_length)
            .collect();
        self.move_cursor_end();
    }

    /// Inserts a character at the current cursor position.
    /// Returns false if the field is full or the character is not accepted.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' && !self.multiline {
            return false;
        }
        if self.text.chars().count() >= self.max_length {
            return false;
        }
        let byte_idx = self.char_to_byte_index(self.cursor_position);
        self.text.insert(byte_idx, ch);
        self.cursor_position += 1;
        true
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    /// Deletes the character at the cursor position (delete key).
    pub fn delete_char_at(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor_position < char_count {
            let byte_idx = self.char_to_byte_index(self.cursor_position);
            let next_byte_idx = self.char_to_byte_index(self.cursor_position + 1);
            self.text.drain(byte_idx..next_byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let char_count = self.text.chars().count();
        if self.cursor_position < char_count {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text.chars().count();
    }

    /// Clears all text and resets cursor.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor_position = 0;
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.char_to_byte_index(self.cursor_position)]
    }

    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(byte_idx, _)| byte_idx)
            .unwrap_or(self.text.len())
    }
}
