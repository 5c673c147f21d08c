use unicode_width::UnicodeWidthStr;

/// Single-line text field backing the task input box.
///
/// The caret is tracked as a character index so multi-byte input never
/// splits a code point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            cursor: 0,
        }
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as a character index.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the text is empty or whitespace only.
    ///
    /// A byte order mark (U+FEFF) counts as whitespace here.
    pub fn is_blank(&self) -> bool {
        self.text.chars().all(is_blank_char)
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Replace the whole text and move the caret to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Insert text at the caret and move the caret past it.
    pub fn insert_str(&mut self, s: &str) {
        let idx = self.byte_index(self.cursor);
        self.text.insert_str(idx, s);
        self.cursor += s.chars().count();
    }

    /// Delete the character before the caret.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.text.remove(idx);
    }

    /// Delete the character under the caret.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub const fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub const fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Terminal columns occupied by the text before the caret.
    pub fn display_width_before_cursor(&self) -> usize {
        let idx = self.byte_index(self.cursor);
        self.text[..idx].width()
    }
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
