use unicode_width::UnicodeWidthStr;

/// Multi-line text buffer with a cursor kept on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize, // byte offset into `text`
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole buffer, cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert `text` at the cursor, normalising `\r\n` and lone `\r` to `\n`.
    pub fn insert_str(&mut self, text: &str) {
        let normalised = text.replace("\r\n", "\n").replace('\r', "\n");
        self.text.insert_str(self.cursor, &normalised);
        self.cursor += normalised.len();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn delete(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.text.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    /// Start of the line the cursor is on.
    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// End of the line the cursor is on.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|i| self.cursor + i)
            .unwrap_or(self.text.len());
    }

    /// Zero-based line and display column of the cursor.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start()..].width();
        (line, column)
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn line_start(&self) -> usize {
        self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(s: &str) -> TextInput {
        let mut input = TextInput::new();
        for c in s.chars() {
            input.insert_char(c);
        }
        input
    }

    #[test]
    fn test_typing_appends() {
        let input = typed("test");
        assert_eq!(input.as_str(), "test");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut input = typed("aöb");
        input.backspace();
        input.backspace();
        assert_eq!(input.as_str(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = typed("ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.as_str(), "ab");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_left_right_over_emoji() {
        let mut input = typed("👋🌍");
        input.move_left();
        assert_eq!(input.cursor(), 4);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_right();
        assert_eq!(input.cursor(), 4);
        input.delete();
        assert_eq!(input.as_str(), "👋");
        input.move_right();
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = typed("ac");
        input.move_left();
        input.insert_char('b');
        assert_eq!(input.as_str(), "abc");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_home_end_are_line_relative() {
        let mut input = typed("first");
        input.insert_newline();
        for c in "second".chars() {
            input.insert_char(c);
        }
        input.move_home();
        assert_eq!(input.cursor(), 6);
        input.move_left();
        input.move_home();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_cursor_position_uses_display_width() {
        let mut input = typed("line one");
        input.insert_newline();
        input.insert_char('漢');
        input.insert_char('x');
        assert_eq!(input.cursor_position(), (1, 3));
    }

    #[test]
    fn test_insert_str_keeps_newlines() {
        let mut input = typed("[]");
        input.move_left();
        input.insert_str("a\r\nb\rc");
        assert_eq!(input.as_str(), "[a\nb\nc]");
        assert_eq!(input.cursor(), 6);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new();
        input.set_text("hello");
        assert_eq!(input.cursor(), 5);
        assert_eq!(input.char_count(), 5);
        assert!(!input.is_empty());
    }
}
