//! Input field handling for the terminal user interface.

/// A single-line text input with cursor position and active state.
///
/// The cursor counts characters, not bytes, so accented input such as
/// "Manutenção" edits cleanly at any position.
#[derive(Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the cursor into `value`.
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_index();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index();
            self.value.remove(at);
        }
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Whether the field holds no text at all.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_advances_cursor() {
        let mut field = InputField::new();
        for c in "Setor 4".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.value, "Setor 4");
        assert_eq!(field.cursor, 7);
    }

    #[test]
    fn test_accented_input_edits_at_char_boundaries() {
        let mut field = InputField::new();
        for c in "Manutenção".chars() {
            field.handle_char(c);
        }
        assert_eq!(field.cursor, 10);
        field.handle_backspace();
        assert_eq!(field.value, "Manutençã");
        field.move_cursor_left();
        field.handle_delete();
        assert_eq!(field.value, "Manutenç");
        field.handle_char('a');
        assert_eq!(field.value, "Manutença");
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut field = InputField::new();
        for c in "Padrão".chars() {
            field.handle_char(c);
        }
        field.move_cursor_left();
        field.move_cursor_left();
        field.handle_char('r');
        assert_eq!(field.value, "Padrrão");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut field = InputField::new();
        field.handle_char('x');
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor, 0);
        // Backspace on empty is a no-op.
        field.handle_backspace();
        assert!(field.is_empty());
    }
}
