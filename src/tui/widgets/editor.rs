use std::cmp;

/// Single-line text editor backing the plant-name field.
/// Cursor position is a character index, not a byte offset.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub value: String,
    pub cursor: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_string(content: &str) -> Self {
        let cursor = content.chars().count();
        Self {
            value: content.to_string(),
            cursor,
        }
    }

    pub fn value(&self) -> String {
        self.value.clone()
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch == '\n' {
            return;
        }
        let col = cmp::min(self.cursor, self.char_count());
        let mut chars: Vec<char> = self.value.chars().collect();
        chars.insert(col, ch);
        self.value = chars.into_iter().collect();
        self.cursor = col + 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn delete_char(&mut self) {
        let col = cmp::min(self.cursor, self.char_count());
        if col == 0 {
            return;
        }
        let mut chars: Vec<char> = self.value.chars().collect();
        chars.remove(col - 1);
        self.value = chars.into_iter().collect();
        self.cursor = col - 1;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = cmp::min(self.cursor + 1, self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_cursor() {
        let mut editor = Editor::from_string("Pthos");
        editor.cursor = 1;
        editor.insert_char('o');
        assert_eq!(editor.value, "Pothos");
        assert_eq!(editor.cursor, 2);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut editor = Editor::from_string("Fern");
        editor.cursor = 0;
        editor.delete_char();
        assert_eq!(editor.value, "Fern");
    }

    #[test]
    fn handles_multibyte_names() {
        let mut editor = Editor::from_string("Mönstera");
        editor.move_end();
        editor.delete_char();
        assert_eq!(editor.value, "Mönster");
        editor.move_home();
        editor.insert_char('Ü');
        assert_eq!(editor.value, "ÜMönster");
    }

    #[test]
    fn ignores_newlines() {
        let mut editor = Editor::new();
        editor.insert_char('\n');
        assert_eq!(editor.value, "");
    }
}
