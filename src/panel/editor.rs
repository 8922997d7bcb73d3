//! Multi-line text buffer backing the configuration editor

/// Line-based text buffer with a character cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArea {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextArea {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextArea {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the whole buffer and move the cursor to the start.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.lines().map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = 0;
        self.col = 0;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn insert_char(&mut self, c: char) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        self.lines[self.row].insert(offset, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let offset = byte_offset(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(offset);
        self.row += 1;
        self.lines.insert(self.row, rest);
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let offset = byte_offset(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(offset);
            self.col -= 1;
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&line);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        }
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_round_trip() {
        let mut area = TextArea::default();
        area.set_text("{\n  \"a\": 1\n}");
        assert_eq!(area.lines().len(), 3);

        area.move_down();
        area.move_right();
        area.move_right();
        area.insert_char('x');
        assert_eq!(area.lines()[1], "  x\"a\": 1");

        area.backspace();
        area.backspace();
        area.backspace();
        assert_eq!(area.text(), "{\n\"a\": 1\n}");

        // at column 0 backspace joins with the previous line
        area.backspace();
        assert_eq!(area.text(), "{\"a\": 1\n}");
    }

    #[test]
    fn test_newline_splits_line_with_multibyte_chars() {
        let mut area = TextArea::default();
        area.set_text("héllo");
        area.move_right();
        area.move_right();
        area.insert_newline();
        assert_eq!(area.lines(), ["hé", "llo"]);
        assert_eq!(area.cursor(), (1, 0));

        area.backspace();
        assert_eq!(area.text(), "héllo");
    }
}
