use super::{App, Focus};

// Price fields accept digits and a decimal separator; everything else is
// dropped at the edge.
fn is_price_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ','
}

// Cursor positions count chars; the filter keeps field contents ASCII.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

impl App {
    fn field_mut(&mut self) -> (&mut String, &mut usize) {
        match self.focus {
            Focus::Ethanol => (&mut self.ethanol_input, &mut self.ethanol_cursor),
            Focus::Gasoline => (&mut self.gasoline_input, &mut self.gasoline_cursor),
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if !is_price_char(ch) {
            return;
        }
        let (buf, cursor) = self.field_mut();
        let idx = byte_index(buf, *cursor);
        buf.insert(idx, ch);
        *cursor += 1;
    }

    pub fn insert_text(&mut self, s: &str) {
        for ch in s.chars() {
            self.insert_char(ch);
        }
    }

    pub fn delete_left(&mut self) {
        let (buf, cursor) = self.field_mut();
        if *cursor == 0 {
            return;
        }
        *cursor -= 1;
        let idx = byte_index(buf, *cursor);
        buf.remove(idx);
    }

    pub fn delete_right(&mut self) {
        let (buf, cursor) = self.field_mut();
        if *cursor < buf.chars().count() {
            let idx = byte_index(buf, *cursor);
            buf.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        let (_, cursor) = self.field_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let (buf, cursor) = self.field_mut();
        let len = buf.chars().count();
        if *cursor < len {
            *cursor += 1;
        }
    }

    pub fn move_line_start(&mut self) {
        let (_, cursor) = self.field_mut();
        *cursor = 0;
    }

    pub fn move_line_end(&mut self) {
        let (buf, cursor) = self.field_mut();
        *cursor = buf.chars().count();
    }

    pub fn clear_field(&mut self) {
        let (buf, cursor) = self.field_mut();
        buf.clear();
        *cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::{App, Focus};

    fn app() -> App {
        App::with_history_path(None)
    }

    #[test]
    fn insert_filters_non_price_chars() {
        let mut a = app();
        a.insert_text("a4b.2x9");
        assert_eq!(a.ethanol_input, "4.29");
        assert_eq!(a.ethanol_cursor, 4);
    }

    #[test]
    fn insert_goes_to_focused_field() {
        let mut a = app();
        a.insert_text("3.50");
        a.focus = Focus::Gasoline;
        a.insert_text("5,00");
        assert_eq!(a.ethanol_input, "3.50");
        assert_eq!(a.gasoline_input, "5,00");
    }

    #[test]
    fn delete_and_cursor_movement() {
        let mut a = app();
        a.insert_text("429");
        a.move_left();
        a.insert_char('.');
        assert_eq!(a.ethanol_input, "42.9");
        a.delete_left();
        assert_eq!(a.ethanol_input, "429");
        a.move_line_start();
        a.delete_right();
        assert_eq!(a.ethanol_input, "29");
        a.move_line_end();
        assert_eq!(a.ethanol_cursor, 2);
    }

    #[test]
    fn clear_field_resets_cursor() {
        let mut a = app();
        a.insert_text("6.10");
        a.clear_field();
        assert_eq!(a.ethanol_input, "");
        assert_eq!(a.ethanol_cursor, 0);
    }
}
