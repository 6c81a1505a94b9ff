//! TextareaState - Multi-line input with auto-resize and length limit

use crate::constants::TEXTAREA_DEFAULT_ROWS;

use super::input_state::{EditKey, FieldMeta, TextBuffer};

#[derive(Debug, Clone)]
pub struct TextareaState {
    pub buffer: TextBuffer,
    pub meta: FieldMeta,
    pub rows: usize,
    pub min_rows: Option<usize>,
    pub max_rows: Option<usize>,
    pub auto_resize: bool,
    pub max_length: Option<usize>,
    pub show_char_count: bool,
}

impl Default for TextareaState {
    fn default() -> Self {
        Self {
            buffer: TextBuffer::default(),
            meta: FieldMeta::default(),
            rows: TEXTAREA_DEFAULT_ROWS,
            min_rows: None,
            max_rows: None,
            auto_resize: false,
            max_length: None,
            show_char_count: false,
        }
    }
}

impl TextareaState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            buffer: TextBuffer::new(value),
            ..Self::default()
        }
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    /// Replace the value, truncated to `max_length` characters
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value: String = value.into();
        let value = match self.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value,
        };
        self.buffer.set_text(value);
    }

    /// Handle a key. Enter inserts a newline. Returns the new value when it changed.
    ///
    /// Insertions that would exceed `max_length` are rejected whole.
    pub fn key(&mut self, key: &EditKey) -> Option<String> {
        if !self.meta.editable() {
            return None;
        }
        let key = match key {
            EditKey::Enter => EditKey::Insert("\n".to_string()),
            other => other.clone(),
        };
        if let (EditKey::Insert(s), Some(max)) = (&key, self.max_length) {
            if self.buffer.char_count() + s.chars().count() > max {
                return None;
            }
        }
        self.buffer
            .apply(&key)
            .then(|| self.value().to_string())
    }

    /// Clear button click; auto-resizing areas shrink back
    pub fn clear(&mut self) -> Option<String> {
        if !self.meta.shows_clear(!self.buffer.is_empty()) {
            return None;
        }
        self.buffer.clear();
        Some(String::new())
    }

    pub fn shows_clear(&self) -> bool {
        self.meta.shows_clear(!self.buffer.is_empty())
    }

    /// Rows to render.
    ///
    /// Fixed at `rows` unless auto-resizing, in which case the line count is
    /// clamped into `[min_rows, max_rows]`.
    pub fn visible_rows(&self) -> usize {
        if !self.auto_resize {
            return self.rows;
        }
        let lines = self.value().split('\n').count().max(1);
        let mut rows = lines.max(self.min_rows.unwrap_or(1));
        if let Some(max) = self.max_rows {
            rows = rows.min(max);
        }
        rows.max(1)
    }

    /// Character counter text, shown when a limit is set and counting is enabled
    pub fn char_count_text(&self) -> Option<String> {
        match (self.show_char_count, self.max_length) {
            (true, Some(max)) => Some(format!("{} / {}", self.buffer.char_count(), max)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_resize_clamps_rows() {
        let mut area = TextareaState {
            auto_resize: true,
            min_rows: Some(2),
            max_rows: Some(4),
            ..TextareaState::default()
        };
        assert_eq!(area.visible_rows(), 2);
        area.set_value("a\nb\nc");
        assert_eq!(area.visible_rows(), 3);
        area.set_value("1\n2\n3\n4\n5\n6");
        assert_eq!(area.visible_rows(), 4);
    }

    #[test]
    fn test_fixed_rows_without_auto_resize() {
        let area = TextareaState::new("1\n2\n3\n4\n5");
        assert_eq!(area.visible_rows(), TEXTAREA_DEFAULT_ROWS);
    }

    #[test]
    fn test_max_length_rejects_input() {
        let mut area = TextareaState {
            max_length: Some(3),
            show_char_count: true,
            ..TextareaState::new("ab")
        };
        assert_eq!(area.key(&EditKey::Insert("c".into())), Some("abc".to_string()));
        assert_eq!(area.key(&EditKey::Insert("d".into())), None);
        assert_eq!(area.char_count_text().as_deref(), Some("3 / 3"));
    }

    #[test]
    fn test_enter_inserts_newline() {
        let mut area = TextareaState::new("a");
        assert_eq!(area.key(&EditKey::Enter), Some("a\n".to_string()));
    }

    #[test]
    fn test_counter_needs_limit() {
        let area = TextareaState {
            show_char_count: true,
            ..TextareaState::new("abc")
        };
        assert_eq!(area.char_count_text(), None);
    }
}
