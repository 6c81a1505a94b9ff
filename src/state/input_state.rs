//! InputState - Text editing and form field state

/// A keyboard edit applied to a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKey {
    Insert(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Enter,
    Escape,
    Tab { shift: bool },
}

/// Text with a cursor. The cursor is a byte offset on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
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

    /// Number of characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the text and move the cursor to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the char before the cursor. Returns whether text changed.
    pub fn backspace(&mut self) -> bool {
        let Some((index, _)) = self.text[..self.cursor].char_indices().next_back() else {
            return false;
        };
        self.text.replace_range(index..self.cursor, "");
        self.cursor = index;
        true
    }

    /// Delete the char after the cursor. Returns whether text changed.
    pub fn delete(&mut self) -> bool {
        let Some(ch) = self.text[self.cursor..].chars().next() else {
            return false;
        };
        self.text
            .replace_range(self.cursor..self.cursor + ch.len_utf8(), "");
        true
    }

    pub fn move_left(&mut self) {
        if let Some((index, _)) = self.text[..self.cursor].char_indices().next_back() {
            self.cursor = index;
        }
    }

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

    /// Apply an editing or cursor key. Returns whether the text changed.
    ///
    /// Keys with no editing meaning (Enter, Escape, Tab, Up, Down) are
    /// left to the caller.
    pub fn apply(&mut self, key: &EditKey) -> bool {
        match key {
            EditKey::Insert(s) => {
                self.insert(s);
                !s.is_empty()
            }
            EditKey::Backspace => self.backspace(),
            EditKey::Delete => self.delete(),
            EditKey::Left => {
                self.move_left();
                false
            }
            EditKey::Right => {
                self.move_right();
                false
            }
            EditKey::Home => {
                self.move_home();
                false
            }
            EditKey::End => {
                self.move_end();
                false
            }
            EditKey::Up
            | EditKey::Down
            | EditKey::Enter
            | EditKey::Escape
            | EditKey::Tab { .. } => false,
        }
    }

    /// Text before and after the cursor, for caret rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.cursor)
    }

    /// Lines of the text, each with the cursor offset when the cursor is on it
    pub fn lines(&self) -> Vec<(&str, Option<usize>)> {
        let mut start = 0;
        let mut cursor_placed = false;
        self.text
            .split('\n')
            .map(|line| {
                let end = start + line.len();
                let offset = (!cursor_placed && (start..=end).contains(&self.cursor))
                    .then(|| self.cursor - start);
                cursor_placed |= offset.is_some();
                start = end + 1;
                (line, offset)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    /// Whether typed text is accepted for this input type
    pub fn accepts(self, s: &str) -> bool {
        match self {
            InputType::Number => s
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')),
            InputType::Tel => s
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' ')),
            _ => !s.contains(['\n', '\r']),
        }
    }
}

/// Message shown below a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldMessage<'a> {
    Error(&'a str),
    Helper(&'a str),
}

/// Presentation flags shared by inputs and textareas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub error: Option<String>,
    pub helper_text: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub read_only: bool,
    pub show_clear_button: bool,
}

impl FieldMeta {
    /// Whether keyboard edits may change the value
    pub fn editable(&self) -> bool {
        !self.disabled && !self.read_only
    }

    /// Error takes precedence over helper text
    pub fn message(&self) -> Option<FieldMessage<'_>> {
        match (&self.error, &self.helper_text) {
            (Some(error), _) => Some(FieldMessage::Error(error)),
            (None, Some(helper)) => Some(FieldMessage::Helper(helper)),
            (None, None) => None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Clear button is shown when enabled, the value is non-empty and the field is editable
    pub fn shows_clear(&self, has_value: bool) -> bool {
        self.show_clear_button && has_value && self.editable()
    }
}

/// Outcome of a key press on a single-line input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Changed(String),
    Submitted(String),
    Cancelled,
}

/// Single-line form input
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub buffer: TextBuffer,
    pub input_type: InputType,
    pub meta: FieldMeta,
}

impl InputState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            buffer: TextBuffer::new(value),
            ..Self::default()
        }
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn meta(mut self, meta: FieldMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.buffer.set_text(value);
    }

    /// Handle a key. Edits are ignored on disabled or read-only fields.
    pub fn key(&mut self, key: &EditKey) -> Option<InputEvent> {
        match key {
            EditKey::Enter => Some(InputEvent::Submitted(self.value().to_string())),
            EditKey::Escape => Some(InputEvent::Cancelled),
            EditKey::Insert(s) if !self.input_type.accepts(s) => None,
            _ if !self.meta.editable() => None,
            _ => self
                .buffer
                .apply(key)
                .then(|| InputEvent::Changed(self.value().to_string())),
        }
    }

    /// Clear button click. Returns the change when the value was cleared.
    pub fn clear(&mut self) -> Option<InputEvent> {
        if !self.shows_clear() {
            return None;
        }
        self.buffer.clear();
        Some(InputEvent::Changed(String::new()))
    }

    pub fn shows_clear(&self) -> bool {
        self.meta.shows_clear(!self.buffer.is_empty())
    }

    /// Text to display; passwords are masked
    pub fn display_text(&self) -> String {
        match self.input_type {
            InputType::Password => "•".repeat(self.buffer.char_count()),
            _ => self.value().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> EditKey {
        EditKey::Insert(s.to_string())
    }

    #[test]
    fn test_buffer_editing_with_cursor() {
        let mut buffer = TextBuffer::new("helo");
        buffer.move_left();
        buffer.apply(&typed("l"));
        assert_eq!(buffer.text(), "hello");
        buffer.move_home();
        assert!(buffer.delete());
        assert_eq!(buffer.text(), "ello");
        assert!(!buffer.backspace());
    }

    #[test]
    fn test_lines_place_cursor_once() {
        let mut buffer = TextBuffer::new("ab\ncd");
        assert_eq!(buffer.lines(), vec![("ab", None), ("cd", Some(2))]);

        buffer.move_home();
        assert_eq!(buffer.lines(), vec![("ab", Some(0)), ("cd", None)]);

        let buffer = TextBuffer::new("ab\n");
        assert_eq!(buffer.lines(), vec![("ab", None), ("", Some(0))]);
    }

    #[test]
    fn test_buffer_handles_multibyte() {
        let mut buffer = TextBuffer::new("héé");
        assert!(buffer.backspace());
        assert_eq!(buffer.text(), "hé");
        buffer.move_left();
        assert_eq!(buffer.split_at_cursor(), ("h", "é"));
    }

    #[test]
    fn test_disabled_input_ignores_edits() {
        let mut input = InputState::new("abc").meta(FieldMeta {
            disabled: true,
            ..FieldMeta::default()
        });
        assert_eq!(input.key(&typed("d")), None);
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_enter_submits() {
        let mut input = InputState::new("");
        assert_eq!(input.key(&typed("a")), Some(InputEvent::Changed("a".into())));
        assert_eq!(input.key(&EditKey::Enter), Some(InputEvent::Submitted("a".into())));
    }

    #[test]
    fn test_number_rejects_letters() {
        let mut input = InputState::new("1").input_type(InputType::Number);
        assert_eq!(input.key(&typed("x")), None);
        assert_eq!(input.key(&typed("2")), Some(InputEvent::Changed("12".into())));
    }

    #[test]
    fn test_clear_button_rules() {
        let meta = FieldMeta {
            show_clear_button: true,
            ..FieldMeta::default()
        };
        let mut input = InputState::new("abc").meta(meta.clone());
        assert!(input.shows_clear());
        assert_eq!(input.clear(), Some(InputEvent::Changed(String::new())));
        assert!(!input.shows_clear());

        let read_only = InputState::new("abc").meta(FieldMeta {
            read_only: true,
            ..meta
        });
        assert!(!read_only.shows_clear());
    }

    #[test]
    fn test_error_precedes_helper() {
        let meta = FieldMeta {
            error: Some("Required".into()),
            helper_text: Some("Your email".into()),
            ..FieldMeta::default()
        };
        assert_eq!(meta.message(), Some(FieldMessage::Error("Required")));
    }

    #[test]
    fn test_password_is_masked() {
        let input = InputState::new("secret").input_type(InputType::Password);
        assert_eq!(input.display_text(), "••••••");
    }
}
