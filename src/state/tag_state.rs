//! TagState - Free-form tag entry with suggestions and validation

use std::sync::Arc;
use std::time::{Duration, Instant};

use snafu::Snafu;

use crate::constants::TAG_ERROR_DISPLAY_MS;

use super::input_state::{EditKey, TextBuffer};

/// Why a tag was rejected
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
pub enum TagError {
    #[snafu(display("Maximum {max} tags allowed"))]
    MaxTags { max: usize },

    #[snafu(display("Tag already exists"))]
    Duplicate,

    #[snafu(display("{message}"))]
    Invalid { message: String },
}

type Validator = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

pub struct TagState {
    tags: Vec<String>,
    pub input: TextBuffer,
    pub max_tags: Option<usize>,
    pub allow_duplicates: bool,
    pub suggestions: Vec<String>,
    validator: Option<Validator>,
    error: Option<(TagError, Instant)>,
    show_suggestions: bool,
}

impl TagState {
    pub fn new(tags: Vec<String>) -> Self {
        Self {
            tags,
            input: TextBuffer::default(),
            max_tags: None,
            allow_duplicates: false,
            suggestions: Vec::new(),
            validator: None,
            error: None,
            show_suggestions: false,
        }
    }

    pub fn max_tags(mut self, max: usize) -> Self {
        self.max_tags = Some(max);
        self
    }

    pub fn suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn allow_duplicates(mut self) -> Self {
        self.allow_duplicates = true;
        self
    }

    /// Install a validator; `Err(message)` rejects the tag with that message
    pub fn validate(
        mut self,
        validator: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = tags;
    }

    pub fn error(&self) -> Option<&TagError> {
        self.error.as_ref().map(|(e, _)| e)
    }

    pub fn is_full(&self) -> bool {
        self.max_tags.is_some_and(|max| self.tags.len() >= max)
    }

    /// Counter text "n / max" when a limit is set
    pub fn counter_text(&self) -> Option<String> {
        self.max_tags
            .map(|max| format!("{} / {}", self.tags.len(), max))
    }

    /// Add a tag. Blank input is ignored (`Ok(false)`).
    pub fn add(&mut self, tag: &str, now: Instant) -> Result<bool, TagError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Ok(false);
        }
        if let Err(error) = self.check(tag) {
            self.error = Some((error.clone(), now));
            return Err(error);
        }
        self.tags.push(tag.to_string());
        self.input.clear();
        self.error = None;
        self.show_suggestions = false;
        Ok(true)
    }

    fn check(&self, tag: &str) -> Result<(), TagError> {
        if let Some(max) = self.max_tags {
            if self.tags.len() >= max {
                return MaxTagsSnafu { max }.fail();
            }
        }
        if !self.allow_duplicates && self.tags.iter().any(|t| t == tag) {
            return DuplicateSnafu.fail();
        }
        if let Some(validator) = &self.validator {
            validator(tag).map_err(|message| TagError::Invalid { message })?;
        }
        Ok(())
    }

    /// Remove every tag equal to `tag`
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.error = None;
        before != self.tags.len()
    }

    /// Handle a key. Returns whether the tag list changed.
    pub fn key(&mut self, key: &EditKey, now: Instant) -> bool {
        match key {
            EditKey::Enter => {
                let input = self.input.text().to_string();
                let candidate = if !input.trim().is_empty() {
                    Some(input)
                } else {
                    self.filtered_suggestions().first().map(|s| s.to_string())
                };
                match candidate {
                    Some(tag) => self.add(&tag, now).unwrap_or(false),
                    None => false,
                }
            }
            EditKey::Backspace if self.input.is_empty() => match self.tags.pop() {
                Some(_) => {
                    self.error = None;
                    true
                }
                None => false,
            },
            EditKey::Escape => {
                self.show_suggestions = false;
                self.input.clear();
                false
            }
            _ if self.is_full() => false,
            other => {
                if self.input.apply(other) {
                    self.error = None;
                    self.show_suggestions =
                        !self.suggestions.is_empty() && !self.input.is_empty();
                }
                false
            }
        }
    }

    /// Suggestion click
    pub fn pick_suggestion(&mut self, suggestion: &str, now: Instant) -> Result<bool, TagError> {
        self.add(suggestion, now)
    }

    /// Suggestions containing the input, excluding existing tags unless
    /// duplicates are allowed. Empty when the limit is reached.
    pub fn filtered_suggestions(&self) -> Vec<&str> {
        if self.is_full() {
            return Vec::new();
        }
        let query = self.input.text().to_lowercase();
        self.suggestions
            .iter()
            .filter(|s| s.to_lowercase().contains(&query))
            .filter(|s| self.allow_duplicates || !self.tags.contains(s))
            .map(String::as_str)
            .collect()
    }

    pub fn shows_suggestions(&self) -> bool {
        self.show_suggestions && !self.filtered_suggestions().is_empty()
    }

    /// Focus: reopen suggestions when there is input to match
    pub fn focus(&mut self) {
        self.show_suggestions = !self.suggestions.is_empty() && !self.input.is_empty();
    }

    /// Click outside
    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
    }

    /// Clear the error once it has been visible long enough
    pub fn expire_error(&mut self, now: Instant) -> bool {
        let display = Duration::from_millis(TAG_ERROR_DISPLAY_MS);
        match &self.error {
            Some((_, since)) if now.duration_since(*since) >= display => {
                self.error = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_trims_and_ignores_blank() {
        let now = Instant::now();
        let mut state = TagState::new(Vec::new());
        assert_eq!(state.add("  rust  ", now), Ok(true));
        assert_eq!(state.add("   ", now), Ok(false));
        assert_eq!(state.tags(), &["rust".to_string()]);
    }

    #[test]
    fn test_max_tags_and_duplicates() {
        let now = Instant::now();
        let mut state = TagState::new(tags(&["a"])).max_tags(2);
        assert_eq!(state.add("a", now), Err(TagError::Duplicate));
        assert_eq!(state.add("b", now), Ok(true));
        assert_eq!(state.add("c", now), Err(TagError::MaxTags { max: 2 }));
        assert_eq!(
            state.error().map(ToString::to_string).as_deref(),
            Some("Maximum 2 tags allowed")
        );
    }

    #[test]
    fn test_validator_message() {
        let now = Instant::now();
        let mut state = TagState::new(Vec::new()).validate(|tag| {
            if tag.len() > 3 {
                Err("Too long".to_string())
            } else {
                Ok(())
            }
        });
        let error = state.add("toolong", now).expect_err("rejected");
        assert_eq!(error.to_string(), "Too long");
    }

    #[test]
    fn test_enter_uses_first_suggestion() {
        let now = Instant::now();
        let mut state =
            TagState::new(tags(&["react"])).suggestions(tags(&["react", "rust", "ruby"]));
        assert!(state.key(&EditKey::Enter, now));
        assert_eq!(state.tags(), &tags(&["react", "rust"])[..]);
    }

    #[test]
    fn test_backspace_on_empty_removes_last() {
        let now = Instant::now();
        let mut state = TagState::new(tags(&["a", "b"]));
        assert!(state.key(&EditKey::Backspace, now));
        assert_eq!(state.tags(), &tags(&["a"])[..]);

        state.key(&EditKey::Insert("x".into()), now);
        assert!(!state.key(&EditKey::Backspace, now));
        assert_eq!(state.tags().len(), 1);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_suggestions_filter() {
        let now = Instant::now();
        let mut state =
            TagState::new(tags(&["rust"])).suggestions(tags(&["Rust", "rust", "ruby", "go"]));
        state.key(&EditKey::Insert("RU".into()), now);
        assert!(state.shows_suggestions());
        assert_eq!(state.filtered_suggestions(), vec!["Rust", "ruby"]);

        state.key(&EditKey::Escape, now);
        assert!(!state.shows_suggestions());
    }

    #[test]
    fn test_error_expires() {
        let now = Instant::now();
        let mut state = TagState::new(tags(&["a"]));
        let _ = state.add("a", now);
        assert!(!state.expire_error(now + Duration::from_millis(2999)));
        assert!(state.expire_error(now + Duration::from_millis(3000)));
        assert!(state.error().is_none());
    }
}
