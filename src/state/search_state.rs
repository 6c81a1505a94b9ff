//! SearchState - Debounced search with persisted recent searches

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::constants::{RECENT_SEARCHES_CAPACITY, RECENT_SEARCHES_KEY, SEARCH_DEBOUNCE_MS};
use crate::helpers::{Debouncer, RecentList};
use crate::storage::{load_json_or_default, save_json, KeyValueStore};

use super::input_state::{EditKey, TextBuffer};

/// What a key press did to the search bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Value edited; report to the owner
    Changed(String),
    /// Explicit search (Enter or a recent search click)
    Submitted(String),
    /// Focus released (Escape)
    Dismissed,
}

pub struct SearchState {
    pub input: TextBuffer,
    focused: bool,
    pub loading: bool,
    pub show_recent_searches: bool,
    debouncer: Debouncer<String>,
    recent: RecentList<String>,
    store: Arc<dyn KeyValueStore>,
}

impl SearchState {
    /// Create a search bar reading recent searches from `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let stored: Vec<String> = load_json_or_default(&*store, RECENT_SEARCHES_KEY);
        Self {
            input: TextBuffer::default(),
            focused: false,
            loading: false,
            show_recent_searches: false,
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            recent: RecentList::from_items(RECENT_SEARCHES_CAPACITY, stored),
            store,
        }
    }

    pub fn debounce(mut self, delay: Duration) -> Self {
        self.debouncer.set_delay(delay);
        self
    }

    pub fn show_recent(mut self) -> Self {
        self.show_recent_searches = true;
        self
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debouncer.delay()
    }

    pub fn value(&self) -> &str {
        self.input.text()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Replace the value (typing or owner write-back) and restart the debounce
    pub fn set_value(&mut self, value: impl Into<String>, now: Instant) {
        self.input.set_text(value);
        self.debouncer.push(self.input.text().to_string(), now);
    }

    /// Debounced value ready to report as a search; empty values never settle
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now).filter(|v| !v.is_empty())
    }

    /// Time until the pending value settles
    pub fn pending_for(&self, now: Instant) -> Option<Duration> {
        self.debouncer.remaining(now)
    }

    /// Handle a key while focused
    pub fn key(&mut self, key: &EditKey, now: Instant) -> Option<SearchEvent> {
        match key {
            EditKey::Enter => self.submit().map(SearchEvent::Submitted),
            EditKey::Escape => {
                self.escape();
                Some(SearchEvent::Dismissed)
            }
            other => {
                if self.input.apply(other) {
                    self.debouncer.push(self.input.text().to_string(), now);
                    Some(SearchEvent::Changed(self.value().to_string()))
                } else {
                    None
                }
            }
        }
    }

    /// Explicit search. Blank values are ignored.
    pub fn submit(&mut self) -> Option<String> {
        let value = self.value().to_string();
        if value.trim().is_empty() {
            return None;
        }
        if self.show_recent_searches {
            self.recent.push(value.clone());
            self.persist_recent();
        }
        self.debouncer.cancel();
        self.focused = false;
        debug!(query = %value, "search submitted");
        Some(value)
    }

    /// Escape: release focus
    pub fn escape(&mut self) {
        self.focused = false;
    }

    /// Clear button: empty the value and keep focus
    pub fn clear(&mut self) {
        self.input.clear();
        self.debouncer.cancel();
        self.focused = true;
    }

    pub fn shows_clear(&self) -> bool {
        !self.input.is_empty()
    }

    /// Recent search click: fill the value and search for it
    pub fn select_recent(&mut self, value: &str) -> Option<String> {
        self.input.set_text(value);
        self.submit()
    }

    pub fn remove_recent(&mut self, value: &str) {
        if self.recent.remove(&value.to_string()) {
            self.persist_recent();
        }
    }

    pub fn recent_searches(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    /// Recent searches are listed when enabled, focused, non-empty and the value is empty
    pub fn shows_recent(&self) -> bool {
        self.show_recent_searches && self.focused && !self.recent.is_empty() && self.input.is_empty()
    }

    fn persist_recent(&self) {
        if let Err(e) = save_json(&*self.store, RECENT_SEARCHES_KEY, &self.recent) {
            warn!(error = %e, "Failed to save recent searches");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{load_json, seed_recent_searches, MemoryStore};

    fn seeded() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        seed_recent_searches(&*store).expect("seed");
        store
    }

    #[test]
    fn test_debounced_value_reported_once() {
        let start = Instant::now();
        let mut search = SearchState::new(Arc::new(MemoryStore::new()));
        search.key(&EditKey::Insert("g".into()), start);
        search.key(&EditKey::Insert("p".into()), start + Duration::from_millis(100));

        assert_eq!(search.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            search.poll(start + Duration::from_millis(400)).as_deref(),
            Some("gp")
        );
        assert_eq!(search.poll(start + Duration::from_millis(800)), None);
    }

    #[test]
    fn test_submit_records_recent_and_unfocuses() {
        let store = seeded();
        let mut search = SearchState::new(store.clone()).show_recent();
        search.focus();
        search.set_value("CSS styling", Instant::now());

        assert_eq!(search.submit().as_deref(), Some("CSS styling"));
        assert!(!search.is_focused());

        let recent: Vec<&str> = search.recent_searches().collect();
        assert_eq!(recent[0], "CSS styling");
        assert_eq!(recent.len(), 5);

        let stored: Vec<String> = load_json(&*store, RECENT_SEARCHES_KEY)
            .expect("load")
            .expect("present");
        assert_eq!(stored[0], "CSS styling");
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut search = SearchState::new(Arc::new(MemoryStore::new())).show_recent();
        search.focus();
        search.set_value("   ", Instant::now());
        assert_eq!(search.submit(), None);
        assert!(search.is_focused());
    }

    #[test]
    fn test_recent_visibility_rules() {
        let mut search = SearchState::new(seeded()).show_recent();
        assert!(!search.shows_recent());

        search.focus();
        assert!(search.shows_recent());

        search.set_value("x", Instant::now());
        assert!(!search.shows_recent());

        search.clear();
        assert!(search.is_focused());
        assert!(search.shows_recent());
    }

    #[test]
    fn test_select_and_remove_recent() {
        let mut search = SearchState::new(seeded()).show_recent();
        assert_eq!(
            search.select_recent("JavaScript hooks").as_deref(),
            Some("JavaScript hooks")
        );
        assert_eq!(search.value(), "JavaScript hooks");

        search.remove_recent("JavaScript hooks");
        assert!(search.recent_searches().all(|s| s != "JavaScript hooks"));
    }

    #[test]
    fn test_escape_dismisses() {
        let mut search = SearchState::new(Arc::new(MemoryStore::new()));
        search.focus();
        assert_eq!(search.key(&EditKey::Escape, Instant::now()), Some(SearchEvent::Dismissed));
        assert!(!search.is_focused());
    }
}
