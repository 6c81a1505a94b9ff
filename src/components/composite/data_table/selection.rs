//! Row Selection
//!
//! Selected rows are tracked by absolute index into the filtered and sorted
//! sequence, so a selection survives page navigation.

use std::collections::BTreeSet;
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove a single absolute index
    pub fn toggle(&mut self, index: usize) {
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Select-all for the visible page.
    ///
    /// When the selected count equals the page's row count the selection is
    /// emptied, otherwise it becomes exactly the page's indices.
    pub fn toggle_page(&mut self, page: Range<usize>) {
        if self.selected.len() == page.len() {
            self.selected.clear();
        } else {
            self.selected = page.collect();
        }
    }

    /// Whether every row of the visible page is selected
    pub fn is_page_selected(&self, page: Range<usize>) -> bool {
        !page.is_empty() && page.into_iter().all(|i| self.selected.contains(&i))
    }

    pub fn contains(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected absolute indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_row() {
        let mut selection = SelectionState::new();
        selection.toggle(12);
        assert!(selection.contains(12));
        selection.toggle(12);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_is_a_page_toggle() {
        let mut selection = SelectionState::new();
        selection.toggle_page(2..4);
        assert_eq!(selection.indices().collect::<Vec<_>>(), vec![2, 3]);
        assert!(selection.is_page_selected(2..4));

        selection.toggle_page(2..4);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_replaces_other_pages() {
        let mut selection = SelectionState::new();
        selection.toggle(0);
        selection.toggle_page(10..20);
        assert!(!selection.contains(0));
        assert_eq!(selection.len(), 10);
    }

    #[test]
    fn test_select_all_keys_off_count() {
        let mut selection = SelectionState::new();
        selection.toggle(0);
        selection.toggle(1);
        // two selected on another page, two rows visible: clears
        selection.toggle_page(2..4);
        assert!(selection.is_empty());
    }
}
