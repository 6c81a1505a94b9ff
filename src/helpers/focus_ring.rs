//! Focus ring
//!
//! Ordered set of focusable ids with Tab / Shift-Tab cycling. Used by modal
//! dialogs to keep keyboard focus inside the dialog.

#[derive(Debug, Clone)]
pub struct FocusRing<Id> {
    items: Vec<Id>,
    current: Option<usize>,
}

impl<Id: Clone + PartialEq> FocusRing<Id> {
    pub fn new(items: Vec<Id>) -> Self {
        Self {
            items,
            current: None,
        }
    }

    pub fn items(&self) -> &[Id] {
        &self.items
    }

    /// Replace the focusable set, keeping focus on the same id if it survives
    pub fn set_items(&mut self, items: Vec<Id>) {
        let current = self.current().cloned();
        self.items = items;
        self.current = current.and_then(|id| self.items.iter().position(|i| i == &id));
    }

    pub fn current(&self) -> Option<&Id> {
        self.current.and_then(|i| self.items.get(i))
    }

    /// Focus the first element
    pub fn activate(&mut self) -> Option<&Id> {
        self.current = if self.items.is_empty() { None } else { Some(0) };
        self.current()
    }

    /// Move focus forward, or backward when `shift` is held, wrapping at the ends
    pub fn tab(&mut self, shift: bool) -> Option<&Id> {
        let len = self.items.len();
        if len == 0 {
            self.current = None;
            return None;
        }
        let next = match (self.current, shift) {
            (None, false) => 0,
            (None, true) => len - 1,
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
        };
        self.current = Some(next);
        self.current()
    }

    /// Sync the position after focus moved by pointer. Unknown ids are ignored.
    pub fn focus(&mut self, id: &Id) -> bool {
        match self.items.iter().position(|i| i == id) {
            Some(index) => {
                self.current = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn blur(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_wraps_forward() {
        let mut ring = FocusRing::new(vec!["close", "cancel", "confirm"]);
        assert_eq!(ring.activate(), Some(&"close"));
        ring.tab(false);
        ring.tab(false);
        assert_eq!(ring.current(), Some(&"confirm"));
        assert_eq!(ring.tab(false), Some(&"close"));
    }

    #[test]
    fn test_shift_tab_wraps_backward() {
        let mut ring = FocusRing::new(vec!["close", "cancel", "confirm"]);
        ring.activate();
        assert_eq!(ring.tab(true), Some(&"confirm"));
        assert_eq!(ring.tab(true), Some(&"cancel"));
    }

    #[test]
    fn test_focus_syncs_position() {
        let mut ring = FocusRing::new(vec![1, 2, 3]);
        assert!(ring.focus(&2));
        assert_eq!(ring.tab(false), Some(&3));
        assert!(!ring.focus(&9));
        assert_eq!(ring.current(), Some(&3));
    }

    #[test]
    fn test_empty_ring_has_no_focus() {
        let mut ring: FocusRing<u8> = FocusRing::new(Vec::new());
        assert_eq!(ring.activate(), None);
        assert_eq!(ring.tab(false), None);
        assert_eq!(ring.tab(true), None);
    }

    #[test]
    fn test_set_items_keeps_focus() {
        let mut ring = FocusRing::new(vec!["a", "b"]);
        ring.focus(&"b");
        ring.set_items(vec!["x", "b", "y"]);
        assert_eq!(ring.current(), Some(&"b"));
        ring.set_items(vec!["x"]);
        assert_eq!(ring.current(), None);
    }
}
