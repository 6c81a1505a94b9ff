//! Bounded most-recently-used list
//!
//! A fixed-capacity list that keeps the newest item first, removes
//! duplicates on insert and evicts the oldest item when full.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// A bounded list with MRU ordering
///
/// Pushing an item that is already present moves it to the front instead of
/// storing it twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
pub struct RecentList<T: Clone + PartialEq> {
    cap: usize,
    buf: VecDeque<T>,
}

impl<T: Clone + PartialEq> RecentList<T> {
    /// Create a new list with the specified capacity
    ///
    /// A capacity of 0 makes every push a no-op.
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            buf: VecDeque::with_capacity(cap.min(64)),
        }
    }

    /// Build from items ordered newest first, keeping the first `cap` unique ones
    pub fn from_items(cap: usize, items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new(cap);
        for item in items {
            if list.buf.len() == cap {
                break;
            }
            if !list.buf.contains(&item) {
                list.buf.push_back(item);
            }
        }
        list
    }

    /// Insert at the front, deduplicating and evicting the oldest if full
    pub fn push(&mut self, value: T) {
        if self.cap == 0 {
            return;
        }
        self.buf.retain(|item| item != &value);
        if self.buf.len() == self.cap {
            self.buf.pop_back();
        }
        self.buf.push_front(value);
    }

    /// Remove an item. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.buf.len();
        self.buf.retain(|item| item != value);
        before != self.buf.len()
    }

    /// Iterate newest to oldest
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Most recent item
    pub fn first(&self) -> Option<&T> {
        self.buf.front()
    }

    /// Convert to a Vec, newest first
    pub fn to_vec(&self) -> Vec<T> {
        self.buf.iter().cloned().collect()
    }
}

impl<T: Clone + PartialEq> Default for RecentList<T> {
    fn default() -> Self {
        Self::new(crate::constants::RECENT_SEARCHES_CAPACITY)
    }
}

impl<T: Clone + PartialEq> From<Vec<T>> for RecentList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(crate::constants::RECENT_SEARCHES_CAPACITY, items)
    }
}

impl<T: Clone + PartialEq> From<RecentList<T>> for Vec<T> {
    fn from(list: RecentList<T>) -> Self {
        list.buf.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recent_list_newest_first() {
        let mut list = RecentList::new(3);
        list.push(1);
        list.push(2);
        list.push(3);
        assert_eq!(list.to_vec(), vec![3, 2, 1]);
    }

    #[test]
    fn test_recent_list_eviction() {
        let mut list = RecentList::new(3);
        list.extend_from([1, 2, 3, 4]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.to_vec(), vec![4, 3, 2]);
    }

    #[test]
    fn test_recent_list_dedup_moves_to_front() {
        let mut list = RecentList::new(3);
        list.extend_from([1, 2, 3]);
        list.push(1);
        assert_eq!(list.to_vec(), vec![1, 3, 2]);
    }

    #[test]
    fn test_recent_list_zero_capacity() {
        let mut list = RecentList::new(0);
        list.push(1);
        assert!(list.is_empty());
    }

    #[test]
    fn test_recent_list_remove() {
        let mut list = RecentList::from_items(5, ["a", "b", "a", "c"]);
        assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
        assert!(list.remove(&"b"));
        assert!(!list.remove(&"z"));
        assert_eq!(list.to_vec(), vec!["a", "c"]);
    }

    #[test]
    fn test_recent_list_json_is_plain_array() {
        let list = RecentList::from_items(5, vec!["x".to_string(), "y".to_string()]);
        let json = serde_json::to_string(&list).expect("serialize");
        assert_eq!(json, r#"["x","y"]"#);
        let back: RecentList<String> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, list);
    }

    impl<T: Clone + PartialEq> RecentList<T> {
        fn extend_from<const N: usize>(&mut self, items: [T; N]) {
            for item in items {
                self.push(item);
            }
        }
    }
}
