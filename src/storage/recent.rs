//! Sample recent searches for the search bar

use tracing::info;

use super::{load_json, save_json, KeyValueStore};
use crate::constants::RECENT_SEARCHES_KEY;
use crate::error::Result;

pub const SAMPLE_RECENT_SEARCHES: [&str; 5] = [
    "React components",
    "TypeScript tutorial",
    "CSS styling",
    "JavaScript hooks",
    "UI design patterns",
];

/// Write the sample searches when none are stored yet.
///
/// Returns whether anything was written. Existing non-empty lists are left
/// alone, so calling this more than once is harmless.
pub fn seed_recent_searches(store: &dyn KeyValueStore) -> Result<bool> {
    let existing: Option<Vec<String>> = load_json(store, RECENT_SEARCHES_KEY).unwrap_or(None);
    if existing.is_some_and(|list| !list.is_empty()) {
        return Ok(false);
    }
    save_json(store, RECENT_SEARCHES_KEY, &SAMPLE_RECENT_SEARCHES)?;
    info!(count = SAMPLE_RECENT_SEARCHES.len(), "Seeded recent searches");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_seed_writes_samples_once() {
        let store = MemoryStore::new();
        assert!(seed_recent_searches(&store).expect("seed"));
        assert!(!seed_recent_searches(&store).expect("seed again"));

        let stored: Vec<String> = load_json(&store, RECENT_SEARCHES_KEY)
            .expect("load")
            .expect("present");
        assert_eq!(stored.len(), 5);
        assert_eq!(stored[0], "React components");
    }

    #[test]
    fn test_seed_keeps_user_searches() {
        let store = MemoryStore::new();
        save_json(&store, RECENT_SEARCHES_KEY, &["gpui"]).expect("save");
        assert!(!seed_recent_searches(&store).expect("seed"));
    }

    #[test]
    fn test_seed_replaces_empty_list() {
        let store = MemoryStore::new();
        save_json(&store, RECENT_SEARCHES_KEY, &Vec::<String>::new()).expect("save");
        assert!(seed_recent_searches(&store).expect("seed"));
    }
}
