//! Column Filters
//!
//! Per-column, case-insensitive substring filters. All active filters are
//! AND-ed together.

use ahash::AHashMap;
use gpui::SharedString;

use super::column::Column;

/// Filter text keyed by column key
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    filters: AHashMap<SharedString, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter for a column. An empty value removes the filter.
    pub fn set(&mut self, key: impl Into<SharedString>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            self.filters.remove(&key);
        } else {
            self.filters.insert(key, value);
        }
    }

    /// Current filter text for a column (empty when unset)
    pub fn get(&self, key: &str) -> &str {
        self.filters.get(key).map(String::as_str).unwrap_or("")
    }

    /// Whether any filter is active
    pub fn is_active(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Whether a row passes every active filter.
    ///
    /// Filters naming an unknown column are ignored.
    pub fn matches<R: 'static>(&self, columns: &[Column<R>], row: &R) -> bool {
        self.filters.iter().all(|(key, needle)| {
            let Some(column) = columns.iter().find(|c| &c.key == key) else {
                return true;
            };
            column
                .value(row)
                .filter_text()
                .contains(&needle.to_lowercase())
        })
    }
}

/// Indices of the rows that pass all filters, in their original order
pub fn filter_indices<R: 'static>(
    rows: &[R],
    columns: &[Column<R>],
    filters: &FilterState,
) -> Vec<usize> {
    if !filters.is_active() {
        return (0..rows.len()).collect();
    }
    rows.iter()
        .enumerate()
        .filter(|(_, row)| filters.matches(columns, row))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column<(&'static str, &'static str)>> {
        vec![
            Column::new("name", "Name", |r: &(&str, &str)| r.0).filterable(),
            Column::new("role", "Role", |r: &(&str, &str)| r.1).filterable(),
        ]
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let rows = vec![("Bob", "Admin"), ("Ann", "User"), ("Cid", "admin")];
        let mut filters = FilterState::new();
        filters.set("role", "ADMIN");

        assert_eq!(filter_indices(&rows, &columns(), &filters), vec![0, 2]);
    }

    #[test]
    fn test_filters_are_anded() {
        let rows = vec![("Bob", "Admin"), ("Ann", "User"), ("Cid", "admin")];
        let mut filters = FilterState::new();
        filters.set("role", "admin");
        filters.set("name", "c");

        assert_eq!(filter_indices(&rows, &columns(), &filters), vec![2]);
    }

    #[test]
    fn test_empty_value_removes_filter() {
        let rows = vec![("Bob", "Admin"), ("Ann", "User")];
        let mut filters = FilterState::new();
        filters.set("name", "zzz");
        assert!(filter_indices(&rows, &columns(), &filters).is_empty());

        filters.set("name", "");
        assert!(!filters.is_active());
        assert_eq!(filter_indices(&rows, &columns(), &filters), vec![0, 1]);
    }

    #[test]
    fn test_unknown_column_is_ignored() {
        let rows = vec![("Bob", "Admin")];
        let mut filters = FilterState::new();
        filters.set("missing", "x");

        assert_eq!(filter_indices(&rows, &columns(), &filters), vec![0]);
    }
}
