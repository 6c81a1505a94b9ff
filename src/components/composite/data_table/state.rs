//! Table State
//!
//! The DataTable's transformation pipeline: rows are filtered, sorted and
//! sliced into pages, and selection is tracked by absolute index. The
//! processed order is rebuilt from scratch after every mutation.

use std::ops::Range;
use std::sync::Arc;

use gpui::SharedString;
use tracing::debug;

use super::column::Column;
use super::filter::{filter_indices, FilterState};
use super::paging::{PaginationConfig, PaginationState};
use super::selection::SelectionState;
use super::sort::{sort_indices, SortDirection, SortState};

/// Table-level feature flags, all off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableOptions {
    pub sortable: bool,
    pub filterable: bool,
    pub selectable: bool,
    pub loading: bool,
}

/// A row on the visible page
#[derive(Debug)]
pub struct PageRow<'a, R> {
    /// Position in the filtered and sorted sequence
    pub absolute_index: usize,
    /// Position within the visible page
    pub page_index: usize,
    pub row: &'a R,
}

pub struct TableState<R> {
    rows: Arc<Vec<R>>,
    columns: Vec<Column<R>>,
    options: TableOptions,
    filters: FilterState,
    sort: SortState,
    selection: SelectionState,
    pagination: Option<PaginationState>,
    processed: Vec<usize>,
}

impl<R: 'static> TableState<R> {
    pub fn new(rows: impl Into<Arc<Vec<R>>>, columns: Vec<Column<R>>) -> Self {
        let mut state = Self {
            rows: rows.into(),
            columns,
            options: TableOptions::default(),
            filters: FilterState::new(),
            sort: SortState::default(),
            selection: SelectionState::new(),
            pagination: None,
            processed: Vec::new(),
        };
        state.recompute();
        state
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self.recompute();
        self
    }

    pub fn with_pagination(mut self, config: PaginationConfig) -> Self {
        self.pagination = Some(PaginationState::new(config));
        self.recompute();
        self
    }

    pub fn rows(&self) -> &Arc<Vec<R>> {
        &self.rows
    }

    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    pub fn options(&self) -> TableOptions {
        self.options
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn pagination(&self) -> Option<&PaginationState> {
        self.pagination.as_ref()
    }

    /// Replace the row set. Clears the selection.
    pub fn set_rows(&mut self, rows: impl Into<Arc<Vec<R>>>) {
        self.rows = rows.into();
        self.selection.clear();
        self.recompute();
    }

    /// Replace the column set. Filters and sort on removed columns are dropped.
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
        self.filters.clear();
        self.sort.clear();
        self.selection.clear();
        self.recompute();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.options.loading
    }

    /// Set the filter text for a column.
    ///
    /// Ignored when filtering is disabled or the column is not filterable.
    /// Resets to page 1 and clears the selection.
    pub fn set_filter(&mut self, key: &str, query: impl Into<String>) {
        if !self.options.filterable {
            return;
        }
        let Some(column) = self.columns.iter().find(|c| c.key.as_ref() == key) else {
            return;
        };
        if !column.filterable {
            return;
        }
        let query = query.into();
        if self.filters.get(key) == query {
            return;
        }
        debug!(column = key, query = %query, "table filter changed");
        self.filters.set(column.key.clone(), query);
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.reset();
        }
        self.selection.clear();
        self.recompute();
    }

    pub fn filter_text(&self, key: &str) -> &str {
        self.filters.get(key)
    }

    /// Header click on `key`. Returns whether the sort state changed.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if !self.options.sortable {
            return false;
        }
        let Some(column) = self.columns.iter().find(|c| c.key.as_ref() == key) else {
            return false;
        };
        if !column.sortable {
            return false;
        }
        let key: SharedString = column.key.clone();
        self.sort.toggle(key);
        debug!(column = %column.key, direction = ?self.sort.direction(), "table sort changed");
        self.selection.clear();
        self.recompute();
        true
    }

    pub fn sort_direction(&self, key: &str) -> SortDirection {
        self.sort.direction_for(key)
    }

    /// Row indices into `rows()` in filtered and sorted order
    pub fn processed(&self) -> &[usize] {
        &self.processed
    }

    /// Number of rows after filtering
    pub fn total_rows(&self) -> usize {
        self.processed.len()
    }

    pub fn current_page(&self) -> usize {
        self.pagination
            .as_ref()
            .map(PaginationState::current_page)
            .unwrap_or(1)
    }

    pub fn total_pages(&self) -> usize {
        self.pagination
            .as_ref()
            .map(|p| p.total_pages(self.processed.len()))
            .unwrap_or(1)
    }

    /// Whether the pagination footer should be shown
    pub fn shows_pagination(&self) -> bool {
        self.pagination.is_some() && self.total_pages() > 1
    }

    /// Navigate to `page`, clamped. Returns the new page when it changed.
    pub fn go_to_page(&mut self, page: usize) -> Option<usize> {
        let total = self.processed.len();
        let changed = self.pagination.as_mut()?.go_to(page, total);
        if let Some(page) = changed {
            debug!(page, "table page changed");
        }
        changed
    }

    pub fn next_page(&mut self) -> Option<usize> {
        self.go_to_page(self.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> Option<usize> {
        self.go_to_page(self.current_page().saturating_sub(1))
    }

    /// Absolute index range of the visible page
    pub fn page_range(&self) -> Range<usize> {
        let total = self.processed.len();
        match &self.pagination {
            Some(pagination) => pagination.range(total),
            None => 0..total,
        }
    }

    /// Rows on the visible page
    pub fn page_rows(&self) -> Vec<PageRow<'_, R>> {
        let range = self.page_range();
        let start = range.start;
        self.processed[range]
            .iter()
            .enumerate()
            .map(|(page_index, &row_index)| PageRow {
                absolute_index: start + page_index,
                page_index,
                row: &self.rows[row_index],
            })
            .collect()
    }

    /// Row at an absolute (processed order) index
    pub fn row_at(&self, absolute_index: usize) -> Option<&R> {
        self.processed
            .get(absolute_index)
            .map(|&row_index| &self.rows[row_index])
    }

    /// Header checkbox click
    pub fn toggle_select_all(&mut self) {
        if !self.options.selectable {
            return;
        }
        let range = self.page_range();
        self.selection.toggle_page(range);
    }

    /// Row checkbox click, addressed by absolute index
    pub fn toggle_row(&mut self, absolute_index: usize) {
        if !self.options.selectable || absolute_index >= self.processed.len() {
            return;
        }
        self.selection.toggle(absolute_index);
    }

    pub fn is_selected(&self, absolute_index: usize) -> bool {
        self.selection.contains(absolute_index)
    }

    pub fn is_page_selected(&self) -> bool {
        self.selection.is_page_selected(self.page_range())
    }

    /// Rows currently selected, in processed order
    pub fn selected_rows(&self) -> Vec<&R> {
        self.selection
            .indices()
            .filter_map(|i| self.processed.get(i))
            .map(|&row_index| &self.rows[row_index])
            .collect()
    }

    fn recompute(&mut self) {
        let mut indices = if self.options.filterable {
            filter_indices(&self.rows, &self.columns, &self.filters)
        } else {
            (0..self.rows.len()).collect()
        };
        if self.options.sortable {
            sort_indices(&mut indices, &self.rows, &self.columns, &self.sort);
        }
        self.processed = indices;
        let total = self.processed.len();
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.clamp(total);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Person {
        name: &'static str,
    }

    fn people() -> Vec<Person> {
        ["Bob", "Ann", "Cid"]
            .into_iter()
            .map(|name| Person { name })
            .collect()
    }

    fn table() -> TableState<Person> {
        let columns = vec![Column::new("name", "Name", |p: &Person| p.name)
            .sortable()
            .filterable()];
        TableState::new(people(), columns).with_options(TableOptions {
            sortable: true,
            filterable: true,
            selectable: true,
            loading: false,
        })
    }

    fn names(state: &TableState<Person>) -> Vec<&'static str> {
        state.page_rows().iter().map(|r| r.row.name).collect()
    }

    #[test]
    fn test_sort_filter_paginate_scenario() {
        let mut state = table().with_pagination(PaginationConfig::new(2));
        state.toggle_sort("name");
        assert_eq!(state.total_pages(), 2);
        assert_eq!(names(&state), vec!["Ann", "Bob"]);

        assert_eq!(state.go_to_page(2), Some(2));
        assert_eq!(names(&state), vec!["Cid"]);

        state.set_filter("name", "o");
        assert_eq!(state.current_page(), 1);
        assert_eq!(names(&state), vec!["Bob"]);
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_three_clicks_restore_order() {
        let mut state = table();
        state.toggle_sort("name");
        state.toggle_sort("name");
        assert_eq!(names(&state), vec!["Cid", "Bob", "Ann"]);
        state.toggle_sort("name");
        assert_eq!(names(&state), vec!["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn test_sorting_disabled_is_noop() {
        let mut state = table().with_options(TableOptions {
            sortable: false,
            ..TableOptions::default()
        });
        assert!(!state.toggle_sort("name"));
        assert_eq!(names(&state), vec!["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn test_default_options_leave_rows_untouched() {
        let columns = vec![Column::new("name", "Name", |p: &Person| p.name)
            .sortable()
            .filterable()];
        let mut state = TableState::new(people(), columns);
        assert_eq!(state.options(), TableOptions::default());
        assert!(!state.options().sortable);

        assert!(!state.toggle_sort("name"));
        state.set_filter("name", "ann");
        assert_eq!(state.sort_direction("name"), SortDirection::None);
        assert_eq!(names(&state), vec!["Bob", "Ann", "Cid"]);
    }

    #[test]
    fn test_non_filterable_column_ignored() {
        let columns = vec![Column::new("name", "Name", |p: &Person| p.name)];
        let mut state = TableState::new(people(), columns).with_options(TableOptions {
            filterable: true,
            ..TableOptions::default()
        });
        state.set_filter("name", "zzz");
        assert_eq!(state.total_rows(), 3);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let rows: Vec<Person> = (0..25).map(|_| Person { name: "x" }).collect();
        let columns = vec![Column::new("name", "Name", |p: &Person| p.name)];
        let mut state = TableState::new(rows, columns)
            .with_options(TableOptions {
                selectable: true,
                ..TableOptions::default()
            })
            .with_pagination(PaginationConfig::new(10));

        state.go_to_page(2);
        let second = state.page_rows()[1].absolute_index;
        state.toggle_row(second);
        assert_eq!(second, 11);

        state.go_to_page(1);
        assert!(state.is_selected(11));
    }

    #[test]
    fn test_select_all_toggles_page() {
        let mut state = table().with_pagination(PaginationConfig::new(2));
        state.toggle_select_all();
        assert!(state.is_page_selected());
        assert_eq!(state.selected_rows().len(), 2);
        state.toggle_select_all();
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_filter_and_sort_clear_selection() {
        let mut state = table();
        state.toggle_row(0);
        state.toggle_sort("name");
        assert!(state.selection().is_empty());

        state.toggle_row(1);
        state.set_filter("name", "a");
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_empty_rows_single_page() {
        let columns = vec![Column::new("name", "Name", |p: &Person| p.name)];
        let state = TableState::new(Vec::<Person>::new(), columns)
            .with_options(TableOptions {
                selectable: true,
                ..TableOptions::default()
            })
            .with_pagination(PaginationConfig::new(5));
        assert_eq!(state.total_pages(), 1);
        assert!(state.page_rows().is_empty());
        assert!(!state.shows_pagination());
    }

    #[test]
    fn test_page_clamped_when_rows_shrink() {
        let mut state = table().with_pagination(PaginationConfig::new(1).current_page(3));
        assert_eq!(state.current_page(), 3);
        state.set_rows(vec![Person { name: "Ann" }]);
        assert_eq!(state.current_page(), 1);
        assert_eq!(names(&state), vec!["Ann"]);
    }
}
