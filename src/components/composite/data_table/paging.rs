//! Pagination State
//!
//! Page math for the DataTable. Pages are 1-based and always clamped into
//! `[1, total_pages]`.

use std::ops::Range;

/// Pagination configuration supplied when the table is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
    pub page_size: usize,
    pub current_page: usize,
}

impl PaginationConfig {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }
}

/// Current page over a row count.
///
/// A page size of zero means a single page holding every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    page_size: usize,
    current_page: usize,
}

impl PaginationState {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            page_size: config.page_size,
            current_page: config.current_page.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total_rows.div_ceil(self.page_size).max(1)
    }

    /// Clamp the current page after the row count changed
    pub fn clamp(&mut self, total_rows: usize) {
        self.current_page = self.current_page.clamp(1, self.total_pages(total_rows));
    }

    /// Navigate to `page`, clamped. Returns the new page when it changed.
    pub fn go_to(&mut self, page: usize, total_rows: usize) -> Option<usize> {
        let target = page.clamp(1, self.total_pages(total_rows));
        if target == self.current_page {
            return None;
        }
        self.current_page = target;
        Some(target)
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Absolute index range of the current page
    pub fn range(&self, total_rows: usize) -> Range<usize> {
        if self.page_size == 0 {
            return 0..total_rows;
        }
        let page = self.current_page.clamp(1, self.total_pages(total_rows));
        let start = ((page - 1) * self.page_size).min(total_rows);
        let end = (start + self.page_size).min(total_rows);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self, total_rows: usize) -> bool {
        self.current_page < self.total_pages(total_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        let paging = PaginationState::new(PaginationConfig::new(10));
        assert_eq!(paging.total_pages(0), 1);
        assert_eq!(paging.total_pages(10), 1);
        assert_eq!(paging.total_pages(11), 2);
    }

    #[test]
    fn test_zero_page_size_is_single_page() {
        let paging = PaginationState::new(PaginationConfig::new(0));
        assert_eq!(paging.total_pages(25), 1);
        assert_eq!(paging.range(25), 0..25);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut paging = PaginationState::new(PaginationConfig::new(10));
        assert_eq!(paging.go_to(0, 35), None);
        assert_eq!(paging.go_to(5, 35), Some(4));
        assert_eq!(paging.current_page(), 4);
        assert_eq!(paging.range(35), 30..35);
        assert_eq!(paging.go_to(4, 35), None);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut paging = PaginationState::new(PaginationConfig::new(2).current_page(3));
        paging.clamp(3);
        assert_eq!(paging.current_page(), 2);
        assert!(paging.has_previous());
        assert!(!paging.has_next(3));
    }
}
