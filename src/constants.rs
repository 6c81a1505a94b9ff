//! UI Constants
//!
//! Centralized defaults shared by the components and the gallery.

/// Search bar debounce delay
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Number of recent searches kept by the search bar
pub const RECENT_SEARCHES_CAPACITY: usize = 5;

/// Storage key for the search bar's recent searches
pub const RECENT_SEARCHES_KEY: &str = "search-bar-recent-searches";

/// Default toast lifetime; 0 disables auto-dismiss
pub const TOAST_DEFAULT_DURATION_MS: u64 = 5000;

/// How long a tag input validation error stays visible
pub const TAG_ERROR_DISPLAY_MS: u64 = 3000;

/// Default rows for a textarea
pub const TEXTAREA_DEFAULT_ROWS: usize = 3;

/// Data table geometry
pub const TABLE_ROW_HEIGHT: f32 = 36.0;
pub const TABLE_HEADER_HEIGHT: f32 = 40.0;
pub const TABLE_CHECKBOX_COLUMN_WIDTH: f32 = 44.0;

/// Gallery window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Gallery sidebar width
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Gallery header height
pub const HEADER_HEIGHT: f32 = 48.0;

/// Toasts kept on screen at once; the oldest is dropped beyond this
pub const TOAST_QUEUE_CAPACITY: usize = 8;
