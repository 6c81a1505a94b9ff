//! DataTable Component
//!
//! A reusable data table: rows are filtered, sorted and paginated, and row
//! selection is tracked by absolute index into the processed order.

pub mod cell;
pub mod column;
pub mod data_table;
pub mod filter;
pub mod pagination;
pub mod paging;
pub mod selection;
pub mod sort;
pub mod state;

pub use cell::CellValue;
pub use column::{Column, ColumnWidth};
pub use data_table::{data_table, DataTable, TableEvent};
pub use filter::FilterState;
pub use pagination::Pagination;
pub use paging::{PaginationConfig, PaginationState};
pub use selection::SelectionState;
pub use sort::{SortDirection, SortState};
pub use state::{PageRow, TableOptions, TableState};
