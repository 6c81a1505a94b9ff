//! Column Definition
//!
//! Defines table columns: how a cell value is extracted from a row, whether
//! the column takes part in sorting or filtering, and how the cell renders.

use gpui::{div, AnyElement, IntoElement, ParentElement, SharedString};

use super::cell::CellValue;

type Accessor<R> = Box<dyn Fn(&R) -> CellValue + Send + Sync>;
type CellRenderer<R> = Box<dyn Fn(&CellValue, &R) -> AnyElement + Send + Sync>;

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column key, unique within a table
    pub key: SharedString,
    /// Column header label
    pub header: SharedString,
    /// Column width
    pub width: ColumnWidth,
    /// Whether clicking the header sorts by this column
    pub sortable: bool,
    /// Whether a filter box is shown for this column
    pub filterable: bool,
    accessor: Accessor<R>,
    render: Option<CellRenderer<R>>,
}

/// Column width
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of the table width
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column reading its value through `accessor`
    pub fn new<V: Into<CellValue>>(
        key: impl Into<SharedString>,
        header: impl Into<SharedString>,
        accessor: impl Fn(&R) -> V + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            width: ColumnWidth::default(),
            sortable: false,
            filterable: false,
            accessor: Box::new(move |row| accessor(row).into()),
            render: None,
        }
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column filterable
    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Use a custom cell renderer instead of the value's string form
    pub fn render(
        mut self,
        render: impl Fn(&CellValue, &R) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    /// Extract this column's value from a row
    pub fn value(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// String form of this column's value for a row
    pub fn text(&self, row: &R) -> String {
        self.value(row).to_string()
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row),
            None => div().child(value.to_string()).into_any_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User {
        name: &'static str,
        age: Option<u32>,
    }

    #[test]
    fn test_accessor_and_flags() {
        let column = Column::new("name", "Name", |u: &User| u.name)
            .sortable()
            .filterable()
            .fixed_width(120.0);
        let user = User { name: "Ann", age: None };

        assert_eq!(column.value(&user), CellValue::from("Ann"));
        assert!(column.sortable && column.filterable);
        assert_eq!(column.width, ColumnWidth::Fixed(120.0));
    }

    #[test]
    fn test_missing_value_is_empty_text() {
        let column = Column::new("age", "Age", |u: &User| u.age);
        let user = User { name: "Bob", age: None };

        assert_eq!(column.text(&user), "");
        assert!(!column.sortable);
    }
}
