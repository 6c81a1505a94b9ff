//! Sorting
//!
//! Single-column sort with a tri-state header-click cycle. Sorting is stable
//! so rows with equal keys keep their filtered order.

use gpui::SharedString;

use super::cell::CellValue;
use super::column::Column;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Next direction in the `None -> Ascending -> Descending -> None` cycle
    pub fn next(self) -> Self {
        match self {
            SortDirection::None => SortDirection::Ascending,
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::None,
        }
    }

    /// Header indicator glyph
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::None => "↕",
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort column and direction.
///
/// `key` is `None` exactly when `direction` is `SortDirection::None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortState {
    key: Option<SharedString>,
    direction: SortDirection,
}

impl SortState {
    pub fn key(&self) -> Option<&SharedString> {
        self.key.as_ref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Header click: the active column advances its cycle, any other column
    /// starts ascending.
    pub fn toggle(&mut self, key: impl Into<SharedString>) {
        let key = key.into();
        let direction = if self.key.as_ref() == Some(&key) {
            self.direction.next()
        } else {
            SortDirection::Ascending
        };
        self.direction = direction;
        self.key = match direction {
            SortDirection::None => None,
            _ => Some(key),
        };
    }

    /// Direction shown in a column header
    pub fn direction_for(&self, key: &str) -> SortDirection {
        match &self.key {
            Some(k) if k.as_ref() == key => self.direction,
            _ => SortDirection::None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Sort `indices` by the active column.
///
/// No-op when unsorted or the key names an unknown column.
pub fn sort_indices<R: 'static>(
    indices: &mut Vec<usize>,
    rows: &[R],
    columns: &[Column<R>],
    sort: &SortState,
) {
    let Some(key) = &sort.key else {
        return;
    };
    let Some(column) = columns.iter().find(|c| &c.key == key) else {
        return;
    };

    let mut keyed: Vec<(CellValue, usize)> = indices
        .iter()
        .map(|&i| (column.value(&rows[i]), i))
        .collect();
    match sort.direction {
        SortDirection::Ascending => keyed.sort_by(|(a, _), (b, _)| a.compare(b)),
        SortDirection::Descending => keyed.sort_by(|(a, _), (b, _)| b.compare(a)),
        SortDirection::None => return,
    }
    *indices = keyed.into_iter().map(|(_, i)| i).collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column<(&'static str, i64)>> {
        vec![
            Column::new("name", "Name", |r: &(&str, i64)| r.0).sortable(),
            Column::new("score", "Score", |r: &(&str, i64)| r.1).sortable(),
        ]
    }

    #[test]
    fn test_toggle_cycles_through_three_states() {
        let mut sort = SortState::default();
        sort.toggle("name");
        assert_eq!(sort.direction_for("name"), SortDirection::Ascending);
        sort.toggle("name");
        assert_eq!(sort.direction_for("name"), SortDirection::Descending);
        sort.toggle("name");
        assert_eq!(sort.direction(), SortDirection::None);
        assert!(sort.key().is_none());
    }

    #[test]
    fn test_other_column_starts_ascending() {
        let mut sort = SortState::default();
        sort.toggle("name");
        sort.toggle("name");
        sort.toggle("score");
        assert_eq!(sort.direction_for("score"), SortDirection::Ascending);
        assert_eq!(sort.direction_for("name"), SortDirection::None);
    }

    #[test]
    fn test_sort_ascending_and_descending() {
        let rows = vec![("Bob", 2), ("Ann", 3), ("Cid", 1)];
        let mut sort = SortState::default();
        sort.toggle("name");

        let mut indices = vec![0, 1, 2];
        sort_indices(&mut indices, &rows, &columns(), &sort);
        assert_eq!(indices, vec![1, 0, 2]);

        sort.toggle("name");
        let mut indices = vec![0, 1, 2];
        sort_indices(&mut indices, &rows, &columns(), &sort);
        assert_eq!(indices, vec![2, 0, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let rows = vec![("Bob", 1), ("Ann", 2), ("Cid", 1), ("Dan", 1)];
        let mut sort = SortState::default();
        sort.toggle("score");

        let mut indices = vec![3, 2, 1, 0];
        sort_indices(&mut indices, &rows, &columns(), &sort);
        assert_eq!(indices, vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_unsorted_keeps_order() {
        let rows = vec![("Bob", 1), ("Ann", 2)];
        let mut indices = vec![1, 0];
        sort_indices(&mut indices, &rows, &columns(), &SortState::default());
        assert_eq!(indices, vec![1, 0]);
    }
}
