//! Cell Values
//!
//! The value type produced by column accessors. Used for display, filtering
//! and sorting.

use std::cmp::Ordering;
use std::fmt;

/// A single cell value extracted from a row
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// Missing value; displays and filters as the empty string
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Lowercased string form used by column filters
    pub fn filter_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Whether this value is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    // Mixed kinds order Null < Bool < number < Text.
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Null => 0,
            CellValue::Bool(_) => 1,
            CellValue::Int(_) | CellValue::Float(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Natural ordering used by the sort stage.
    ///
    /// Numbers compare numerically across `Int` and `Float`; NaN compares
    /// equal to everything so ties keep their incoming order.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Null, CellValue::Null) => Ordering::Equal,
            (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Int(b)) => a.cmp(b),
            (CellValue::Int(a), CellValue::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Float(a), CellValue::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (CellValue::Float(a), CellValue::Float(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Int(value.into())
    }
}

impl From<usize> for CellValue {
    fn from(value: usize) -> Self {
        i64::try_from(value)
            .map(CellValue::Int)
            .unwrap_or(CellValue::Float(value as f64))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_displays_as_empty() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::from(None::<&str>).filter_text(), "");
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(1.5).to_string(), "1.5");
        assert_eq!(CellValue::from(true).to_string(), "true");
        assert_eq!(CellValue::from("Ann").filter_text(), "ann");
    }

    #[test]
    fn test_numbers_compare_across_kinds() {
        assert_eq!(CellValue::Int(2).compare(&CellValue::Float(2.5)), Ordering::Less);
        assert_eq!(CellValue::Float(3.0).compare(&CellValue::Int(3)), Ordering::Equal);
    }

    #[test]
    fn test_mixed_kinds_rank() {
        assert_eq!(CellValue::Null.compare(&CellValue::Bool(false)), Ordering::Less);
        assert_eq!(CellValue::Int(100).compare(&CellValue::from("1")), Ordering::Less);
    }

    #[test]
    fn test_nan_is_equal() {
        let nan = CellValue::Float(f64::NAN);
        assert_eq!(nan.compare(&CellValue::Float(1.0)), Ordering::Equal);
    }
}
