use std::cmp::Ordering;
use std::fmt;

/// A typed table cell, used both for display and for sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Lower-cased display text for search matching.
    pub(crate) fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
            Self::Empty => 3,
        }
    }

    /// Ascending order: numbers numerically, text case-insensitively and
    /// false before true. Empty compares greater than everything; callers
    /// keep empties last when sorting descending.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => {
                a.partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Self::Text(a), Self::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => write!(f, "{s}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "Yes"),
            Self::Bool(false) => write!(f, "No"),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_text() {
        assert_eq!(CellValue::from(3.0).to_string(), "3");
        assert_eq!(CellValue::from(1.25).to_string(), "1.25");
        assert_eq!(CellValue::from(true).to_string(), "Yes");
        assert_eq!(CellValue::from(None::<String>).to_string(), "");
    }

    #[test]
    fn text_ignores_case() {
        let a = CellValue::from("apple");
        let b = CellValue::from("Banana");
        assert_eq!(a.compare(&b), Ordering::Less);
    }
}
