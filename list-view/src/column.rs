use crate::CellValue;

/// A table column: header text plus the accessor producing its cell.
pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    /// Whether the search box matches against this column.
    pub searchable: bool,
    pub value: fn(&T) -> CellValue,
}

impl<T> Column<T> {
    /// A sortable, searchable column.
    pub fn new(
        key: &'static str,
        label: &'static str,
        value: fn(&T) -> CellValue,
    ) -> Self {
        Self {
            key,
            label,
            sortable: true,
            searchable: true,
            value,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn unsearchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    pub fn cell(&self, row: &T) -> CellValue {
        (self.value)(row)
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sortable: self.sortable,
            searchable: self.searchable,
            value: self.value,
        }
    }
}

// Accessors are not compared; columns are identified by their key.
impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
            && self.label == other.label
            && self.sortable == other.sortable
            && self.searchable == other.searchable
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .finish()
    }
}
