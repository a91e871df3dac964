use std::cmp::Ordering;

use crate::Column;

pub const PAGE_SIZES: [usize; 4] = [5, 10, 25, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: &'static str,
    pub direction: SortDirection,
}

impl SortState {
    /// Clicking the current sort column flips direction; clicking any other
    /// column sorts it ascending.
    pub fn toggled(current: Option<SortState>, key: &'static str) -> Self {
        match current {
            Some(sort) if sort.key == key => Self {
                key,
                direction: sort.direction.flip(),
            },
            _ => Self {
                key,
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Search, sort and pager state for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub sort: Option<SortState>,
    /// 1-based; clamped to the available pages by [`ListState::apply`].
    pub page: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The visible slice of a table after search, sort and pagination.
#[derive(Debug)]
pub struct ListPage<'a, T> {
    pub rows: Vec<&'a T>,
    /// Number of rows matching the search, across all pages.
    pub filtered_count: usize,
    pub total_pages: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
}

impl<T> ListPage<'_, T> {
    /// Pager controls are only useful with more than one page.
    pub fn show_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

impl ListState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    /// Sizes outside [`PAGE_SIZES`] are ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if PAGE_SIZES.contains(&page_size) {
            self.page_size = page_size;
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn sort_by(&mut self, key: &'static str) {
        self.sort = Some(SortState::toggled(self.sort, key));
    }

    pub fn total_pages(&self, filtered_count: usize) -> usize {
        filtered_count.div_ceil(self.page_size.max(1))
    }

    pub fn apply<'a, T>(
        &self,
        rows: &'a [T],
        columns: &[Column<T>],
    ) -> ListPage<'a, T> {
        let query = self.query.trim().to_lowercase();
        let mut filtered: Vec<&T> = rows
            .iter()
            .filter(|row| matches_query(*row, columns, &query))
            .collect();

        if let Some(sort) = self.sort
            && let Some(column) =
                columns.iter().find(|c| c.key == sort.key && c.sortable)
        {
            sort_rows(&mut filtered, column, sort.direction);
        }

        let filtered_count = filtered.len();
        let total_pages = self.total_pages(filtered_count);
        let page = self.page.clamp(1, total_pages.max(1));
        let start = (page - 1) * self.page_size;
        let rows = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        ListPage {
            rows,
            filtered_count,
            total_pages,
            page,
        }
    }
}

fn matches_query<T>(row: &T, columns: &[Column<T>], query: &str) -> bool {
    query.is_empty()
        || columns
            .iter()
            .filter(|c| c.searchable)
            .any(|c| c.cell(row).search_text().contains(query))
}

/// Stable sort with empty cells kept last in either direction.
fn sort_rows<T>(
    rows: &mut [&T],
    column: &Column<T>,
    direction: SortDirection,
) {
    rows.sort_by(|a, b| {
        let (a, b) = (column.cell(a), column.cell(b));
        match (a.is_empty(), b.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => match direction {
                SortDirection::Ascending => a.compare(&b),
                SortDirection::Descending => b.compare(&a),
            },
        }
    });
}
