//! Table state for record lists, independent of any UI framework.
//!
//! A screen describes its table with a set of [`Column`]s, keeps a
//! [`ListState`] for the search box, sort header and pager, and a
//! [`Selection`] for the row checkboxes. [`ListState::apply`] turns the full
//! record list into the rows visible on the current page.
//!
//! ```rust
//! use list_view::{CellValue, Column, ListState};
//!
//! struct Row {
//!     name: &'static str,
//!     score: i32,
//! }
//!
//! let rows = vec![
//!     Row { name: "Birdie", score: 3 },
//!     Row { name: "Eagle", score: 2 },
//! ];
//! let columns = vec![
//!     Column::new("name", "Name", |r: &Row| r.name.into()),
//!     Column::new("score", "Score", |r: &Row| r.score.into()),
//! ];
//!
//! let mut state = ListState::default();
//! state.sort_by("score");
//! let page = state.apply(&rows, &columns);
//! assert_eq!(page.rows[0].name, "Eagle");
//! assert_eq!(page.filtered_count, 2);
//! ```

mod cell;
mod column;
mod mutation;
mod selection;
mod state;

pub use cell::CellValue;
pub use column::Column;
pub use mutation::{Mutation, apply_mutation};
pub use selection::{PageSelection, Selection};
pub use state::{
    DEFAULT_PAGE_SIZE, ListPage, ListState, PAGE_SIZES, SortDirection,
    SortState,
};
