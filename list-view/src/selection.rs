use std::collections::HashSet;
use std::hash::Hash;

/// Header checkbox state for the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelection {
    None,
    /// Shown as an indeterminate checkbox.
    Some,
    All,
}

/// Ids of the rows checked in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<Id: Eq + Hash> {
    selected: HashSet<Id>,
}

impl<Id: Eq + Hash> Default for Selection<Id> {
    fn default() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }
}

impl<Id: Copy + Eq + Hash> Selection<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Id) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    pub fn is_selected(&self, id: &Id) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn ids(&self) -> Vec<Id> {
        self.selected.iter().copied().collect()
    }

    /// Replace the selection with exactly the given page.
    pub fn select_page(&mut self, page_ids: impl IntoIterator<Item = Id>) {
        self.selected = page_ids.into_iter().collect();
    }

    /// Header checkbox click: a fully selected page clears everything,
    /// otherwise the page becomes the selection.
    pub fn toggle_page(&mut self, page_ids: &[Id]) {
        if self.page_status(page_ids) == PageSelection::All {
            self.clear();
        } else {
            self.select_page(page_ids.iter().copied());
        }
    }

    pub fn page_status(&self, page_ids: &[Id]) -> PageSelection {
        let checked = page_ids.iter().filter(|id| self.is_selected(id)).count();
        if checked == 0 {
            PageSelection::None
        } else if checked == page_ids.len() {
            PageSelection::All
        } else {
            PageSelection::Some
        }
    }

    /// Drop ids that no longer exist, e.g. after a refetch or delete.
    pub fn retain(&mut self, existing: impl IntoIterator<Item = Id>) {
        let existing: HashSet<Id> = existing.into_iter().collect();
        self.selected.retain(|id| existing.contains(id));
    }
}
