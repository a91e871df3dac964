use list_view::{Mutation, PageSelection, Selection, apply_mutation};
use payloads::Record;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    label: &'static str,
}

impl Record for Item {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

fn item(id: u32, label: &'static str) -> Item {
    Item { id, label }
}

#[test]
fn row_toggle() {
    let mut selection = Selection::new();
    selection.toggle(1);
    selection.toggle(2);
    selection.toggle(1);
    assert!(!selection.is_selected(&1));
    assert!(selection.is_selected(&2));
    assert_eq!(selection.len(), 1);
}

#[test]
fn header_checkbox_reflects_visible_page() {
    let page = [1, 2, 3];
    let mut selection = Selection::new();
    assert_eq!(selection.page_status(&page), PageSelection::None);
    selection.toggle(2);
    assert_eq!(selection.page_status(&page), PageSelection::Some);
    selection.toggle(1);
    selection.toggle(3);
    assert_eq!(selection.page_status(&page), PageSelection::All);
}

#[test]
fn header_click_selects_exactly_the_page() {
    let mut selection = Selection::new();
    // a row from another page is dropped when the page is selected
    selection.toggle(9);
    selection.toggle(1);
    selection.toggle_page(&[1, 2, 3]);

    let mut ids = selection.ids();
    ids.sort();
    assert_eq!(ids, vec![1, 2, 3]);

    selection.toggle_page(&[1, 2, 3]);
    assert!(selection.is_empty());
}

#[test]
fn retain_prunes_missing_ids() {
    let mut selection = Selection::new();
    selection.select_page([1, 2, 3]);
    selection.retain([2, 3, 4]);
    let mut ids = selection.ids();
    ids.sort();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn mutations_follow_requests() {
    let mut items = Vec::new();
    apply_mutation(&mut items, Mutation::Set(vec![item(1, "a"), item(2, "b")]));
    apply_mutation(&mut items, Mutation::Prepend(item(3, "c")));
    assert_eq!(
        items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![3, 1, 2]
    );

    apply_mutation(&mut items, Mutation::Update(item(1, "a2")));
    assert_eq!(items[1], item(1, "a2"));

    // updating a record that is not in the list changes nothing
    apply_mutation(&mut items, Mutation::Update(item(7, "x")));
    assert_eq!(items.len(), 3);

    apply_mutation(&mut items, Mutation::Remove(vec![3, 2, 42]));
    assert_eq!(items, vec![item(1, "a2")]);
}
