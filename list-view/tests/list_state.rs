use list_view::{CellValue, Column, ListState, SortDirection};

#[derive(Debug, Clone, PartialEq)]
struct Player {
    name: &'static str,
    club: Option<&'static str>,
    handicap: Option<f64>,
}

fn player(
    name: &'static str,
    club: Option<&'static str>,
    handicap: Option<f64>,
) -> Player {
    Player {
        name,
        club,
        handicap,
    }
}

fn columns() -> Vec<Column<Player>> {
    vec![
        Column::new("name", "Name", |p: &Player| p.name.into()),
        Column::new("club", "Club", |p: &Player| p.club.into()),
        Column::new("handicap", "Handicap", |p: &Player| p.handicap.into())
            .unsearchable(),
        Column::new("actions", "", |_: &Player| CellValue::Empty).unsortable(),
    ]
}

fn roster() -> Vec<Player> {
    vec![
        player("Dana", Some("Pinehurst"), Some(12.0)),
        player("alex", None, Some(4.5)),
        player("Chris", Some("Augusta"), None),
        player("Bea", Some("pine valley"), Some(20.0)),
    ]
}

fn names(state: &ListState, rows: &[Player]) -> Vec<&'static str> {
    let columns = columns();
    state
        .apply(rows, &columns)
        .rows
        .into_iter()
        .map(|p| p.name)
        .collect()
}

#[test]
fn empty_query_keeps_everything_in_order() {
    let rows = roster();
    let state = ListState::default();
    assert_eq!(names(&state, &rows), vec!["Dana", "alex", "Chris", "Bea"]);
}

#[test]
fn search_is_case_insensitive_over_searchable_columns() {
    let rows = roster();
    let mut state = ListState::default();
    state.set_query("PINE");
    assert_eq!(names(&state, &rows), vec!["Dana", "Bea"]);

    // handicap is not searchable
    state.set_query("4.5");
    assert!(names(&state, &rows).is_empty());

    state.set_query("  alex ");
    assert_eq!(names(&state, &rows), vec!["alex"]);
}

#[test]
fn header_clicks_cycle_sort_direction() {
    let mut state = ListState::default();
    state.sort_by("name");
    assert_eq!(state.sort.unwrap().direction, SortDirection::Ascending);
    state.sort_by("name");
    assert_eq!(state.sort.unwrap().direction, SortDirection::Descending);
    state.sort_by("club");
    let sort = state.sort.unwrap();
    assert_eq!((sort.key, sort.direction), ("club", SortDirection::Ascending));
}

#[test]
fn text_sort_ignores_case() {
    let rows = roster();
    let mut state = ListState::default();
    state.sort_by("name");
    assert_eq!(names(&state, &rows), vec!["alex", "Bea", "Chris", "Dana"]);
    state.sort_by("name");
    assert_eq!(names(&state, &rows), vec!["Dana", "Chris", "Bea", "alex"]);
}

#[test]
fn empty_cells_sort_last_in_both_directions() {
    let rows = roster();
    let mut state = ListState::default();
    state.sort_by("handicap");
    assert_eq!(names(&state, &rows), vec!["alex", "Dana", "Bea", "Chris"]);
    state.sort_by("handicap");
    assert_eq!(names(&state, &rows), vec!["Bea", "Dana", "alex", "Chris"]);

    // "pine valley" sorts before "pinehurst"
    state.sort_by("club");
    assert_eq!(names(&state, &rows), vec!["Chris", "Bea", "Dana", "alex"]);
}

#[test]
fn unsortable_columns_leave_order_alone() {
    let rows = roster();
    let mut state = ListState::default();
    state.sort_by("actions");
    assert_eq!(names(&state, &rows), vec!["Dana", "alex", "Chris", "Bea"]);
}

#[test]
fn numbers_sort_numerically() {
    let rows = vec![
        player("a", None, Some(10.0)),
        player("b", None, Some(9.0)),
        player("c", None, Some(100.0)),
    ];
    let mut state = ListState::default();
    state.sort_by("handicap");
    assert_eq!(names(&state, &rows), vec!["b", "a", "c"]);
}

fn many(n: usize) -> Vec<Player> {
    const NAMES: [&str; 12] = [
        "p01", "p02", "p03", "p04", "p05", "p06", "p07", "p08", "p09", "p10",
        "p11", "p12",
    ];
    NAMES[..n].iter().map(|name| player(*name, None, None)).collect()
}

#[test]
fn pagination_slices_and_counts() {
    let rows = many(12);
    let columns = columns();
    let mut state = ListState::default();
    state.set_page_size(5);

    let page = state.apply(&rows, &columns);
    assert_eq!(page.filtered_count, 12);
    assert_eq!(page.total_pages, 3);
    assert!(page.show_pagination());
    assert_eq!(page.rows.len(), 5);

    state.set_page(3);
    let page = state.apply(&rows, &columns);
    assert_eq!(page.page, 3);
    assert_eq!(
        page.rows.iter().map(|p| p.name).collect::<Vec<_>>(),
        vec!["p11", "p12"]
    );
}

#[test]
fn page_is_clamped_to_available_pages() {
    let rows = many(7);
    let columns = columns();
    let mut state = ListState::default();
    state.set_page_size(5);
    state.set_page(9);

    let page = state.apply(&rows, &columns);
    assert_eq!(page.page, 2);
    assert_eq!(page.rows.len(), 2);

    let page = state.apply(&[], &columns);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 0);
    assert!(!page.show_pagination());
    assert!(page.rows.is_empty());
}

#[test]
fn changing_query_or_size_returns_to_first_page() {
    let mut state = ListState::default();
    state.set_page(4);
    state.set_query("p");
    assert_eq!(state.page, 1);

    state.set_page(3);
    state.set_page_size(25);
    assert_eq!((state.page, state.page_size), (1, 25));

    // unsupported sizes are ignored
    state.set_page(2);
    state.set_page_size(7);
    assert_eq!((state.page, state.page_size), (2, 25));
}

#[test]
fn search_applies_before_pagination() {
    let rows = many(12);
    let columns = columns();
    let mut state = ListState::default();
    state.set_page_size(5);
    state.set_query("p1");

    let page = state.apply(&rows, &columns);
    assert_eq!(page.filtered_count, 3);
    assert_eq!(page.total_pages, 1);
    assert!(!page.show_pagination());
}

#[derive(Debug)]
struct Entry {
    name: &'static str,
    flight: i32,
    paid: Option<bool>,
}

fn entry(name: &'static str, flight: i32, paid: Option<bool>) -> Entry {
    Entry { name, flight, paid }
}

fn entry_columns() -> Vec<Column<Entry>> {
    vec![
        Column::new("flight", "Flight", |e: &Entry| e.flight.into()),
        Column::new("paid", "Paid", |e: &Entry| e.paid.into()),
    ]
}

fn entry_names(state: &ListState, rows: &[Entry]) -> Vec<&'static str> {
    let columns = entry_columns();
    state
        .apply(rows, &columns)
        .rows
        .into_iter()
        .map(|e| e.name)
        .collect()
}

#[test]
fn equal_keys_keep_their_order_in_both_directions() {
    let rows = vec![
        entry("a", 2, None),
        entry("b", 1, None),
        entry("c", 2, None),
        entry("d", 1, None),
    ];
    let mut state = ListState::default();
    state.sort_by("flight");
    assert_eq!(entry_names(&state, &rows), vec!["b", "d", "a", "c"]);
    state.sort_by("flight");
    assert_eq!(entry_names(&state, &rows), vec!["a", "c", "b", "d"]);
}

#[test]
fn false_sorts_before_true_and_blanks_stay_last() {
    let rows = vec![
        entry("a", 1, Some(true)),
        entry("b", 1, None),
        entry("c", 1, Some(false)),
        entry("d", 1, Some(true)),
    ];
    let mut state = ListState::default();
    state.sort_by("paid");
    assert_eq!(entry_names(&state, &rows), vec!["c", "a", "d", "b"]);
    state.sort_by("paid");
    assert_eq!(entry_names(&state, &rows), vec!["a", "d", "c", "b"]);
}
