//! Property tests for the data table pipeline: filter, sort, paginate and
//! select by absolute index.

use proptest::prelude::*;

use shared_ui::components::composite::data_table::{
    Column, PaginationConfig, SortDirection, TableOptions, TableState,
};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    name: String,
    score: i64,
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("name", "Name", |r: &Row| r.name.clone())
            .sortable()
            .filterable(),
        Column::new("score", "Score", |r: &Row| r.score).sortable(),
    ]
}

fn options() -> TableOptions {
    TableOptions {
        sortable: true,
        filterable: true,
        selectable: true,
        loading: false,
    }
}

fn table(rows: Vec<Row>) -> TableState<Row> {
    TableState::new(rows, columns()).with_options(options())
}

fn names(state: &TableState<Row>) -> Vec<String> {
    state
        .page_rows()
        .into_iter()
        .map(|r| r.row.name.clone())
        .collect()
}

fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        ("[a-zA-Z]{0,6}", -50i64..50).prop_map(|(name, score)| Row { name, score }),
        0..40,
    )
}

proptest! {
    #[test]
    fn filter_keeps_exactly_matching_rows(rows in rows_strategy(), query in "[a-zA-Z]{0,2}") {
        let mut state = table(rows.clone());
        state.set_filter("name", query.clone());

        let needle = query.to_lowercase();
        let expected: Vec<String> = rows
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .map(|r| r.name.clone())
            .collect();
        prop_assert_eq!(names(&state), expected);
    }

    #[test]
    fn sort_is_monotonic_and_none_restores_order(rows in rows_strategy()) {
        let mut state = table(rows.clone());
        let original = names(&state);

        prop_assert!(state.toggle_sort("score"));
        prop_assert_eq!(state.sort_direction("score"), SortDirection::Ascending);
        let ascending: Vec<i64> = state.page_rows().iter().map(|r| r.row.score).collect();
        prop_assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        state.toggle_sort("score");
        prop_assert_eq!(state.sort_direction("score"), SortDirection::Descending);
        let descending: Vec<i64> = state.page_rows().iter().map(|r| r.row.score).collect();
        prop_assert!(descending.windows(2).all(|w| w[0] >= w[1]));

        state.toggle_sort("score");
        prop_assert_eq!(state.sort_direction("score"), SortDirection::None);
        prop_assert_eq!(names(&state), original);
    }

    #[test]
    fn processing_is_idempotent(rows in rows_strategy(), query in "[a-z]{0,1}", page in 0usize..6) {
        let build = || {
            let mut state = TableState::new(rows.clone(), columns())
                .with_options(options())
                .with_pagination(PaginationConfig::new(4));
            state.set_filter("name", query.clone());
            state.toggle_sort("name");
            state.go_to_page(page);
            state
        };
        let first = build();
        let second = build();
        prop_assert_eq!(first.processed(), second.processed());
        prop_assert_eq!(names(&first), names(&second));
        prop_assert_eq!(first.rows().as_slice(), rows.as_slice());
    }

    #[test]
    fn pages_are_clamped(len in 0usize..60, page_size in 1usize..12, requested in 0usize..20) {
        let rows: Vec<Row> = (0..len)
            .map(|i| Row { name: format!("r{i}"), score: i as i64 })
            .collect();
        let mut state = table(rows).with_pagination(PaginationConfig::new(page_size));

        let total_pages = len.div_ceil(page_size).max(1);
        prop_assert_eq!(state.total_pages(), total_pages);

        state.go_to_page(requested);
        let page = state.current_page();
        prop_assert_eq!(page, requested.clamp(1, total_pages));
        if len > 0 {
            prop_assert!(!state.page_rows().is_empty());
        }
    }
}

fn people() -> Vec<Row> {
    ["Bob", "Ann", "Cid"]
        .into_iter()
        .enumerate()
        .map(|(i, name)| Row {
            name: name.to_string(),
            score: i as i64,
        })
        .collect()
}

#[test]
fn bob_ann_cid_scenario() {
    let mut state = table(people());
    state.toggle_sort("name");
    assert_eq!(names(&state), vec!["Ann", "Bob", "Cid"]);

    state.set_filter("name", "o");
    assert_eq!(names(&state), vec!["Bob"]);

    let mut paged = table(people()).with_pagination(PaginationConfig::new(2));
    paged.toggle_sort("name");
    assert_eq!(paged.total_pages(), 2);
    assert_eq!(names(&paged), vec!["Ann", "Bob"]);
    assert_eq!(paged.go_to_page(2), Some(2));
    assert_eq!(names(&paged), vec!["Cid"]);
}

#[test]
fn tri_state_cycle_returns_to_original_order() {
    let mut state = table(people());
    for _ in 0..3 {
        state.toggle_sort("name");
    }
    assert_eq!(state.sort_direction("name"), SortDirection::None);
    assert_eq!(names(&state), vec!["Bob", "Ann", "Cid"]);
}

#[test]
fn page_requests_outside_range_clamp() {
    let rows: Vec<Row> = (0..25)
        .map(|i| Row { name: format!("r{i}"), score: i })
        .collect();
    let mut state = table(rows).with_pagination(PaginationConfig::new(10));
    assert_eq!(state.total_pages(), 3);

    assert_eq!(state.go_to_page(4), Some(3));
    assert_eq!(state.current_page(), 3);
    assert_eq!(state.go_to_page(0), Some(1));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn selection_uses_absolute_indices_across_pages() {
    let rows: Vec<Row> = (0..25)
        .map(|i| Row { name: format!("r{i}"), score: i })
        .collect();
    let mut state = table(rows).with_pagination(PaginationConfig::new(10));

    state.go_to_page(2);
    let target = state.page_rows()[3].absolute_index;
    assert!(target >= 10);
    state.toggle_row(target);

    state.go_to_page(1);
    assert!(state.is_selected(target));
    assert_eq!(state.selected_rows().len(), 1);
    assert_eq!(state.selected_rows()[0].name, "r13");
}

#[test]
fn select_all_twice_empties_selection() {
    let mut state = table(people()).with_pagination(PaginationConfig::new(2));

    state.go_to_page(2);
    state.toggle_row(2);
    state.go_to_page(1);

    state.toggle_select_all();
    assert!(state.is_page_selected());
    assert!(state.is_selected(0) && state.is_selected(1));

    state.toggle_select_all();
    assert!(state.selected_rows().is_empty());
}

#[test]
fn changing_sort_or_filter_clears_selection() {
    let mut state = table(people());
    state.toggle_row(1);
    state.toggle_sort("name");
    assert!(state.selected_rows().is_empty());

    state.toggle_row(0);
    state.set_filter("name", "a");
    assert!(state.selected_rows().is_empty());
}
