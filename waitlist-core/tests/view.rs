use waitlist_core::TableState;
use waitlist_core::columns::Column;
use waitlist_core::model::Record;
use waitlist_core::view::SortDirection;

fn person(id: i64, name: &str, email: &str) -> Record {
    Record::new(id)
        .set("name", name)
        .set("email", email)
        .set("phone", format!("555-000{id}"))
        .set("website", format!("example{id}.org"))
}

fn table_with(rows: Vec<Record>) -> TableState {
    let mut table = TableState::default();
    table.begin_load();
    table.load(rows);
    table
}

#[test]
fn test_empty_query_matches_everything() {
    let table = table_with(vec![
        person(1, "Leanne Graham", "Sincere@april.biz"),
        person(2, "Ervin Howell", "Shanna@melissa.tv"),
    ]);
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_filter_is_case_insensitive_substring() {
    let mut table = table_with(vec![
        person(1, "Leanne Graham", "a@b.com"),
        person(2, "Ervin Howell", "c@d.com"),
    ]);

    table.set_query("leanne");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.page_rows()[0].1.display("name"), "Leanne Graham");

    table.set_query("zzz");
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.page_count(), 0);
}

#[test]
fn test_filter_scans_hidden_columns() {
    let mut table = table_with(vec![
        person(1, "Leanne Graham", "Sincere@april.biz"),
        person(2, "Ervin Howell", "Shanna@melissa.tv"),
    ]);

    // Hiding the email column must not exclude its data from search.
    table.toggle_column("email");
    table.set_query("sincere");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.page_rows()[0].1.id(), 1);
}

#[test]
fn test_filter_ignores_unregistered_fields() {
    let rows = vec![
        Record::new(1)
            .set("name", "Alice")
            .set("secret", "needle in a haystack"),
    ];
    let mut table = TableState::new(vec![Column::new("Name", "name")]);
    table.begin_load();
    table.load(rows);

    table.set_query("needle");
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_sort_ascending_then_descending() {
    let mut table = table_with(vec![person(1, "Bob", "b@x.com"), person(2, "Alice", "a@x.com")]);

    table.toggle_sort("name");
    let names: Vec<String> = table
        .page_rows()
        .iter()
        .map(|(_, r)| r.display("name"))
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(table.sort_indicator("name"), Some(SortDirection::Ascending));

    table.toggle_sort("name");
    let names: Vec<String> = table
        .page_rows()
        .iter()
        .map(|(_, r)| r.display("name"))
        .collect();
    assert_eq!(names, vec!["Bob", "Alice"]);
    assert_eq!(table.sort_indicator("name"), Some(SortDirection::Descending));
}

#[test]
fn test_sorting_different_key_resets_to_ascending() {
    let mut table = table_with(vec![person(1, "Bob", "zz@x.com"), person(2, "Alice", "aa@x.com")]);

    table.toggle_sort("name");
    table.toggle_sort("name"); // name descending
    table.toggle_sort("email");

    assert_eq!(table.sort_indicator("email"), Some(SortDirection::Ascending));
    assert_eq!(table.sort_indicator("name"), None);
    let emails: Vec<String> = table
        .page_rows()
        .iter()
        .map(|(_, r)| r.display("email"))
        .collect();
    assert_eq!(emails, vec!["aa@x.com", "zz@x.com"]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut table = table_with(vec![
        person(1, "Same", "first@x.com"),
        person(2, "Same", "second@x.com"),
        person(3, "Same", "third@x.com"),
    ]);

    table.toggle_sort("name");
    let ids: Vec<i64> = table.page_rows().iter().map(|(_, r)| r.id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_sort_on_unsortable_column_is_noop() {
    let rows = vec![
        Record::new(1).set("name", "Bob"),
        Record::new(2).set("name", "Alice"),
    ];
    let mut table = TableState::new(vec![Column::new("Name", "name").not_sortable()]);
    table.begin_load();
    table.load(rows);

    table.toggle_sort("name");
    assert_eq!(table.sort_indicator("name"), None);
    let ids: Vec<i64> = table.page_rows().iter().map(|(_, r)| r.id()).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_rows_missing_the_sort_key_sort_first() {
    // Record 9 has no "name" field at all; it must sort as null.
    let mut table = table_with(vec![person(1, "Bob", "b@x.com"), Record::new(9)]);

    table.toggle_sort("name");
    let ids: Vec<i64> = table.page_rows().iter().map(|(_, r)| r.id()).collect();
    assert_eq!(ids, vec![9, 1]);
}

#[test]
fn test_pagination_bounds_clamp() {
    let rows = (0..12).map(|i| person(i, &format!("P{i:02}"), "p@x.com")).collect();
    let mut table = table_with(rows);

    assert_eq!(table.page_count(), 3);

    table.set_page(0);
    assert_eq!(table.page(), 1);

    table.set_page(4);
    assert_eq!(table.page(), 3);
    assert_eq!(table.page_rows().len(), 2);
}

#[test]
fn test_page_reclamps_when_filter_shrinks() {
    let rows = (0..12).map(|i| person(i, &format!("P{i:02}"), "p@x.com")).collect();
    let mut table = table_with(rows);

    table.set_page(3);
    table.set_query("P00");
    assert_eq!(table.page(), 1);
    assert_eq!(table.page_count(), 1);
}

#[test]
fn test_next_and_prev_page_stop_at_edges() {
    let rows = (0..7).map(|i| person(i, &format!("P{i}"), "p@x.com")).collect();
    let mut table = table_with(rows);

    table.prev_page();
    assert_eq!(table.page(), 1);

    table.next_page();
    assert_eq!(table.page(), 2);
    table.next_page();
    assert_eq!(table.page(), 2);
}

#[test]
fn test_numeric_fields_sort_numerically() {
    let rows = vec![
        Record::new(1).set("name", "a").set("score", 10i64),
        Record::new(2).set("name", "b").set("score", 2i64),
        Record::new(3).set("name", "c").set("score", 1.5f64),
    ];
    let mut table = TableState::new(vec![
        Column::new("Name", "name"),
        Column::new("Score", "score"),
    ]);
    table.begin_load();
    table.load(rows);

    table.toggle_sort("score");
    let ids: Vec<i64> = table.page_rows().iter().map(|(_, r)| r.id()).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}
