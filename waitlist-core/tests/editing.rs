use waitlist_core::TableState;
use waitlist_core::model::Record;

fn table() -> TableState {
    let mut table = TableState::default();
    table.begin_load();
    table.load(vec![
        Record::new(1)
            .set("name", "Bob")
            .set("email", "bob@example.org"),
        Record::new(2)
            .set("name", "Alice")
            .set("email", "alice@example.org"),
        Record::new(3)
            .set("name", "Carol")
            .set("email", "carol@example.org"),
    ]);
    table
}

#[test]
fn test_edit_overwrites_one_field_in_place() {
    let mut table = table();

    table.edit_field(0, "email", "new@example.org");

    let row = table.row_at(0).unwrap();
    assert_eq!(row.display("email"), "new@example.org");
    assert_eq!(row.display("name"), "Bob");
    assert_eq!(table.store_len(), 3);
}

#[test]
fn test_edit_resolves_through_sorted_view() {
    let mut table = table();

    // Ascending by name puts Alice first even though she is stored second.
    table.toggle_sort("name");
    table.edit_field(0, "email", "edited@example.org");

    table.set_query("edited");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.page_rows()[0].1.display("name"), "Alice");
}

#[test]
fn test_edit_resolves_through_filtered_view() {
    let mut table = table();

    table.set_query("carol");
    assert_eq!(table.row_count(), 1);
    table.edit_field(0, "name", "Caroline");

    table.set_query("");
    let names: Vec<String> = table
        .page_rows()
        .iter()
        .map(|(_, r)| r.display("name"))
        .collect();
    assert_eq!(names, vec!["Bob", "Alice", "Caroline"]);
}

#[test]
fn test_edit_out_of_range_is_noop() {
    let mut table = table();

    table.edit_field(99, "name", "Nobody");

    let names: Vec<String> = table
        .page_rows()
        .iter()
        .map(|(_, r)| r.display("name"))
        .collect();
    assert_eq!(names, vec!["Bob", "Alice", "Carol"]);
}

#[test]
fn test_edit_accepts_raw_text_for_any_key() {
    let mut table = table();

    // No type validation: the editor's raw text lands as a string, even on
    // a field the record never had.
    table.edit_field(1, "nickname", "Al");
    assert_eq!(table.row_at(1).unwrap().display("nickname"), "Al");
}
