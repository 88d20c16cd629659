use waitlist_core::TableState;
use waitlist_core::model::Record;

fn twelve_rows() -> Vec<Record> {
    (0..12)
        .map(|i| {
            Record::new(i)
                .set("name", format!("Person {i:02}"))
                .set("email", format!("p{i}@example.org"))
                .set("phone", format!("555-{i:04}"))
                .set("website", "example.org")
        })
        .collect()
}

fn table() -> TableState {
    let mut table = TableState::default();
    table.begin_load();
    table.load(twelve_rows());
    table
}

#[test]
fn test_toggle_row_adds_then_removes() {
    let mut table = table();

    table.toggle_row(3);
    assert!(table.is_selected(3));

    table.toggle_row(3);
    assert!(!table.is_selected(3));
}

#[test]
fn test_selection_persists_across_page_navigation() {
    let mut table = table();

    table.set_page(2);
    table.toggle_row(7);

    table.set_page(1);
    table.set_page(2);
    assert!(table.is_selected(7));
}

#[test]
fn test_select_all_is_scoped_to_current_page() {
    let mut table = table();

    // Index 7 lives on page 2; select it first.
    table.toggle_row(7);

    table.set_page(1);
    table.set_page_selected(true);

    let mut selected: Vec<usize> = (0..12).filter(|&i| table.is_selected(i)).collect();
    selected.sort_unstable();
    assert_eq!(selected, vec![0, 1, 2, 3, 4, 7]);

    table.set_page_selected(false);
    let selected: Vec<usize> = (0..12).filter(|&i| table.is_selected(i)).collect();
    assert_eq!(selected, vec![7]);
}

#[test]
fn test_all_selected_on_page() {
    let mut table = table();

    assert!(!table.all_selected_on_page());

    table.set_page_selected(true);
    assert!(table.all_selected_on_page());

    table.toggle_row(2);
    assert!(!table.all_selected_on_page());
}

#[test]
fn test_all_selected_is_false_on_empty_page() {
    let mut table = table();

    table.set_query("no such person");
    assert_eq!(table.row_count(), 0);
    assert!(!table.all_selected_on_page());
}

#[test]
fn test_select_all_on_short_last_page() {
    let mut table = table();

    table.set_page(3); // indices 10 and 11
    table.set_page_selected(true);

    assert_eq!(table.selected_count(), 2);
    assert!(table.is_selected(10));
    assert!(table.is_selected(11));
}

#[test]
fn test_load_clears_selection() {
    let mut table = table();

    table.toggle_row(1);
    table.load(twelve_rows());
    assert_eq!(table.selected_count(), 0);
}
