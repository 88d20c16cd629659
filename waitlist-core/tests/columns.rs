use waitlist_core::TableState;
use waitlist_core::columns::Column;
use waitlist_core::columns::ColumnSet;
use waitlist_core::model::Record;

fn registry() -> ColumnSet {
    ColumnSet::new(TableState::waitlist_columns())
}

fn keys(set: &ColumnSet) -> Vec<&str> {
    set.iter().map(|c| c.key.as_str()).collect()
}

#[test]
fn test_reorder_moves_column() {
    let mut set = registry();

    set.reorder(0, 2);
    assert_eq!(keys(&set), vec!["email", "phone", "name", "website"]);

    set.reorder(3, 0);
    assert_eq!(keys(&set), vec!["website", "email", "phone", "name"]);
}

#[test]
fn test_reorder_to_same_index_is_noop() {
    let mut set = registry();

    set.reorder(2, 2);
    assert_eq!(keys(&set), vec!["name", "email", "phone", "website"]);
}

#[test]
fn test_reorder_out_of_range_is_noop() {
    let mut set = registry();

    set.reorder(9, 1);
    set.reorder(1, 9);
    assert_eq!(keys(&set), vec!["name", "email", "phone", "website"]);
}

#[test]
fn test_toggle_visibility() {
    let mut set = registry();

    set.toggle_visibility("phone");
    assert!(!set.get("phone").unwrap().visible);
    assert_eq!(set.visible().count(), 3);

    set.toggle_visibility("phone");
    assert!(set.get("phone").unwrap().visible);
}

#[test]
fn test_toggle_visibility_unknown_key_is_noop() {
    let mut set = registry();

    set.toggle_visibility("nonexistent");
    assert_eq!(set.visible().count(), 4);
}

#[test]
fn test_show_all_keeps_order() {
    let mut set = registry();

    set.reorder(0, 3);
    set.toggle_visibility("name");
    set.toggle_visibility("phone");

    set.show_all();
    assert_eq!(set.visible().count(), 4);
    // show_all restores visibility only, never the order.
    assert_eq!(keys(&set), vec!["email", "phone", "website", "name"]);
}

#[test]
fn test_reset_to_default_restores_order_and_visibility() {
    let mut set = registry();

    set.reorder(0, 3);
    set.toggle_visibility("email");
    set.reset_to_default();

    assert_eq!(keys(&set), vec!["name", "email", "phone", "website"]);
    assert_eq!(set.visible().count(), 4);
}

#[test]
fn test_reset_does_not_touch_rows_or_selection() {
    let mut table = TableState::default();
    table.begin_load();
    table.load(vec![
        Record::new(1).set("name", "Leanne Graham"),
        Record::new(2).set("name", "Ervin Howell"),
    ]);

    table.toggle_row(1);
    table.toggle_column("name");
    table.toggle_column("email");
    table.reset_columns();

    assert!(table.columns().iter().all(|c| c.visible));
    assert_eq!(table.store_len(), 2);
    assert!(table.is_selected(1));
}

#[test]
fn test_set_columns_replaces_wholesale() {
    let mut set = registry();

    let mut reordered: Vec<Column> = set.iter().cloned().collect();
    reordered.rotate_left(1);
    set.set_columns(reordered);

    assert_eq!(keys(&set), vec!["email", "phone", "website", "name"]);
}
