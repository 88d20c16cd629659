use waitlist_core::LoadPhase;
use waitlist_core::TableState;
use waitlist_core::drawer::DrawerState;
use waitlist_core::drawer::NavTab;
use waitlist_core::model::Record;

#[test]
fn test_load_phase_success_path() {
    let mut table = TableState::default();
    assert_eq!(table.phase(), LoadPhase::Idle);

    table.begin_load();
    assert_eq!(table.phase(), LoadPhase::Loading);

    table.load(vec![Record::new(1).set("name", "Leanne Graham")]);
    assert_eq!(table.phase(), LoadPhase::Loaded);
    assert_eq!(table.store_len(), 1);
}

#[test]
fn test_load_phase_failure_path() {
    let mut table = TableState::default();

    table.begin_load();
    table.load_failed();

    assert_eq!(table.phase(), LoadPhase::Failed);
    assert_eq!(table.store_len(), 0);
    assert_eq!(table.page_count(), 0);
    assert_eq!(table.page(), 1);
}

#[test]
fn test_begin_load_only_leaves_idle() {
    let mut table = TableState::default();

    table.begin_load();
    table.load(vec![]);
    table.begin_load();
    assert_eq!(table.phase(), LoadPhase::Loaded);
}

#[test]
fn test_drawer_starts_collapsed_on_dashboard() {
    let drawer = DrawerState::new();
    assert!(!drawer.is_open());
    assert_eq!(drawer.active(), NavTab::Dashboard);
}

#[test]
fn test_drawer_toggle_and_activate() {
    let mut drawer = DrawerState::new();

    drawer.toggle();
    assert!(drawer.is_open());

    drawer.activate(NavTab::Subscription);
    assert_eq!(drawer.active(), NavTab::Subscription);

    // Collapsing keeps the active tab.
    drawer.close();
    assert_eq!(drawer.active(), NavTab::Subscription);
}

#[test]
fn test_nav_tab_cycle() {
    assert_eq!(NavTab::Dashboard.next(), NavTab::Subscription);
    assert_eq!(NavTab::Subscription.next(), NavTab::Dashboard);
}
