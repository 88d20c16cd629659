//! The table-state engine.
//!
//! One `TableState` instance owns the column registry, the row store, the
//! search query, the sort configuration, the pagination cursor, and the
//! selection set for its whole lifetime. All mutation goes through the
//! operations below; every operation is total (out-of-range indices,
//! unknown keys, and cancelled drags are no-ops, never errors) and leaves
//! the state consistent before the next event is processed.

use log::debug;

use crate::columns::Column;
use crate::columns::ColumnSet;
use crate::model::Record;
use crate::selection::Selection;
use crate::view;
use crate::view::SortConfig;
use crate::view::SortDirection;

/// Lifecycle of the one-time remote load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Store populated. Terminal.
    Loaded,
    /// Fetch failed; store stays empty. Terminal.
    Failed,
}

/// State controller for one data table.
#[derive(Debug)]
pub struct TableState {
    columns: ColumnSet,
    rows: Vec<Record>,
    query: String,
    sort: SortConfig,
    page: usize,
    selection: Selection,
    phase: LoadPhase,
}

impl TableState {
    /// Create a table with the given column registry and an empty store.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns: ColumnSet::new(columns),
            rows: Vec::new(),
            query: String::new(),
            sort: SortConfig::default(),
            page: 1,
            selection: Selection::new(),
            phase: LoadPhase::Idle,
        }
    }

    /// The waitlist dashboard's column registry: all visible, all sortable.
    pub fn waitlist_columns() -> Vec<Column> {
        vec![
            Column::new("Name", "name"),
            Column::new("Email", "email"),
            Column::new("Phone", "phone"),
            Column::new("Website", "website"),
        ]
    }

    // -------------------------------------------------------------------------
    // Load lifecycle
    // -------------------------------------------------------------------------

    /// Current load phase.
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Mark the fetch as issued.
    pub fn begin_load(&mut self) {
        if self.phase == LoadPhase::Idle {
            self.phase = LoadPhase::Loading;
        }
    }

    /// One-time bulk set of the row store after the fetch resolves.
    pub fn load(&mut self, records: Vec<Record>) {
        debug!("loaded {} records", records.len());
        self.rows = records;
        self.phase = LoadPhase::Loaded;
        self.selection.clear();
        self.page = 1;
    }

    /// Mark the fetch as failed. The store remains empty.
    pub fn load_failed(&mut self) {
        debug!("record load failed");
        self.phase = LoadPhase::Failed;
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// The column registry.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// Replace the registry wholesale.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns.set_columns(columns);
    }

    /// Flip visibility of one column by key.
    pub fn toggle_column(&mut self, key: &str) {
        self.columns.toggle_visibility(key);
    }

    /// Move a column from one registry position to another.
    pub fn reorder_column(&mut self, from: usize, to: usize) {
        self.columns.reorder(from, to);
    }

    /// Restore the construction-time registry: order and visibility.
    pub fn reset_columns(&mut self) {
        self.columns.reset_to_default();
    }

    /// Make every column visible, keeping the current order.
    pub fn show_all_columns(&mut self) {
        self.columns.show_all();
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    /// Current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query. Resets to the first page, since the
    /// filtered set (and with it the page count) changes.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Current sort configuration.
    pub fn sort(&self) -> &SortConfig {
        &self.sort
    }

    /// Header click on `key`: same key flips direction, a different key
    /// sorts ascending. Unknown or unsortable keys are a no-op.
    pub fn toggle_sort(&mut self, key: &str) {
        let sortable = self.columns.get(key).is_some_and(|c| c.sortable);
        if !sortable {
            return;
        }
        self.sort = self.sort.clicked(key);
    }

    /// The direction shown in the header of `key`, if it is the sorted
    /// column.
    pub fn sort_indicator(&self, key: &str) -> Option<SortDirection> {
        match &self.sort.key {
            Some(current) if current == key => Some(self.sort.direction),
            _ => None,
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Current page, 1-based and always within `[1, max(1, page_count)]`.
    pub fn page(&self) -> usize {
        view::clamp_page(self.page, self.row_count())
    }

    /// Number of pages in the filtered view. 0 when the filter matches
    /// nothing.
    pub fn page_count(&self) -> usize {
        view::page_count(self.row_count())
    }

    /// Jump to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = view::clamp_page(page, self.row_count());
    }

    /// Advance one page.
    pub fn next_page(&mut self) {
        self.set_page(self.page().saturating_add(1));
    }

    /// Go back one page.
    pub fn prev_page(&mut self) {
        self.set_page(self.page().saturating_sub(1));
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Toggle selection of one absolute index.
    pub fn toggle_row(&mut self, absolute_index: usize) {
        self.selection.toggle(absolute_index);
    }

    /// Select or deselect every row on the current page. Selections on
    /// other pages are preserved.
    pub fn set_page_selected(&mut self, checked: bool) {
        let window: Vec<usize> = view::page_window(self.page(), self.row_count()).collect();
        self.selection.set_page(&window, checked);
    }

    /// Whether an absolute index is selected.
    pub fn is_selected(&self, absolute_index: usize) -> bool {
        self.selection.is_selected(absolute_index)
    }

    /// Whether the current page is non-empty and fully selected.
    pub fn all_selected_on_page(&self) -> bool {
        let window: Vec<usize> = view::page_window(self.page(), self.row_count()).collect();
        self.selection.contains_all(&window)
    }

    /// Number of selected rows.
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// Overwrite one field on the row at `absolute_index` in the current
    /// filtered+sorted view. The editor's raw text is accepted verbatim;
    /// out-of-range indices are a no-op.
    pub fn edit_field(&mut self, absolute_index: usize, key: &str, value: impl Into<String>) {
        let derived = self.derived();
        let Some(&store_index) = derived.get(absolute_index) else {
            return;
        };
        self.rows[store_index].insert(key, value.into());
    }

    // -------------------------------------------------------------------------
    // Derived views
    // -------------------------------------------------------------------------

    /// Store indices of the filtered+sorted view, in display order.
    pub fn derived(&self) -> Vec<usize> {
        view::derive(&self.rows, &self.columns, &self.query, &self.sort)
    }

    /// Length of the filtered view.
    pub fn row_count(&self) -> usize {
        self.derived().len()
    }

    /// Total rows in the store, ignoring the filter.
    pub fn store_len(&self) -> usize {
        self.rows.len()
    }

    /// The current page's rows as (absolute index, record) pairs.
    pub fn page_rows(&self) -> Vec<(usize, &Record)> {
        let derived = self.derived();
        view::page_window(self.page(), derived.len())
            .map(|abs| (abs, &self.rows[derived[abs]]))
            .collect()
    }

    /// The record at an absolute index in the current view.
    pub fn row_at(&self, absolute_index: usize) -> Option<&Record> {
        let derived = self.derived();
        derived.get(absolute_index).map(|&i| &self.rows[i])
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(Self::waitlist_columns())
    }
}
