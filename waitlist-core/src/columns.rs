//! Column descriptors and the ordered column registry.

/// Configuration for one table column.
///
/// Columns define the structure of the table: display label, the record
/// field they read, visibility, and whether clicking the header sorts.
///
/// # Examples
///
/// ```
/// use waitlist_core::columns::Column;
///
/// let columns = vec![
///     Column::new("Name", "name"),
///     Column::new("Notes", "notes").not_sortable(),
///     Column::new("Internal Id", "id").hidden(),
/// ];
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Display label shown in the header.
    pub name: String,
    /// Record field identifier. Unique across the registry.
    pub key: String,
    /// Whether the column is currently rendered.
    pub visible: bool,
    /// Whether clicking the header toggles sorting.
    pub sortable: bool,
}

impl Column {
    /// Create a new visible, sortable column.
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            visible: true,
            sortable: true,
        }
    }

    /// Start the column hidden.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Disable sorting for this column.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// The ordered column registry with its construction-time snapshot.
///
/// Registry order IS display order. The snapshot taken at construction backs
/// [`reset_to_default`](ColumnSet::reset_to_default); visibility-only resets
/// go through [`show_all`](ColumnSet::show_all), matching the two distinct
/// reset actions the table exposes.
#[derive(Debug, Clone)]
pub struct ColumnSet {
    columns: Vec<Column>,
    initial: Vec<Column>,
}

impl ColumnSet {
    /// Create a registry from the given columns, snapshotting them as the
    /// default.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            initial: columns.clone(),
            columns,
        }
    }

    /// Number of columns in the registry (visible or not).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All columns in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.visible)
    }

    /// Registry position of the column with the given key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.key == key)
    }

    /// Look up a column by key.
    pub fn get(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Replace the registry wholesale.
    ///
    /// Callers are trusted to pass a permutation/mutation of the existing
    /// set; the snapshot is unaffected.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    /// Flip visibility for the column matching `key`. Unknown keys are a
    /// no-op.
    pub fn toggle_visibility(&mut self, key: &str) {
        if let Some(col) = self.columns.iter_mut().find(|c| c.key == key) {
            col.visible = !col.visible;
        }
    }

    /// Move the column at `from` so it lands at `to`.
    ///
    /// A cancelled drag (`from == to`) or out-of-range index leaves the
    /// registry unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.columns.len() || to >= self.columns.len() {
            return;
        }
        let moved = self.columns.remove(from);
        self.columns.insert(to, moved);
    }

    /// Restore the registry captured at construction time: order and
    /// visibility both.
    pub fn reset_to_default(&mut self) {
        self.columns = self.initial.clone();
    }

    /// Make every column visible without touching the current order.
    pub fn show_all(&mut self) {
        for col in &mut self.columns {
            col.visible = true;
        }
    }
}
