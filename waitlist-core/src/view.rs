//! The view pipeline: raw rows + query + sort -> ordered store indices.
//!
//! Derivation is pure. The row store is never mutated here; the output is a
//! fresh index sequence that downstream pagination slices into the visible
//! window.

use crate::columns::ColumnSet;
use crate::model::Record;
use crate::model::Value;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip the direction.
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current sort configuration.
///
/// `key == None` means natural (fetch) order.
#[derive(Debug, Clone, Default)]
pub struct SortConfig {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Sort state after a header click on `key`: same key flips the
    /// direction, a different key starts ascending.
    pub fn clicked(&self, key: &str) -> SortConfig {
        match &self.key {
            Some(current) if current == key => SortConfig {
                key: Some(key.to_string()),
                direction: self.direction.toggle(),
            },
            _ => SortConfig {
                key: Some(key.to_string()),
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// Derive the filtered+sorted view as store indices.
///
/// Sorting happens first (stable, by the field at `sort.key`; missing
/// fields sort as null), then filtering keeps a row iff any registry
/// column's value matches the query. Filtering scans all columns regardless
/// of visibility: a hidden column's data still matches search.
pub fn derive(rows: &[Record], columns: &ColumnSet, query: &str, sort: &SortConfig) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..rows.len()).collect();

    if let Some(key) = &sort.key {
        indices.sort_by(|&a, &b| {
            let va = rows[a].get(key).unwrap_or(&Value::Null);
            let vb = rows[b].get(key).unwrap_or(&Value::Null);
            let ord = va.compare(vb);
            match sort.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }

    if query.is_empty() {
        return indices;
    }

    let needle = query.to_lowercase();
    indices
        .into_iter()
        .filter(|&i| row_matches(&rows[i], columns, &needle))
        .collect()
}

/// Whether any column's stringified field value contains the lowercased
/// query.
fn row_matches(row: &Record, columns: &ColumnSet, needle: &str) -> bool {
    columns
        .iter()
        .any(|col| row.display(&col.key).to_lowercase().contains(needle))
}

/// Number of pages for a filtered length: `ceil(len / PAGE_SIZE)`, 0 when
/// empty.
pub fn page_count(filtered_len: usize) -> usize {
    filtered_len.div_ceil(PAGE_SIZE)
}

/// Clamp a requested page to `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, filtered_len: usize) -> usize {
    page.clamp(1, page_count(filtered_len).max(1))
}

/// The half-open range of absolute indices on `page`.
pub fn page_window(page: usize, filtered_len: usize) -> std::ops::Range<usize> {
    let start = (page - 1) * PAGE_SIZE;
    let end = (page * PAGE_SIZE).min(filtered_len);
    start..end.max(start)
}
