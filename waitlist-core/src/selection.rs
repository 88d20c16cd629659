//! Selection tracking for table rows.

use std::collections::HashSet;

/// Tracks selected rows by their absolute index into the filtered+sorted
/// view.
///
/// Indices are positional: they are only meaningful relative to the current
/// derived view, and selections made on one page survive toggling another
/// page.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected: HashSet<usize>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection for an absolute index. Returns `true` if the index
    /// is selected afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.selected.contains(&index) {
            self.selected.remove(&index);
            false
        } else {
            self.selected.insert(index);
            true
        }
    }

    /// Bulk-toggle one page's worth of absolute indices.
    ///
    /// When `checked`, the indices are unioned into the set; when unchecked
    /// they are subtracted. Selections outside `indices` are untouched.
    pub fn set_page(&mut self, indices: &[usize], checked: bool) {
        if checked {
            self.selected.extend(indices.iter().copied());
        } else {
            for index in indices {
                self.selected.remove(index);
            }
        }
    }

    /// Check if an absolute index is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Whether every index in `indices` is selected. Empty slices report
    /// `false`: an empty page is never "all selected".
    pub fn contains_all(&self, indices: &[usize]) -> bool {
        !indices.is_empty() && indices.iter().all(|i| self.selected.contains(i))
    }

    /// Number of selected indices.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Iterate the selected indices (unordered).
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
