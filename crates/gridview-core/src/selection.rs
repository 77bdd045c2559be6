//! Row selection, independent of pagination.

use std::collections::BTreeSet;

use gridview_model::RecordId;
use tracing::debug;

/// Set of selected record ids.
///
/// The owner keeps every tracked id present in the record store by calling
/// [`SelectionTracker::reconcile`] after any removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    ids: BTreeSet<RecordId>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it if present. Returns true if `id` is now
    /// selected.
    pub fn toggle(&mut self, id: &RecordId) -> bool {
        if self.ids.remove(id) {
            debug!(%id, "row deselected");
            false
        } else {
            debug!(%id, "row selected");
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn select(&mut self, id: &RecordId) {
        self.ids.insert(id.clone());
    }

    pub fn deselect(&mut self, id: &RecordId) {
        self.ids.remove(id);
    }

    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            debug!(count = self.ids.len(), "selection cleared");
        }
        self.ids.clear();
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn selected_ids(&self) -> &BTreeSet<RecordId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Drop every tracked id missing from `existing`, returning the dropped ids.
    pub fn reconcile(&mut self, existing: &BTreeSet<RecordId>) -> Vec<RecordId> {
        let stale: Vec<RecordId> = self.ids.difference(existing).cloned().collect();
        for id in &stale {
            self.ids.remove(id);
        }
        if !stale.is_empty() {
            debug!(count = stale.len(), "purged stale selection");
        }
        stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> BTreeSet<RecordId> {
        values.iter().map(|v| RecordId::new(*v).unwrap()).collect()
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut selection = SelectionTracker::new();
        let a = RecordId::new("A").unwrap();
        assert!(selection.toggle(&a));
        assert!(selection.is_selected(&a));
        assert!(!selection.toggle(&a));
        assert!(selection.is_empty());
    }

    #[test]
    fn reconcile_drops_only_missing_ids() {
        let mut selection = SelectionTracker::new();
        for id in ids(&["A", "B", "C"]) {
            selection.select(&id);
        }
        let stale = selection.reconcile(&ids(&["A", "B", "D"]));
        assert_eq!(stale, vec![RecordId::new("C").unwrap()]);
        assert_eq!(selection.selected_ids(), &ids(&["A", "B"]));
    }

    #[test]
    fn clear_empties_selection() {
        let mut selection = SelectionTracker::new();
        selection.select(&RecordId::new("A").unwrap());
        selection.clear();
        assert!(selection.is_empty());
    }
}
