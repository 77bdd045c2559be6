//! In-memory record collection backing the view.

use std::collections::BTreeSet;

use gridview_model::{Record, RecordId};
use tracing::warn;

/// The full addressable dataset, in fetch order.
///
/// Only the bulk action dispatcher mutates a store, and only in response to a
/// caller-issued command.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R: Record> RecordStore<R> {
    /// Build a store from fetched records. Later duplicates of an id are dropped.
    pub fn new(records: Vec<R>) -> Self {
        let mut seen = BTreeSet::new();
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id().clone()) {
                unique.push(record);
            } else {
                warn!(id = %record.id(), "dropping duplicate record id");
            }
        }
        Self { records: unique }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Identifiers of every record currently in the store.
    pub fn ids(&self) -> BTreeSet<RecordId> {
        self.records.iter().map(|record| record.id().clone()).collect()
    }

    /// Records on the zero-based page `page_index` of `page_size` rows.
    ///
    /// Returns an empty slice when the page starts past the end.
    pub fn window(&self, page_index: usize, page_size: usize) -> &[R] {
        let start = page_index.saturating_mul(page_size).min(self.records.len());
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }

    /// Remove every record whose id is in `ids`, returning the removed ids in
    /// store order.
    pub(crate) fn remove_ids(&mut self, ids: &BTreeSet<RecordId>) -> Vec<RecordId> {
        let mut removed = Vec::new();
        self.records.retain(|record| {
            if ids.contains(record.id()) {
                removed.push(record.id().clone());
                false
            } else {
                true
            }
        });
        removed
    }

    /// Set `status` on every record whose id is in `ids`, returning the updated
    /// ids in store order.
    pub(crate) fn set_status(&mut self, ids: &BTreeSet<RecordId>, status: R::Status) -> Vec<RecordId> {
        let mut updated = Vec::new();
        for record in self.records.iter_mut().filter(|record| ids.contains(record.id())) {
            record.set_status(status);
            updated.push(record.id().clone());
        }
        updated
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}
