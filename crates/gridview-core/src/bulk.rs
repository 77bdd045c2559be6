//! Bulk actions over the current selection.
//!
//! Each action checks all of its preconditions before touching the store, so
//! it either applies to every selected record or to none. The store mutation
//! always happens before the selection is cleared.

use gridview_model::{Record, RecordId, StatusValue};
use serde::Serialize;
use tracing::{error, info};

use crate::error::{Result, ViewError};
use crate::selection::SelectionTracker;
use crate::store::RecordStore;

/// Closed set of bulk operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum BulkAction {
    Delete,
    SetStatus { status: String },
}

/// What a committed bulk action touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkReport {
    pub action: BulkAction,
    /// Affected ids, in store order.
    pub ids: Vec<RecordId>,
}

impl BulkReport {
    pub fn count(&self) -> usize {
        self.ids.len()
    }
}

/// Parse a raw status value from the rendering layer into the closed set.
///
/// An unknown value is a caller defect: it is logged at error level and
/// rejected without side effects.
pub fn parse_status<S: StatusValue>(raw: &str) -> Result<S> {
    raw.parse::<S>().map_err(|err| {
        error!(value = raw, error = %err, "bulk status change with unknown status");
        ViewError::InvalidStatus(raw.to_string())
    })
}

/// Remove every selected record, then clear the selection.
pub fn apply_delete<R: Record>(
    store: &mut RecordStore<R>,
    selection: &mut SelectionTracker,
) -> Result<BulkReport> {
    if selection.is_empty() {
        return Err(ViewError::EmptySelection);
    }
    let ids = store.remove_ids(selection.selected_ids());
    selection.clear();
    info!(count = ids.len(), ids = ?ids, "deleted records");
    Ok(BulkReport {
        action: BulkAction::Delete,
        ids,
    })
}

/// Set `status` on every selected record, then clear the selection.
pub fn apply_status_change<R: Record>(
    store: &mut RecordStore<R>,
    selection: &mut SelectionTracker,
    status: R::Status,
) -> Result<BulkReport> {
    if selection.is_empty() {
        return Err(ViewError::EmptySelection);
    }
    let ids = store.set_status(selection.selected_ids(), status);
    selection.clear();
    info!(count = ids.len(), status = %status, "updated record status");
    Ok(BulkReport {
        action: BulkAction::SetStatus {
            status: status.wire_value().to_string(),
        },
        ids,
    })
}
