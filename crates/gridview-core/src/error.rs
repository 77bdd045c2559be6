//! Errors reported by the view controller.
//!
//! Every variant is recoverable: by the time a command returns one of these,
//! the controller state already satisfies all of its invariants again.

use gridview_model::RecordId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// Requested page index lies outside `[0, total_pages)`.
    #[error("page index {requested} is out of range (total pages: {total_pages})")]
    OutOfRangePage { requested: usize, total_pages: usize },

    /// Draft edit containing something other than ASCII digits.
    #[error("page input accepts digits only, got {0:?}")]
    InvalidDraftInput(String),

    /// Bulk action issued with no rows selected.
    #[error("no rows selected")]
    EmptySelection,

    /// Bulk status change to a value outside the closed status set.
    #[error("invalid status {0:?}")]
    InvalidStatus(String),

    /// Page size not in the configured allowed set.
    #[error("page size {requested} is not one of {allowed:?}")]
    InvalidPageSize {
        requested: usize,
        allowed: Vec<usize>,
    },

    /// Selection toggle for an id that is not in the record store.
    #[error("unknown record {0}")]
    UnknownRecord(RecordId),
}

impl ViewError {
    /// Returns true for caller defects rather than reachable UI states.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, ViewError::InvalidStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, ViewError>;
