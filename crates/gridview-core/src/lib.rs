//! Tabular view controller.
//!
//! State machine for browsing a paginated record set: page navigation with a
//! validated page-jump input, pagination-independent row selection, and bulk
//! delete / status-change over the selection.
//!
//! Everything runs synchronously on the caller's thread. The record fetch has
//! already completed when a [`TableController`] is built.

pub mod bulk;
pub mod command;
pub mod controller;
pub mod error;
pub mod options;
pub mod pagination;
pub mod selection;
pub mod store;

pub use bulk::{BulkAction, BulkReport};
pub use command::{CommandOutcome, ViewCommand};
pub use controller::{TableController, ViewSnapshot};
pub use error::{Result, ViewError};
pub use options::{OptionsError, ViewOptions};
pub use pagination::{PageJump, Pagination};
pub use selection::SelectionTracker;
pub use store::RecordStore;
