//! The tabular view controller.
//!
//! [`TableController`] owns the record store, the pagination state with its
//! page-jump draft, and the selection. Commands are its only mutation surface;
//! [`TableController::snapshot`] is the read-only projection handed to the
//! rendering layer after each command.

use gridview_model::{Record, RecordId};
use serde::Serialize;
use tracing::{debug, debug_span};

use crate::bulk::{self, BulkReport};
use crate::command::{CommandOutcome, ViewCommand};
use crate::error::{Result, ViewError};
use crate::options::{OptionsError, ViewOptions};
use crate::pagination::{PageJump, Pagination};
use crate::selection::SelectionTracker;
use crate::store::RecordStore;

/// Read-only view state, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub page_index: usize,
    /// One-based page number, as displayed.
    pub page_number: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub draft: String,
    pub total_records: usize,
    pub selected_count: usize,
    pub selected_ids: Vec<RecordId>,
    pub can_previous_page: bool,
    pub can_next_page: bool,
    /// One-based inclusive row range of the current page.
    pub row_range: Option<(usize, usize)>,
}

/// Controller for one paginated, selectable record table.
#[derive(Debug, Clone)]
pub struct TableController<R> {
    store: RecordStore<R>,
    pagination: Pagination,
    selection: SelectionTracker,
    options: ViewOptions,
}

impl<R: Record> TableController<R> {
    /// Build a controller over fetched records with default options.
    pub fn new(records: Vec<R>) -> Self {
        let options = ViewOptions::default();
        Self {
            store: RecordStore::new(records),
            pagination: Pagination::new(options.default_page_size),
            selection: SelectionTracker::new(),
            options,
        }
    }

    /// Build a controller with explicit options.
    pub fn with_options(
        records: Vec<R>,
        options: ViewOptions,
    ) -> std::result::Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            store: RecordStore::new(records),
            pagination: Pagination::new(options.default_page_size),
            selection: SelectionTracker::new(),
            options,
        })
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn records(&self) -> &[R] {
        self.store.records()
    }

    /// Hand the (possibly mutated) records back to the caller.
    pub fn into_records(self) -> Vec<R> {
        self.store.into_records()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.store.len())
    }

    /// Records on the committed page.
    pub fn visible_records(&self) -> &[R] {
        self.store
            .window(self.pagination.page_index(), self.pagination.page_size())
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.is_selected(id)
    }

    /// True when the current page has rows and all of them are selected.
    pub fn is_page_fully_selected(&self) -> bool {
        let rows = self.visible_records();
        !rows.is_empty() && rows.iter().all(|row| self.selection.is_selected(row.id()))
    }

    /// True when some, but not all, rows on the current page are selected.
    pub fn is_page_partially_selected(&self) -> bool {
        let rows = self.visible_records();
        let selected = rows
            .iter()
            .filter(|row| self.selection.is_selected(row.id()))
            .count();
        selected > 0 && selected < rows.len()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let total_records = self.store.len();
        ViewSnapshot {
            page_index: self.pagination.page_index(),
            page_number: self.pagination.page_number(),
            total_pages: self.pagination.total_pages(total_records),
            page_size: self.pagination.page_size(),
            draft: self.pagination.draft().to_string(),
            total_records,
            selected_count: self.selection.len(),
            selected_ids: self.selection.selected_ids().iter().cloned().collect(),
            can_previous_page: self.pagination.can_previous_page(),
            can_next_page: self.pagination.can_next_page(total_records),
            row_range: self.pagination.row_range(total_records),
        }
    }

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Change rows per page. The size must be one of the configured sizes.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<bool> {
        if !self.options.allows(page_size) {
            return Err(ViewError::InvalidPageSize {
                requested: page_size,
                allowed: self.options.page_sizes.clone(),
            });
        }
        Ok(self.pagination.set_page_size(page_size, self.store.len()))
    }

    pub fn go_to_page(&mut self, page_index: usize) -> Result<bool> {
        self.pagination.go_to_page(page_index, self.store.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.pagination.next_page(self.store.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.pagination.previous_page()
    }

    pub fn first_page(&mut self) -> bool {
        self.pagination.first_page()
    }

    pub fn last_page(&mut self) -> bool {
        self.pagination.last_page(self.store.len())
    }

    pub fn update_draft(&mut self, text: &str) -> Result<()> {
        self.pagination.update_draft(text)
    }

    pub fn push_draft_char(&mut self, c: char) -> Result<()> {
        self.pagination.push_draft_char(c)
    }

    pub fn pop_draft_char(&mut self) -> Option<char> {
        self.pagination.pop_draft_char()
    }

    pub fn commit_page_jump(&mut self) -> PageJump {
        self.pagination.commit_page_jump(self.store.len())
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Flip selection of a row that exists in the store.
    pub fn toggle(&mut self, id: &RecordId) -> Result<bool> {
        if !self.store.contains(id) {
            return Err(ViewError::UnknownRecord(id.clone()));
        }
        Ok(self.selection.toggle(id))
    }

    /// Select every row on the current page, or deselect them all if they are
    /// already selected. Rows on other pages keep their state.
    pub fn toggle_page_selection(&mut self) -> usize {
        let select = !self.is_page_fully_selected();
        let page_size = self.pagination.page_size();
        let rows = self.store.window(self.pagination.page_index(), page_size);
        for row in rows {
            if select {
                self.selection.select(row.id());
            } else {
                self.selection.deselect(row.id());
            }
        }
        debug!(select, rows = rows.len(), "toggled page selection");
        self.selection.len()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Drop selected ids that no longer exist in the store.
    pub fn reconcile_selection(&mut self) -> Vec<RecordId> {
        let existing = self.store.ids();
        self.selection.reconcile(&existing)
    }

    // =========================================================================
    // Bulk actions
    // =========================================================================

    pub fn apply_delete(&mut self) -> Result<BulkReport> {
        let report = bulk::apply_delete(&mut self.store, &mut self.selection)?;
        self.pagination.clamp(self.store.len());
        Ok(report)
    }

    pub fn apply_status_change(&mut self, status: R::Status) -> Result<BulkReport> {
        bulk::apply_status_change(&mut self.store, &mut self.selection, status)
    }

    /// Bulk status change from a raw selector value.
    pub fn apply_status_change_str(&mut self, raw: &str) -> Result<BulkReport> {
        let status = bulk::parse_status::<R::Status>(raw)?;
        self.apply_status_change(status)
    }

    // =========================================================================
    // External reset
    // =========================================================================

    /// Swap in a freshly fetched record set, keeping the page valid and the
    /// selection limited to ids that still exist.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.store = RecordStore::new(records);
        self.pagination.clamp(self.store.len());
        self.reconcile_selection();
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply one inbound command.
    pub fn dispatch(&mut self, command: ViewCommand) -> Result<CommandOutcome> {
        let span = debug_span!("command", name = command.name());
        let _guard = span.enter();
        match command {
            ViewCommand::SetPageSize(size) => self
                .set_page_size(size)
                .map(|moved| CommandOutcome::Navigated { moved }),
            ViewCommand::GoToPage(index) => self
                .go_to_page(index)
                .map(|moved| CommandOutcome::Navigated { moved }),
            ViewCommand::NextPage => Ok(CommandOutcome::Navigated {
                moved: self.next_page(),
            }),
            ViewCommand::PreviousPage => Ok(CommandOutcome::Navigated {
                moved: self.previous_page(),
            }),
            ViewCommand::FirstPage => Ok(CommandOutcome::Navigated {
                moved: self.first_page(),
            }),
            ViewCommand::LastPage => Ok(CommandOutcome::Navigated {
                moved: self.last_page(),
            }),
            ViewCommand::UpdateDraft(text) => {
                self.update_draft(&text).map(|()| CommandOutcome::Draft)
            }
            ViewCommand::PushDraftChar(c) => {
                self.push_draft_char(c).map(|()| CommandOutcome::Draft)
            }
            ViewCommand::PopDraftChar => {
                self.pop_draft_char();
                Ok(CommandOutcome::Draft)
            }
            ViewCommand::CommitPageJump => Ok(CommandOutcome::PageJump {
                jump: self.commit_page_jump(),
            }),
            ViewCommand::Toggle(id) => self.toggle(&id).map(|_| CommandOutcome::Selection {
                selected: self.selection.len(),
            }),
            ViewCommand::TogglePageSelection => Ok(CommandOutcome::Selection {
                selected: self.toggle_page_selection(),
            }),
            ViewCommand::ClearSelection => {
                self.clear_selection();
                Ok(CommandOutcome::Selection { selected: 0 })
            }
            ViewCommand::ApplyDelete => self
                .apply_delete()
                .map(|report| CommandOutcome::Bulk { report }),
            ViewCommand::ApplyStatusChange(raw) => self
                .apply_status_change_str(&raw)
                .map(|report| CommandOutcome::Bulk { report }),
        }
    }
}
