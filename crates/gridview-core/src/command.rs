//! Inbound commands from the rendering layer and their outcomes.

use gridview_model::RecordId;
use serde::Serialize;

use crate::bulk::BulkReport;
use crate::pagination::PageJump;

/// One user intent. Commands are applied in the order they are issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Change rows per page
    SetPageSize(usize),
    /// Jump to a zero-based page
    GoToPage(usize),
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    /// Replace the page-jump input text
    UpdateDraft(String),
    /// Type one character into the page-jump input
    PushDraftChar(char),
    /// Delete the last character of the page-jump input
    PopDraftChar,
    /// Validate the page-jump input and navigate
    CommitPageJump,
    /// Flip selection of one row
    Toggle(RecordId),
    /// Header checkbox: select or deselect every row on the current page
    TogglePageSelection,
    ClearSelection,
    ApplyDelete,
    /// Bulk status change with the raw value from the status selector
    ApplyStatusChange(String),
}

impl ViewCommand {
    /// Short stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ViewCommand::SetPageSize(_) => "set_page_size",
            ViewCommand::GoToPage(_) => "go_to_page",
            ViewCommand::NextPage => "next_page",
            ViewCommand::PreviousPage => "previous_page",
            ViewCommand::FirstPage => "first_page",
            ViewCommand::LastPage => "last_page",
            ViewCommand::UpdateDraft(_) => "update_draft",
            ViewCommand::PushDraftChar(_) => "push_draft_char",
            ViewCommand::PopDraftChar => "pop_draft_char",
            ViewCommand::CommitPageJump => "commit_page_jump",
            ViewCommand::Toggle(_) => "toggle",
            ViewCommand::TogglePageSelection => "toggle_page_selection",
            ViewCommand::ClearSelection => "clear_selection",
            ViewCommand::ApplyDelete => "apply_delete",
            ViewCommand::ApplyStatusChange(_) => "apply_status_change",
        }
    }
}

/// What a successfully dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    /// A navigation command ran; `moved` is false at a boundary.
    Navigated { moved: bool },
    /// The page-jump input changed.
    Draft,
    PageJump { jump: PageJump },
    /// The selection changed; `selected` is the new count.
    Selection { selected: usize },
    Bulk { report: BulkReport },
}
