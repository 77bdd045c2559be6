//! Pagination state and the page-jump draft.
//!
//! The committed page and the draft text are two separate fields with a
//! one-directional sync rule:
//!
//! - committed → draft: every time the committed page changes, for any
//!   reason, the draft is overwritten with the new 1-based page number.
//! - draft → committed: only through [`Pagination::commit_page_jump`], after
//!   validation.
//!
//! Methods that depend on the dataset size take `total_records` so the state
//! never caches a count that could go stale.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, ViewError};

/// Result of committing the page-jump draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PageJump {
    /// The draft named a valid page and it is now committed.
    Committed { page_index: usize },
    /// The draft was rejected and reset to the committed page.
    ///
    /// `requested` is the 1-based page the draft parsed to, or `None` when it
    /// was empty or too large to parse.
    Reverted {
        page_index: usize,
        requested: Option<usize>,
    },
}

/// Committed pagination state plus the uncommitted page-jump draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
    draft: String,
}

impl Pagination {
    pub(crate) fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page size must be positive");
        Self {
            page_index: 0,
            page_size,
            draft: "1".to_string(),
        }
    }

    /// Zero-based committed page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// One-based committed page, as shown to the user.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current text of the page-jump input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// `max(1, ceil(total_records / page_size))`.
    pub fn total_pages(&self, total_records: usize) -> usize {
        total_records.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn can_previous_page(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_next_page(&self, total_records: usize) -> bool {
        self.page_index + 1 < self.total_pages(total_records)
    }

    /// One-based inclusive range of rows on the committed page, or `None` when
    /// there are no rows.
    pub fn row_range(&self, total_records: usize) -> Option<(usize, usize)> {
        if total_records == 0 {
            return None;
        }
        let start = self.page_index * self.page_size + 1;
        let end = ((self.page_index + 1) * self.page_size).min(total_records);
        Some((start, end))
    }

    /// Change rows per page, clamping the committed page so it stays valid.
    ///
    /// Returns true if the committed page moved.
    pub(crate) fn set_page_size(&mut self, page_size: usize, total_records: usize) -> bool {
        debug_assert!(page_size > 0, "page size must be positive");
        self.page_size = page_size;
        self.clamp(total_records)
    }

    /// Jump to a zero-based page. An out-of-range request keeps the committed
    /// page and resets the draft to it.
    pub fn go_to_page(&mut self, page_index: usize, total_records: usize) -> Result<bool> {
        let total_pages = self.total_pages(total_records);
        if page_index >= total_pages {
            debug!(requested = page_index, total_pages, "rejected page index");
            self.sync_draft();
            return Err(ViewError::OutOfRangePage {
                requested: page_index,
                total_pages,
            });
        }
        Ok(self.commit(page_index))
    }

    /// Returns true if the page moved; a no-op on the last page.
    pub fn next_page(&mut self, total_records: usize) -> bool {
        if !self.can_next_page(total_records) {
            return false;
        }
        self.commit(self.page_index + 1)
    }

    /// Returns true if the page moved; a no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if !self.can_previous_page() {
            return false;
        }
        self.commit(self.page_index - 1)
    }

    pub fn first_page(&mut self) -> bool {
        self.commit(0)
    }

    pub fn last_page(&mut self, total_records: usize) -> bool {
        self.commit(self.total_pages(total_records) - 1)
    }

    /// Pull the committed page back inside `[0, total_pages)` after the
    /// dataset or the page size changed. Returns true if the page moved.
    pub fn clamp(&mut self, total_records: usize) -> bool {
        let last = self.total_pages(total_records) - 1;
        if self.page_index > last {
            self.commit(last)
        } else {
            false
        }
    }

    /// Replace the draft text. Only empty or all-digit text is accepted.
    pub fn update_draft(&mut self, text: &str) -> Result<()> {
        if !text.chars().all(|c| c.is_ascii_digit()) {
            warn!(input = text, "rejected non-digit page input");
            return Err(ViewError::InvalidDraftInput(text.to_string()));
        }
        self.draft = text.to_string();
        Ok(())
    }

    /// Append one typed character to the draft, rejecting non-digits.
    pub fn push_draft_char(&mut self, c: char) -> Result<()> {
        if !c.is_ascii_digit() {
            warn!(input = %c, "rejected non-digit page input");
            return Err(ViewError::InvalidDraftInput(c.to_string()));
        }
        self.draft.push(c);
        Ok(())
    }

    pub fn pop_draft_char(&mut self) -> Option<char> {
        self.draft.pop()
    }

    /// Validate the draft and commit it as the new page.
    ///
    /// The draft must parse to a page number in `[1, total_pages]`. Anything
    /// else resets the draft to the committed page.
    pub fn commit_page_jump(&mut self, total_records: usize) -> PageJump {
        let total_pages = self.total_pages(total_records);
        let requested = self.draft.parse::<usize>().ok();
        match requested {
            Some(page) if (1..=total_pages).contains(&page) => {
                self.commit(page - 1);
                self.sync_draft();
                PageJump::Committed {
                    page_index: self.page_index,
                }
            }
            _ => {
                warn!(
                    draft = %self.draft,
                    total_pages,
                    "page jump out of range; resetting input"
                );
                self.sync_draft();
                PageJump::Reverted {
                    page_index: self.page_index,
                    requested,
                }
            }
        }
    }

    /// Set the committed page and mirror it into the draft if it changed.
    fn commit(&mut self, page_index: usize) -> bool {
        if page_index == self.page_index {
            return false;
        }
        debug!(from = self.page_index, to = page_index, "page changed");
        self.page_index = page_index;
        self.sync_draft();
        true
    }

    fn sync_draft(&mut self) {
        self.draft = self.page_number().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_never_below_one() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 1);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(60), 6);
        assert_eq!(pagination.total_pages(61), 7);
    }

    #[test]
    fn go_to_page_bounds() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.go_to_page(5, 60), Ok(true));
        assert_eq!(
            pagination.go_to_page(6, 60),
            Err(ViewError::OutOfRangePage {
                requested: 6,
                total_pages: 6,
            })
        );
        assert_eq!(pagination.page_index(), 5);
        assert_eq!(pagination.draft(), "6");
    }

    #[test]
    fn rejected_page_index_resets_draft() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(2, 60).unwrap();
        pagination.update_draft("5").unwrap();
        assert_eq!(
            pagination.go_to_page(9, 60),
            Err(ViewError::OutOfRangePage {
                requested: 9,
                total_pages: 6,
            })
        );
        assert_eq!(pagination.page_index(), 2);
        assert_eq!(pagination.draft(), "3");
    }

    #[test]
    fn next_and_previous_stop_at_bounds() {
        let mut pagination = Pagination::new(10);
        assert!(!pagination.previous_page());
        assert!(pagination.next_page(20));
        assert!(!pagination.next_page(20));
        assert_eq!(pagination.page_index(), 1);
        assert!(pagination.previous_page());
        assert_eq!(pagination.page_index(), 0);
    }

    #[test]
    fn page_size_change_clamps_index() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(5, 60).unwrap();
        assert!(pagination.set_page_size(50, 60));
        assert_eq!(pagination.page_index(), 1);
        assert_eq!(pagination.draft(), "2");
    }

    #[test]
    fn page_size_change_without_move_keeps_draft_edit() {
        let mut pagination = Pagination::new(10);
        pagination.update_draft("4").unwrap();
        assert!(!pagination.set_page_size(20, 60));
        assert_eq!(pagination.draft(), "4");
    }

    #[test]
    fn draft_rejects_non_digits() {
        let mut pagination = Pagination::new(10);
        pagination.update_draft("12").unwrap();
        assert_eq!(
            pagination.update_draft("1a"),
            Err(ViewError::InvalidDraftInput("1a".to_string()))
        );
        assert_eq!(pagination.draft(), "12");
        assert!(pagination.update_draft("").is_ok());
        assert_eq!(pagination.draft(), "");
    }

    #[test]
    fn keystrokes_reject_one_character_at_a_time() {
        let mut pagination = Pagination::new(10);
        pagination.update_draft("").unwrap();
        pagination.push_draft_char('3').unwrap();
        assert!(pagination.push_draft_char('-').is_err());
        pagination.push_draft_char('1').unwrap();
        assert_eq!(pagination.draft(), "31");
        assert_eq!(pagination.pop_draft_char(), Some('1'));
        assert_eq!(pagination.draft(), "3");
    }

    #[test]
    fn commit_rejects_out_of_range_draft() {
        let mut pagination = Pagination::new(10);
        pagination.go_to_page(2, 60).unwrap();
        pagination.update_draft("7").unwrap();
        assert_eq!(
            pagination.commit_page_jump(60),
            PageJump::Reverted {
                page_index: 2,
                requested: Some(7),
            }
        );
        assert_eq!(pagination.draft(), "3");

        pagination.update_draft("0").unwrap();
        assert!(matches!(
            pagination.commit_page_jump(60),
            PageJump::Reverted { requested: Some(0), .. }
        ));
        assert_eq!(pagination.page_index(), 2);
    }

    #[test]
    fn commit_treats_empty_and_overflow_as_unparseable() {
        let mut pagination = Pagination::new(10);
        pagination.update_draft("").unwrap();
        assert_eq!(
            pagination.commit_page_jump(60),
            PageJump::Reverted {
                page_index: 0,
                requested: None,
            }
        );
        pagination
            .update_draft("99999999999999999999999999")
            .unwrap();
        assert!(matches!(
            pagination.commit_page_jump(60),
            PageJump::Reverted { requested: None, .. }
        ));
        assert_eq!(pagination.draft(), "1");
    }

    #[test]
    fn commit_accepts_leading_zeros_and_canonicalizes() {
        let mut pagination = Pagination::new(10);
        pagination.update_draft("04").unwrap();
        assert_eq!(
            pagination.commit_page_jump(60),
            PageJump::Committed { page_index: 3 }
        );
        assert_eq!(pagination.draft(), "4");
    }

    #[test]
    fn row_range_for_partial_last_page() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.row_range(0), None);
        pagination.last_page(25);
        assert_eq!(pagination.row_range(25), Some((21, 25)));
    }
}
