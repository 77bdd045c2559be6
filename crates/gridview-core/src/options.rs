//! Configuration options for the view controller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page sizes offered by the rows-per-page selector.
pub const DEFAULT_PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("at least one page size must be allowed")]
    NoPageSizes,
    #[error("page sizes must be positive")]
    ZeroPageSize,
    #[error("default page size {default} is not one of {allowed:?}")]
    DefaultNotAllowed { default: usize, allowed: Vec<usize> },
}

/// Options controlling pagination behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Allowed rows-per-page values, in selector order.
    pub page_sizes: Vec<usize>,

    /// Rows per page when the controller is constructed.
    pub default_page_size: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.page_sizes = sizes;
        self
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Returns true if `size` is offered by the selector.
    pub fn allows(&self, size: usize) -> bool {
        self.page_sizes.contains(&size)
    }

    /// Check that the options describe a usable selector.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.page_sizes.is_empty() {
            return Err(OptionsError::NoPageSizes);
        }
        if self.page_sizes.contains(&0) {
            return Err(OptionsError::ZeroPageSize);
        }
        if !self.allows(self.default_page_size) {
            return Err(OptionsError::DefaultNotAllowed {
                default: self.default_page_size,
                allowed: self.page_sizes.clone(),
            });
        }
        Ok(())
    }
}
