use serde::{Deserialize, Serialize};

use super::PageParamsError;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Validated pagination parameters with a 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    page: u32,
    limit: u32,
}

impl PageParams {
    /// Creates pagination parameters, validating that `page >= 1` and
    /// `1 <= limit <= MAX_PAGE_LIMIT`.
    pub fn new(page: u32, limit: u32) -> Result<Self, PageParamsError> {
        if page == 0 {
            return Err(PageParamsError::ZeroPage);
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(PageParamsError::LimitOutOfRange {
                max: MAX_PAGE_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of rows to skip before this page starts.
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}
