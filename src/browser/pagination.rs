// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Page sizes and page arithmetic

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::errors::BrowserError;

/// Rows per page, restricted to the sizes offered in the selector
///
/// ```
/// use transferscope::PageSize;
///
/// assert_eq!(PageSize::default().get(), 10);
/// assert!(PageSize::try_from(20).is_ok());
/// assert!(PageSize::try_from(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(usize);

impl PageSize {
    /// Every size the selector offers, smallest first
    pub const OPTIONS: [PageSize; 4] = [PageSize(5), PageSize(10), PageSize(20), PageSize(50)];

    /// Rows per page
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(10)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = BrowserError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::OPTIONS
            .into_iter()
            .find(|size| size.0 == value)
            .ok_or(BrowserError::InvalidPageSize { requested: value })
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for PageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of pages needed for `count` rows; zero rows need zero pages
pub fn total_pages(count: usize, page_size: PageSize) -> usize {
    count.div_ceil(page_size.get())
}

/// Index range of page `page` (1-based) within `len` rows, clipped to `len`
///
/// Pages past the end yield an empty range rather than panicking.
pub fn page_range(page: usize, page_size: PageSize, len: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size.get())
        .min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    start..end
}
