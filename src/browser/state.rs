// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! View state owned by the event browser

use serde::{Deserialize, Serialize};

use super::pagination::PageSize;
use crate::errors::BrowserError;
use crate::events::EventKind;

/// Tab, search box, page selector and current page
///
/// Changing the tab, the search term or the page size always sends the user
/// back to page 1. The current page is never pulled back into range on its
/// own; navigation just stops at the ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    event_kind: EventKind,
    search_term: String,
    current_page: usize,
    page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            event_kind: EventKind::default(),
            search_term: String::new(),
            current_page: 1,
            page_size: PageSize::default(),
        }
    }
}

impl ViewState {
    /// Fresh state: token tab, empty search, page 1 of 10 rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected tab
    pub fn event_kind(&self) -> EventKind {
        self.event_kind
    }

    /// Search term as typed
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// 1-based current page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Switch tab and go back to page 1
    pub fn set_event_kind(&mut self, kind: EventKind) {
        self.event_kind = kind;
        self.current_page = 1;
    }

    /// Replace the search term and go back to page 1
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.current_page = 1;
    }

    /// Empty the search box and go back to page 1
    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Change rows per page and go back to page 1
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.current_page = 1;
    }

    /// Change rows per page from a raw selector value
    pub fn try_set_page_size(&mut self, size: usize) -> Result<(), BrowserError> {
        self.set_page_size(PageSize::try_from(size)?);
        Ok(())
    }

    /// Jump to `page`; values below 1 become 1
    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Whether "Previous" is enabled
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether "Next" is enabled given the current page count
    pub fn has_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    /// Step back one page, stopping at 1
    pub fn previous_page(&mut self) {
        if self.has_previous() {
            self.current_page -= 1;
        }
    }

    /// Step forward one page, stopping at `total_pages`
    pub fn next_page(&mut self, total_pages: usize) {
        if self.has_next(total_pages) {
            self.current_page += 1;
        }
    }
}
