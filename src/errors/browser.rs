// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the event browser.
//!
//! Filtering and pagination are total; the only rejected input is a page size
//! outside the offered options.

/// Errors raised by event browser setters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BrowserError {
    /// Page size is not one of 5, 10, 20 or 50.
    #[error("Unsupported page size {requested}; expected one of 5, 10, 20, 50")]
    InvalidPageSize {
        /// The rejected value
        requested: usize,
    },
}
