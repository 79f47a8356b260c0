// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the transferscope library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`EventProcessingError`],
//!   [`BrowserError`], [`TransferError`])
//! - **Unified error type** ([`TransferscopeError`]) for convenience when you don't
//!   need to distinguish between error sources
//!
//! [`RpcError`] provides shared variants for blockchain RPC operations.
//!
//! # Examples
//!
//! ```rust
//! use transferscope::{BrowserError, TransferscopeError};
//!
//! fn pick_page_size() -> Result<(), TransferscopeError> {
//!     Err(BrowserError::InvalidPageSize { requested: 7 })?
//! }
//!
//! assert!(matches!(pick_page_size(), Err(TransferscopeError::Browser(_))));
//! ```

mod browser;
mod events;
mod rpc;
mod transfer;

pub use browser::BrowserError;
pub use events::EventProcessingError;
pub use rpc::RpcError;
pub use transfer::TransferError;

/// Unified error type for all transferscope operations.
///
/// All module-specific error types convert to `TransferscopeError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum TransferscopeError {
    /// Error from event scanning and decoding.
    #[error("Event processing error: {0}")]
    Events(#[from] EventProcessingError),

    /// Error from the event browser.
    #[error("Event browser error: {0}")]
    Browser(#[from] BrowserError),

    /// Error from transfer validation or submission.
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// Error from a direct RPC read (balances, token metadata).
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
}
