// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for event processing.
//!
//! Covers scanning `Transfer` logs and decoding them into typed transfer events.

use super::RpcError;

/// Errors that can occur during event processing.
///
/// # Examples
///
/// ```rust
/// use transferscope::EventProcessingError;
///
/// let err = EventProcessingError::decode_failed("log has no block number");
/// assert_eq!(err.to_string(), "Failed to decode event: log has no block number");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EventProcessingError {
    /// Failed to decode an event from log data.
    ///
    /// Scanners log and skip these; they only surface when decoding a single log.
    #[error("Failed to decode event: {details}")]
    DecodeFailed {
        /// Details about why the decode failed
        details: String,
    },

    /// RPC error when communicating with blockchain provider.
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    /// Invalid input provided to an operation.
    #[error("Invalid input: {details}")]
    InvalidInput {
        /// Details about what was invalid
        details: String,
    },
}

impl EventProcessingError {
    /// Create a `DecodeFailed` error with details.
    pub fn decode_failed(details: impl Into<String>) -> Self {
        EventProcessingError::DecodeFailed {
            details: details.into(),
        }
    }

    /// Create an `InvalidInput` error with details.
    pub fn invalid_input(details: impl Into<String>) -> Self {
        EventProcessingError::InvalidInput {
            details: details.into(),
        }
    }
}
