// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared RPC error types for blockchain provider operations.

/// Errors that can occur during blockchain RPC operations.
///
/// Each variant carries a short description of the operation that failed so
/// log lines and notifications stay readable.
///
/// # Examples
///
/// ```rust
/// use transferscope::RpcError;
///
/// let error = RpcError::Timeout {
///     operation: "Transfer logs 0-499".to_string(),
///     timeout_ms: 30_000,
/// };
/// assert_eq!(error.to_string(), "Transfer logs 0-499 timed out after 30000ms");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// Failed to fetch logs from the blockchain.
    #[error("Failed to fetch logs for {operation}")]
    GetLogsFailed {
        /// Description of the operation that failed (e.g., "Transfer logs 100-200")
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to fetch the current block number.
    #[error("Failed to get current block number")]
    GetBlockNumberFailed {
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A contract read (`eth_call`) failed.
    #[error("Contract call {operation} failed: {details}")]
    CallFailed {
        /// The call that failed (e.g., "balanceOf")
        operation: String,
        /// Provider or decoding error message
        details: String,
    },

    /// The provider did not answer within the configured timeout.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// The operation that timed out
        operation: String,
        /// Configured timeout in milliseconds
        timeout_ms: u128,
    },
}

impl RpcError {
    /// Helper to create a `GetLogsFailed` error from any error type.
    pub fn get_logs_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RpcError::GetLogsFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `GetBlockNumberFailed` error from any error type.
    pub fn get_block_number_failed(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RpcError::GetBlockNumberFailed {
            source: Box::new(source),
        }
    }

    /// Helper to create a `CallFailed` error.
    pub fn call_failed(operation: impl Into<String>, details: impl std::fmt::Display) -> Self {
        RpcError::CallFailed {
            operation: operation.into(),
            details: details.to_string(),
        }
    }

    /// Helper to create a `Timeout` error.
    pub fn timeout(operation: impl Into<String>, timeout: std::time::Duration) -> Self {
        RpcError::Timeout {
            operation: operation.into(),
            timeout_ms: timeout.as_millis(),
        }
    }
}
