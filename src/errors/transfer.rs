// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for token transfer submission.

use crate::types::tokens::ParseAmountError;

/// Errors from validating or submitting a token transfer.
///
/// Validation variants carry the message shown to the user; submission
/// failures keep the collaborator's message for logs only.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// Recipient or amount left blank.
    #[error("Please fill in all fields")]
    MissingFields,

    /// Recipient is not a 20-byte hex address.
    #[error("Invalid recipient address: {input}")]
    InvalidRecipient {
        /// The rejected input
        input: String,
    },

    /// Amount is not a valid decimal token amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    /// No wallet connected to sign the transfer.
    #[error("Please connect your wallet to transfer tokens")]
    WalletNotConnected,

    /// The signer or the chain rejected the transaction.
    #[error("Transfer rejected: {details}")]
    Rejected {
        /// Message from the submitting collaborator
        details: String,
    },
}

impl TransferError {
    /// Create a `Rejected` error with details.
    pub fn rejected(details: impl Into<String>) -> Self {
        TransferError::Rejected {
            details: details.into(),
        }
    }

    /// Whether this error came from local input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TransferError::MissingFields
                | TransferError::InvalidRecipient { .. }
                | TransferError::InvalidAmount(_)
        )
    }
}
