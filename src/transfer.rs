// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token transfer form
//!
//! The form holds the two raw inputs, validates them into a recipient
//! [`Address`] and a [`TokenAmount`], and hands the result to a
//! [`TransferSubmitter`]. Signing and broadcasting stay with the submitter; the
//! form only turns the outcome into a [`Notification`].
//!
//! ```rust,ignore
//! use transferscope::transfer::TransferForm;
//!
//! let mut form = TransferForm::new("0x5FbDB2315678afecb367f032d93F642f64180aa3", "2.5");
//! let notification = form.submit(&wallet, &submitter).await;
//! println!("{}", notification.message());
//! ```

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info, Instrument};

use crate::errors::TransferError;
use crate::spans;
use crate::types::tokens::{TokenAmount, TokenDecimals};
use crate::wallet::{gate, Gate, WalletAccount};

/// Title of the transfer card
pub const TRANSFER_TITLE: &str = "Transfer Tokens";

/// Prompt shown instead of the form when no wallet is connected
pub const CONNECT_PROMPT: &str = "Please connect your wallet to transfer tokens";

/// Shown after the submitter accepts the transfer
pub const SUCCESS_MESSAGE: &str = "Token transfer successful!";

/// Shown after the submitter rejects the transfer
pub const FAILURE_MESSAGE: &str = "Transfer failed. Please try again.";

/// Signs and broadcasts an ERC-20 `transfer(to, amount)`
#[async_trait]
pub trait TransferSubmitter: Send + Sync {
    /// Submit the transfer and return its transaction hash
    async fn transfer(&self, to: Address, amount: TokenAmount) -> Result<TxHash, TransferError>;
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum Notification {
    /// The operation went through
    Success(String),
    /// The operation was refused or failed
    Error(String),
}

impl Notification {
    /// Text to show
    pub fn message(&self) -> &str {
        match self {
            Notification::Success(message) | Notification::Error(message) => message,
        }
    }

    /// Whether this reports success
    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Success(_))
    }
}

/// Raw recipient and amount inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferForm {
    /// Recipient address as typed
    pub recipient: String,
    /// Decimal token amount as typed, e.g. `"2.5"`
    pub amount: String,
}

impl TransferForm {
    /// Decimal precision of the transferred token
    pub const DECIMALS: TokenDecimals = TokenDecimals::STANDARD;

    /// Form prefilled with `recipient` and `amount`
    pub fn new(recipient: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            amount: amount.into(),
        }
    }

    /// Whether the submit button is enabled
    pub fn can_submit(&self) -> bool {
        !self.recipient.is_empty() && !self.amount.is_empty()
    }

    /// Empty both inputs
    pub fn clear(&mut self) {
        self.recipient.clear();
        self.amount.clear();
    }

    /// Parse both inputs
    pub fn validate(&self) -> Result<(Address, TokenAmount), TransferError> {
        if !self.can_submit() {
            return Err(TransferError::MissingFields);
        }

        let recipient = self.recipient.trim();
        let to = recipient
            .parse::<Address>()
            .map_err(|_| TransferError::InvalidRecipient {
                input: recipient.to_string(),
            })?;
        let amount = TokenAmount::parse_units(&self.amount, Self::DECIMALS)?;

        Ok((to, amount))
    }

    /// Validate, submit once, and report the outcome
    ///
    /// Inputs are cleared only when the submitter succeeds.
    pub async fn submit<W, S>(&mut self, wallet: &W, submitter: &S) -> Notification
    where
        W: WalletAccount + ?Sized,
        S: TransferSubmitter + ?Sized,
    {
        if let Gate::ConnectPrompt { message, .. } = gate(wallet, TRANSFER_TITLE, CONNECT_PROMPT) {
            return Notification::Error(message);
        }

        let (to, amount) = match self.validate() {
            Ok(parsed) => parsed,
            Err(e) => return Notification::Error(e.to_string()),
        };

        let outcome = async {
            info!(amount = %amount.format_units(Self::DECIMALS), "Submitting token transfer");
            submitter.transfer(to, amount).await
        }
        .instrument(spans::submit_transfer(to))
        .await;

        match outcome {
            Ok(tx_hash) => {
                info!(%tx_hash, %to, "Token transfer submitted");
                self.clear();
                Notification::Success(SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                error!(error = %e, %to, "Token transfer failed");
                Notification::Error(FAILURE_MESSAGE.to_string())
            }
        }
    }
}
