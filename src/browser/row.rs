// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Table rows ready for rendering

use alloy_primitives::Address;
use serde::Serialize;

use crate::config::constants::{DISPLAY_DECIMAL_PLACES, TOKEN_SYMBOL};
use crate::events::{TransferEvent, TransferRecord};
use crate::explorer::BlockExplorer;

/// One rendered event row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    /// Stable list key; transaction hashes repeat within a block so the
    /// position on the page is appended
    pub key: String,
    /// Sender
    pub from: Option<Address>,
    /// Recipient
    pub to: Option<Address>,
    /// `"2.5000 LSEA"` for tokens, `"#7"` for NFTs
    pub value: String,
    /// Block number as text
    pub block: String,
    /// Explorer link for the transaction
    pub tx_url: String,
}

impl EventRow {
    /// Render `event` at position `index` of its page
    pub fn new(event: &TransferEvent, index: usize, explorer: &BlockExplorer) -> Self {
        let value = match event {
            TransferEvent::Token(token) => token.display_amount(DISPLAY_DECIMAL_PLACES, TOKEN_SYMBOL),
            TransferEvent::Nft(nft) => nft.token_id.badge(),
        };
        let hash = event.transaction_hash();

        Self {
            key: format!("{hash}-{index}"),
            from: event.sender(),
            to: event.recipient(),
            value,
            block: event.block_number().to_string(),
            tx_url: explorer.tx_url(hash),
        }
    }
}
