// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Typed transfer records
//!
//! ERC-20 and ERC-721 transfers share a shape (sender, recipient, block,
//! transaction) but differ in their third field: an amount in base units versus
//! a token identifier. Each standard gets its own struct and [`TransferEvent`]
//! tags which one a record is, so an amount is never rendered as an id or the
//! other way round.

use alloy_primitives::{Address, BlockNumber, TxHash};
use serde::{Deserialize, Serialize};

use crate::types::tokens::{TokenAmount, TokenDecimals, TokenId};

/// Which contract's history a view is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// ERC-20 token transfers
    #[default]
    Token,
    /// ERC-721 NFT transfers
    Nft,
}

impl EventKind {
    /// Table header for the third column
    pub fn value_label(&self) -> &'static str {
        match self {
            EventKind::Token => "Amount",
            EventKind::Nft => "Token ID",
        }
    }

    /// Hint shown when the contract has no history yet
    pub fn empty_hint(&self) -> &'static str {
        match self {
            EventKind::Token => "Transfer some tokens to see events here",
            EventKind::Nft => "Mint some NFTs to see events here",
        }
    }

    /// Placeholder text for the search box
    pub fn search_placeholder(&self) -> String {
        let value = match self {
            EventKind::Token => "amount",
            EventKind::Nft => "token ID",
        };
        format!("Search by address, {value}, block, or tx hash...")
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Token => write!(f, "token"),
            EventKind::Nft => write!(f, "nft"),
        }
    }
}

/// Fields common to every transfer record
///
/// Search and rendering only go through this trait, so a new record kind only
/// needs to say how its third field reads as text.
pub trait TransferRecord {
    /// Sender, if the log carried one
    fn sender(&self) -> Option<Address>;

    /// Recipient, if the log carried one
    fn recipient(&self) -> Option<Address>;

    /// Block the transfer was included in
    fn block_number(&self) -> BlockNumber;

    /// Hash of the transaction that emitted the event
    fn transaction_hash(&self) -> TxHash;

    /// Searchable text of the amount or token id
    fn value_text(&self) -> String;
}

/// An ERC-20 `Transfer` occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTransferEvent {
    /// Sender (zero address on mint)
    pub from: Option<Address>,
    /// Recipient (zero address on burn)
    pub to: Option<Address>,
    /// Amount in base units
    pub value: TokenAmount,
    /// Block the transfer was included in
    pub block_number: BlockNumber,
    /// Emitting transaction
    pub transaction_hash: TxHash,
    /// Position of the log within its block, when the node reports it
    pub log_index: Option<u64>,
}

impl TokenTransferEvent {
    /// Decimal precision of the browsed token
    pub const DECIMALS: TokenDecimals = TokenDecimals::STANDARD;

    /// Full-precision human amount, e.g. `"2.5"`
    pub fn amount(&self) -> String {
        self.value.format_units(Self::DECIMALS)
    }

    /// Amount with a fixed number of decimals and a symbol, e.g. `"2.5000 LSEA"`
    pub fn display_amount(&self, places: u8, symbol: &str) -> String {
        format!("{} {symbol}", self.value.to_fixed(Self::DECIMALS, places))
    }
}

impl TransferRecord for TokenTransferEvent {
    fn sender(&self) -> Option<Address> {
        self.from
    }

    fn recipient(&self) -> Option<Address> {
        self.to
    }

    fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    fn transaction_hash(&self) -> TxHash {
        self.transaction_hash
    }

    fn value_text(&self) -> String {
        self.amount()
    }
}

/// An ERC-721 `Transfer` occurrence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransferEvent {
    /// Sender (zero address on mint)
    pub from: Option<Address>,
    /// Recipient (zero address on burn)
    pub to: Option<Address>,
    /// Transferred token
    pub token_id: TokenId,
    /// Block the transfer was included in
    pub block_number: BlockNumber,
    /// Emitting transaction
    pub transaction_hash: TxHash,
    /// Position of the log within its block, when the node reports it
    pub log_index: Option<u64>,
}

impl TransferRecord for NftTransferEvent {
    fn sender(&self) -> Option<Address> {
        self.from
    }

    fn recipient(&self) -> Option<Address> {
        self.to
    }

    fn block_number(&self) -> BlockNumber {
        self.block_number
    }

    fn transaction_hash(&self) -> TxHash {
        self.transaction_hash
    }

    fn value_text(&self) -> String {
        self.token_id.to_string()
    }
}

/// A transfer of either kind, tagged by its standard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TransferEvent {
    /// ERC-20 transfer
    Token(TokenTransferEvent),
    /// ERC-721 transfer
    Nft(NftTransferEvent),
}

impl TransferEvent {
    /// Which standard this record belongs to
    pub fn kind(&self) -> EventKind {
        match self {
            TransferEvent::Token(_) => EventKind::Token,
            TransferEvent::Nft(_) => EventKind::Nft,
        }
    }

    fn record(&self) -> &dyn TransferRecord {
        match self {
            TransferEvent::Token(event) => event,
            TransferEvent::Nft(event) => event,
        }
    }
}

impl TransferRecord for TransferEvent {
    fn sender(&self) -> Option<Address> {
        self.record().sender()
    }

    fn recipient(&self) -> Option<Address> {
        self.record().recipient()
    }

    fn block_number(&self) -> BlockNumber {
        self.record().block_number()
    }

    fn transaction_hash(&self) -> TxHash {
        self.record().transaction_hash()
    }

    fn value_text(&self) -> String {
        self.record().value_text()
    }
}

impl From<TokenTransferEvent> for TransferEvent {
    fn from(event: TokenTransferEvent) -> Self {
        TransferEvent::Token(event)
    }
}

impl From<NftTransferEvent> for TransferEvent {
    fn from(event: NftTransferEvent) -> Self {
        TransferEvent::Nft(event)
    }
}
