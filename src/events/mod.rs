// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer event processing for ERC-20 and ERC-721 contracts.
//!
//! This module handles:
//! - `Transfer` event bindings for both standards
//! - Typed transfer records and the [`TransferEvent`] tagged union
//! - Decoding RPC logs into records
//! - Semantic filter builders
//! - Chunked, rate-limited log scanning

pub mod decode;
pub mod definitions;
pub mod filter;
pub mod model;
pub mod scanner;

pub use decode::{decode_all, decode_nft_transfer, decode_token_transfer};
pub use filter::{transfer_filter_for_contract, TransferFilterBuilder};
pub use model::{EventKind, NftTransferEvent, TokenTransferEvent, TransferEvent, TransferRecord};
pub use scanner::EventScanner;
