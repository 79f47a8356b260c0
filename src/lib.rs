// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! # Transferscope
//!
//! Browse the `Transfer` history of an ERC-20 token and an ERC-721 collection,
//! read the connected wallet's token balance, and drive a token transfer form.
//!
//! ## Components
//!
//! - [`events`]: `Transfer` bindings, log decoding and a chunked log scanner
//! - [`source`]: fetch-once histories ([`EventFeed`], [`FetchState`])
//! - [`browser`]: search, pagination and the derived [`BrowserView`]
//! - [`balance`]: ERC-20 balance and metadata reads
//! - [`transfer`]: transfer form validation and submission
//!
//! ## Example
//!
//! ```rust,ignore
//! use alloy_provider::ProviderBuilder;
//! use transferscope::{
//!     constants, BlockExplorer, ContractEventSource, EventBrowser, EventFeed,
//!     TransferscopeConfig,
//! };
//!
//! let provider = ProviderBuilder::new().connect_http(rpc_url.parse()?);
//! let source = ContractEventSource::new(
//!     provider,
//!     TransferscopeConfig::default(),
//!     constants::lisk_sepolia(),
//!     token_contract,
//!     nft_contract,
//! );
//!
//! let mut browser = EventBrowser::new(EventFeed::load(&source).await);
//! browser.set_search_term("0xab");
//!
//! let view = browser.view();
//! for row in view.rows(&BlockExplorer::lisk_sepolia()) {
//!     println!("{} {} {}", row.block, row.value, row.tx_url);
//! }
//! ```

pub mod balance;
pub mod browser;
pub mod config;
pub mod errors;
pub mod events;
pub mod explorer;
pub mod source;
pub mod transfer;
pub mod types;
pub mod wallet;

mod spans;

pub use balance::{TokenBalance, TokenBalanceReader};
pub use browser::{
    BrowserScreen, BrowserView, EmptyState, EventBrowser, EventRow, PageSize, SearchQuery,
    ViewState,
};
pub use config::{constants, ChainConfig, TransferscopeConfig, TransferscopeConfigBuilder};
pub use errors::{BrowserError, EventProcessingError, RpcError, TransferError, TransferscopeError};
pub use events::{
    EventKind, EventScanner, NftTransferEvent, TokenTransferEvent, TransferEvent,
    TransferFilterBuilder, TransferRecord,
};
pub use explorer::BlockExplorer;
pub use source::{ContractEventSource, EventFeed, EventSource, FetchState};
pub use transfer::{Notification, TransferForm, TransferSubmitter};
pub use types::config::MaxBlockRange;
pub use types::tokens::{ParseAmountError, TokenAmount, TokenDecimals, TokenId};
pub use wallet::{Gate, WalletAccount, WalletSnapshot};
