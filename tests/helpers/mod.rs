// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for transferscope integration tests
//!
//! Provides mock implementations of the collaborator traits so the browser and
//! the transfer form can be tested without a blockchain connection.

#![allow(dead_code)]

use std::sync::Mutex;

use alloy_primitives::{address, Address, LogData, TxHash, B256, U256};
use alloy_rpc_types::Log;
use async_trait::async_trait;
use transferscope::errors::{EventProcessingError, TransferError};
use transferscope::{
    EventSource, NftTransferEvent, TokenAmount, TokenDecimals, TokenId, TokenTransferEvent,
    TransferSubmitter,
};

/// Install a test-writer subscriber honoring `RUST_LOG`; safe to call from every test
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub const ALICE: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
pub const BOB: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
pub const CAROL: Address = address!("cccccccccccccccccccccccccccccccccccccccc");

/// Mock EventSource returning canned histories
///
/// # Example
///
/// ```rust,ignore
/// let source = MockEventSource::new()
///     .with_token_events(token_history(12))
///     .with_nft_error("execution reverted");
///
/// let feed = EventFeed::load(&source).await;
/// ```
#[derive(Default)]
pub struct MockEventSource {
    token_events: Vec<TokenTransferEvent>,
    nft_events: Vec<NftTransferEvent>,
    token_error: Option<String>,
    nft_error: Option<String>,
}

impl MockEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token_events(mut self, events: Vec<TokenTransferEvent>) -> Self {
        self.token_events = events;
        self
    }

    pub fn with_nft_events(mut self, events: Vec<NftTransferEvent>) -> Self {
        self.nft_events = events;
        self
    }

    /// Make `token_transfers` fail with `details`
    pub fn with_token_error(mut self, details: impl Into<String>) -> Self {
        self.token_error = Some(details.into());
        self
    }

    /// Make `nft_transfers` fail with `details`
    pub fn with_nft_error(mut self, details: impl Into<String>) -> Self {
        self.nft_error = Some(details.into());
        self
    }
}

#[async_trait]
impl EventSource for MockEventSource {
    async fn token_transfers(&self) -> Result<Vec<TokenTransferEvent>, EventProcessingError> {
        match &self.token_error {
            Some(details) => Err(EventProcessingError::invalid_input(details.clone())),
            None => Ok(self.token_events.clone()),
        }
    }

    async fn nft_transfers(&self) -> Result<Vec<NftTransferEvent>, EventProcessingError> {
        match &self.nft_error {
            Some(details) => Err(EventProcessingError::invalid_input(details.clone())),
            None => Ok(self.nft_events.clone()),
        }
    }
}

/// Mock TransferSubmitter recording every call
///
/// Succeeds with a fixed hash unless built with [`MockSubmitter::failing`].
pub struct MockSubmitter {
    fail_with: Option<String>,
    calls: Mutex<Vec<(Address, TokenAmount)>>,
}

impl MockSubmitter {
    pub fn succeeding() -> Self {
        Self {
            fail_with: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(details: impl Into<String>) -> Self {
        Self {
            fail_with: Some(details.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Transfers submitted so far
    pub fn calls(&self) -> Vec<(Address, TokenAmount)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransferSubmitter for MockSubmitter {
    async fn transfer(&self, to: Address, amount: TokenAmount) -> Result<TxHash, TransferError> {
        self.calls.lock().unwrap().push((to, amount));
        match &self.fail_with {
            Some(details) => Err(TransferError::rejected(details.clone())),
            None => Ok(TxHash::repeat_byte(0x42)),
        }
    }
}

/// `whole` tokens in base units
pub fn tokens(whole: u64) -> TokenAmount {
    TokenAmount::new(U256::from(whole) * TokenDecimals::STANDARD.scale())
}

/// Create a test token transfer in `block`
pub fn create_token_transfer(
    from: Address,
    to: Address,
    value: TokenAmount,
    block: u64,
) -> TokenTransferEvent {
    TokenTransferEvent {
        from: Some(from),
        to: Some(to),
        value,
        block_number: block,
        transaction_hash: TxHash::from(U256::from(block).to_be_bytes::<32>()),
        log_index: Some(0),
    }
}

/// Create a test NFT transfer in `block`
pub fn create_nft_transfer(from: Address, to: Address, token_id: u64, block: u64) -> NftTransferEvent {
    NftTransferEvent {
        from: Some(from),
        to: Some(to),
        token_id: TokenId::from(token_id),
        block_number: block,
        transaction_hash: TxHash::from(U256::from(block).to_be_bytes::<32>()),
        log_index: Some(0),
    }
}

/// `count` one-token transfers from ALICE to BOB in blocks 100, 101, ...
pub fn token_history(count: u64) -> Vec<TokenTransferEvent> {
    (0..count)
        .map(|i| create_token_transfer(ALICE, BOB, tokens(1), 100 + i))
        .collect()
}

/// `count` mints to CAROL with token ids 1, 2, ... in blocks 200, 201, ...
pub fn nft_history(count: u64) -> Vec<NftTransferEvent> {
    (0..count)
        .map(|i| create_nft_transfer(Address::ZERO, CAROL, i + 1, 200 + i))
        .collect()
}

/// Create a test log with given address, topics, and data
pub fn create_test_log(address: Address, topics: Vec<B256>, data: Vec<u8>) -> Log {
    Log {
        inner: alloy_primitives::Log {
            address,
            data: LogData::new_unchecked(topics, data.into()),
        },
        block_number: Some(1),
        transaction_hash: Some(TxHash::repeat_byte(0x01)),
        log_index: Some(0),
        ..Default::default()
    }
}
