// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fetch-once event sources
//!
//! The browser never talks to RPC itself. It reads two [`FetchState`]s, one per
//! contract, that an [`EventFeed`] fills exactly once from an [`EventSource`].
//! Pending and resolved-empty are different states: the first renders a
//! spinner, the second an empty table.

use std::sync::Arc;

use alloy_chains::Chain;
use alloy_primitives::Address;
use alloy_provider::Provider;
use async_trait::async_trait;
use tracing::{error, info, Instrument};

use crate::config::TransferscopeConfig;
use crate::errors::EventProcessingError;
use crate::events::{
    decode_all, decode_nft_transfer, decode_token_transfer, transfer_filter_for_contract,
    EventKind, EventScanner, NftTransferEvent, TokenTransferEvent,
};
use crate::spans;

/// Outcome of a one-shot fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    /// Request still in flight
    Pending,
    /// Immutable snapshot of the fetched records
    Ready(Arc<[T]>),
    /// The fetch failed; the message is for display only
    Failed(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Pending
    }
}

impl<T> FetchState<T> {
    /// Wrap a fetched list
    pub fn ready(items: Vec<T>) -> Self {
        FetchState::Ready(items.into())
    }

    /// Whether the fetch is still in flight
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    /// Records, if the fetch resolved
    pub fn items(&self) -> Option<&[T]> {
        match self {
            FetchState::Ready(items) => Some(items),
            _ => None,
        }
    }

    /// Number of fetched records (0 while pending or failed)
    pub fn len(&self) -> usize {
        self.items().map_or(0, <[T]>::len)
    }

    /// Whether no records are available
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, E: std::fmt::Display> From<Result<Vec<T>, E>> for FetchState<T> {
    fn from(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => FetchState::ready(items),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }
}

/// Supplier of the two Transfer histories the browser shows
#[async_trait]
pub trait EventSource: Send + Sync {
    /// All ERC-20 transfers of the browsed token, oldest first
    async fn token_transfers(&self) -> Result<Vec<TokenTransferEvent>, EventProcessingError>;

    /// All ERC-721 transfers of the browsed collection, oldest first
    async fn nft_transfers(&self) -> Result<Vec<NftTransferEvent>, EventProcessingError>;
}

/// Both histories, each in its own fetch state
#[derive(Debug, Clone, Default)]
pub struct EventFeed {
    /// ERC-20 history
    pub token_events: FetchState<TokenTransferEvent>,
    /// ERC-721 history
    pub nft_events: FetchState<NftTransferEvent>,
}

impl EventFeed {
    /// A feed whose fetches have not resolved yet
    pub fn pending() -> Self {
        Self::default()
    }

    /// Fetch both histories once, concurrently
    ///
    /// A failure on one contract does not affect the other.
    pub async fn load<S: EventSource + ?Sized>(source: &S) -> Self {
        let (tokens, nfts) = tokio::join!(source.token_transfers(), source.nft_transfers());

        if let Err(e) = &tokens {
            error!(error = %e, "Failed to load token transfers");
        }
        if let Err(e) = &nfts {
            error!(error = %e, "Failed to load NFT transfers");
        }

        Self {
            token_events: tokens.into(),
            nft_events: nfts.into(),
        }
    }
}

/// [`EventSource`] reading `Transfer` logs of two contracts over RPC
pub struct ContractEventSource<P> {
    scanner: EventScanner<P>,
    chain: Chain,
    token_contract: Address,
    nft_contract: Address,
}

impl<P: Provider> ContractEventSource<P> {
    /// Bind a token contract and an NFT contract on `chain`
    pub fn new(
        provider: P,
        config: TransferscopeConfig,
        chain: Chain,
        token_contract: Address,
        nft_contract: Address,
    ) -> Self {
        Self {
            scanner: EventScanner::new(provider, config),
            chain,
            token_contract,
            nft_contract,
        }
    }

    async fn load_logs(
        &self,
        kind: EventKind,
        contract: Address,
    ) -> Result<Vec<alloy_rpc_types::Log>, EventProcessingError> {
        let from_block = self.scanner.config().from_block;
        async move {
            let logs = self
                .scanner
                .scan_to_latest(self.chain, transfer_filter_for_contract(contract), from_block)
                .await?;
            info!(%kind, logs = logs.len(), "Loaded Transfer logs");
            Ok(logs)
        }
        .instrument(spans::load_transfers(kind, contract))
        .await
    }
}

#[async_trait]
impl<P: Provider + Send + Sync> EventSource for ContractEventSource<P> {
    async fn token_transfers(&self) -> Result<Vec<TokenTransferEvent>, EventProcessingError> {
        let logs = self.load_logs(EventKind::Token, self.token_contract).await?;
        Ok(decode_all(&logs, decode_token_transfer))
    }

    async fn nft_transfers(&self) -> Result<Vec<NftTransferEvent>, EventProcessingError> {
        let logs = self.load_logs(EventKind::Nft, self.nft_contract).await?;
        Ok(decode_all(&logs, decode_nft_transfer))
    }
}
