// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for transferscope operations.
//!
//! Telemetry is kept out of business logic: each instrumented operation has a
//! helper here instead of an `#[instrument]` attribute.
//!
//! ```rust,ignore
//! let span = spans::scan_logs(chain, start, end);
//! async move { /* business logic */ }.instrument(span).await
//! ```

use alloy_chains::Chain;
use alloy_primitives::{Address, BlockNumber};
use tracing::Span;

use crate::events::EventKind;

/// Span for a chunked `eth_getLogs` scan.
///
/// Parent: load_transfers span
#[inline]
pub(crate) fn scan_logs(chain: Chain, from_block: BlockNumber, to_block: BlockNumber) -> Span {
    tracing::debug_span!(
        "transferscope.scan_logs",
        chain_id = %chain,
        from_block = from_block,
        to_block = to_block,
    )
}

/// Span for loading the full Transfer history of one contract.
///
/// Parent: None (root span for this operation)
/// Children: scan_logs
#[inline]
pub(crate) fn load_transfers(kind: EventKind, contract: Address) -> Span {
    tracing::info_span!(
        "transferscope.load_transfers",
        kind = %kind,
        contract = %contract,
    )
}

/// Span for reading a holder's balance and token metadata.
#[inline]
pub(crate) fn read_token_balance(token: Address, holder: Address) -> Span {
    tracing::info_span!(
        "transferscope.read_token_balance",
        token = %token,
        holder = %holder,
    )
}

/// Span for submitting a token transfer.
#[inline]
pub(crate) fn submit_transfer(recipient: Address) -> Span {
    tracing::info_span!("transferscope.submit_transfer", recipient = %recipient)
}
