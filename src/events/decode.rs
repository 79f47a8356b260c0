// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Decoding RPC logs into typed transfer records

use alloy_rpc_types::Log;
use alloy_sol_types::SolEvent;
use tracing::warn;

use super::definitions::{erc20, erc721};
use super::model::{NftTransferEvent, TokenTransferEvent};
use crate::errors::EventProcessingError;
use crate::types::tokens::{TokenAmount, TokenId};

/// Decode an ERC-20 `Transfer` log
///
/// Fails when the log does not match the ERC-20 layout or was returned
/// without block/transaction metadata (pending logs).
pub fn decode_token_transfer(log: &Log) -> Result<TokenTransferEvent, EventProcessingError> {
    let (block_number, transaction_hash) = inclusion(log)?;
    let decoded = erc20::Transfer::decode_log(&log.inner).map_err(|e| {
        EventProcessingError::decode_failed(format!("ERC-20 Transfer: {e}"))
    })?;

    Ok(TokenTransferEvent {
        from: Some(decoded.data.from),
        to: Some(decoded.data.to),
        value: TokenAmount::new(decoded.data.value),
        block_number,
        transaction_hash,
        log_index: log.log_index,
    })
}

/// Decode an ERC-721 `Transfer` log
pub fn decode_nft_transfer(log: &Log) -> Result<NftTransferEvent, EventProcessingError> {
    let (block_number, transaction_hash) = inclusion(log)?;
    let decoded = erc721::Transfer::decode_log(&log.inner).map_err(|e| {
        EventProcessingError::decode_failed(format!("ERC-721 Transfer: {e}"))
    })?;

    Ok(NftTransferEvent {
        from: Some(decoded.data.from),
        to: Some(decoded.data.to),
        token_id: TokenId::new(decoded.data.tokenId),
        block_number,
        transaction_hash,
        log_index: log.log_index,
    })
}

/// Decode every log with `decode`, dropping (and logging) the ones that fail
pub fn decode_all<T>(
    logs: &[Log],
    decode: impl Fn(&Log) -> Result<T, EventProcessingError>,
) -> Vec<T> {
    logs.iter()
        .filter_map(|log| match decode(log) {
            Ok(event) => Some(event),
            Err(e) => {
                warn!(
                    error = %e,
                    tx_hash = ?log.transaction_hash,
                    "Skipping undecodable Transfer log"
                );
                None
            }
        })
        .collect()
}

fn inclusion(log: &Log) -> Result<(u64, alloy_primitives::TxHash), EventProcessingError> {
    let block_number = log
        .block_number
        .ok_or_else(|| EventProcessingError::decode_failed("log has no block number"))?;
    let transaction_hash = log
        .transaction_hash
        .ok_or_else(|| EventProcessingError::decode_failed("log has no transaction hash"))?;
    Ok((block_number, transaction_hash))
}
