// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chunked log scanner with rate limiting
//!
//! Transfer history is read from `from_block` up to the chain tip. Public RPC
//! endpoints cap the block span of `eth_getLogs`, so the range is split into
//! [`MaxBlockRange`](crate::MaxBlockRange) chunks with an optional delay
//! between requests.
//!
//! ```rust,ignore
//! use transferscope::events::{transfer_filter_for_contract, EventScanner};
//! use transferscope::{constants, TransferscopeConfig};
//!
//! let scanner = EventScanner::new(provider, TransferscopeConfig::default());
//! let logs = scanner
//!     .scan_to_latest(constants::lisk_sepolia(), transfer_filter_for_contract(token), 0)
//!     .await?;
//! ```

use alloy_chains::Chain;
use alloy_primitives::BlockNumber;
use alloy_provider::Provider;
use alloy_rpc_types::{Filter, Log};
use tokio::time::{sleep, timeout};
use tracing::{debug, error, info, Instrument};

use crate::config::TransferscopeConfig;
use crate::errors::{EventProcessingError, RpcError};
use crate::spans;

/// Event scanner with chunking and rate limiting
///
/// Meant to be driven from a single async task; create one per concurrent scan.
pub struct EventScanner<P> {
    provider: P,
    config: TransferscopeConfig,
}

impl<P: Provider> EventScanner<P> {
    /// Create a new event scanner
    pub fn new(provider: P, config: TransferscopeConfig) -> Self {
        Self { provider, config }
    }

    /// Scanner configuration
    pub fn config(&self) -> &TransferscopeConfig {
        &self.config
    }

    /// Scan from `start_block` to the current chain tip
    pub async fn scan_to_latest(
        &self,
        chain: Chain,
        filter_template: Filter,
        start_block: BlockNumber,
    ) -> Result<Vec<Log>, EventProcessingError> {
        let rpc_timeout = self.config.get_rpc_timeout(chain);
        let latest = timeout(rpc_timeout, self.provider.get_block_number())
            .await
            .map_err(|_| RpcError::timeout("eth_blockNumber", rpc_timeout))?
            .map_err(RpcError::get_block_number_failed)?;

        if latest < start_block {
            debug!(%chain, latest, start_block, "Chain tip is before start block");
            return Ok(Vec::new());
        }

        self.scan(chain, filter_template, start_block, latest).await
    }

    /// Scan for events over an inclusive block range
    ///
    /// Chunks run in order, so the returned logs keep the node's ordering
    /// (ascending block number). A failed or timed-out chunk aborts the scan:
    /// a partial history would silently hide transfers.
    pub async fn scan(
        &self,
        chain: Chain,
        filter_template: Filter,
        start_block: BlockNumber,
        end_block: BlockNumber,
    ) -> Result<Vec<Log>, EventProcessingError> {
        if end_block < start_block {
            return Err(EventProcessingError::invalid_input(format!(
                "end block {end_block} is before start block {start_block}"
            )));
        }

        let span = spans::scan_logs(chain, start_block, end_block);
        async move {
            info!(%chain, start_block, end_block, "Starting event scan");

            let max_block_range = self.config.get_max_block_range(chain);
            let rate_limit = self.config.get_rate_limit_delay(chain);
            let rpc_timeout = self.config.get_rpc_timeout(chain);

            let mut all_logs = Vec::new();
            for (chunk_start, chunk_end) in max_block_range.chunk_range(start_block, end_block) {
                let filter = filter_template
                    .clone()
                    .from_block(chunk_start)
                    .to_block(chunk_end);
                let operation = format!("Transfer logs {chunk_start}-{chunk_end}");

                debug!(%chain, chunk_start, chunk_end, "Fetching logs for chunk");

                let logs = match timeout(rpc_timeout, self.provider.get_logs(&filter)).await {
                    Ok(Ok(logs)) => logs,
                    Ok(Err(e)) => {
                        error!(?e, chunk_start, chunk_end, "Error fetching logs in range");
                        return Err(RpcError::get_logs_failed(operation, e).into());
                    }
                    Err(_) => {
                        error!(chunk_start, chunk_end, "Timed out fetching logs in range");
                        return Err(RpcError::timeout(operation, rpc_timeout).into());
                    }
                };

                debug!(logs_count = logs.len(), chunk_start, chunk_end, "Fetched logs for block range");
                all_logs.extend(logs);

                if let Some(delay) = rate_limit {
                    if chunk_end < end_block {
                        debug!(%chain, delay_ms = delay.as_millis(), "Applying rate limit delay");
                        sleep(delay).await;
                    }
                }
            }

            info!(%chain, total_logs = all_logs.len(), "Finished event scan");
            Ok(all_logs)
        }
        .instrument(span)
        .await
    }
}
