// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for transferscope operations
//!
//! Controls how transfer history is pulled from RPC (block range chunking,
//! rate limiting, timeouts, starting block) and where explorer links point.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use transferscope::TransferscopeConfig;
//!
//! // 500-block chunks, 250ms between chunks on Lisk Sepolia
//! let config = TransferscopeConfig::default();
//! assert_eq!(config.from_block, 0);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use transferscope::TransferscopeConfigBuilder;
//! use std::time::Duration;
//!
//! let config = TransferscopeConfigBuilder::with_defaults()
//!     .max_block_range(1000)
//!     .from_block(1_200_000)
//!     .rate_limit_delay(Duration::from_millis(100))
//!     .build();
//! assert_eq!(config.from_block, 1_200_000);
//! ```

use std::collections::HashMap;
use std::time::Duration;

use alloy_chains::Chain;

use crate::types::config::MaxBlockRange;

pub mod constants;

/// Configuration for transferscope operations
///
/// Use [`TransferscopeConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct TransferscopeConfig {
    /// Maximum number of blocks to query in a single `eth_getLogs` call
    /// Default: 500
    pub max_block_range: MaxBlockRange,

    /// Delay between log requests to avoid rate limiting
    /// Default: None (no delay)
    pub rate_limit_delay: Option<Duration>,

    /// Timeout for RPC requests
    /// Default: 30 seconds
    pub rpc_timeout: Duration,

    /// First block scanned for Transfer history
    /// Default: 0 (genesis)
    pub from_block: u64,

    /// Base URL of the block explorer used for transaction links
    pub explorer_base_url: String,

    /// Chain-specific overrides
    pub chain_overrides: HashMap<Chain, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Override max block range for this chain
    pub max_block_range: Option<MaxBlockRange>,

    /// Override rate limit delay for this chain
    pub rate_limit_delay: Option<Duration>,

    /// Override RPC timeout for this chain
    pub rpc_timeout: Option<Duration>,
}

impl Default for TransferscopeConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl TransferscopeConfig {
    /// Create config with defaults suited to the public Lisk Sepolia RPC
    ///
    /// ```rust
    /// use transferscope::{constants, TransferscopeConfig};
    /// use std::time::Duration;
    ///
    /// let config = TransferscopeConfig::with_common_defaults();
    /// assert_eq!(
    ///     config.get_rate_limit_delay(constants::lisk_sepolia()),
    ///     Some(Duration::from_millis(250))
    /// );
    /// ```
    pub fn with_common_defaults() -> Self {
        let mut config = Self::minimal();

        // Public testnet endpoint throttles bursts of getLogs
        config.set_chain_override(
            constants::lisk_sepolia(),
            ChainConfig {
                max_block_range: None,
                rate_limit_delay: Some(Duration::from_millis(250)),
                rpc_timeout: None,
            },
        );

        config
    }

    /// Create minimal config with no delays and no chain overrides
    pub fn minimal() -> Self {
        Self {
            max_block_range: MaxBlockRange::DEFAULT,
            rate_limit_delay: None,
            rpc_timeout: Duration::from_secs(30),
            from_block: 0,
            explorer_base_url: constants::LISK_SEPOLIA_EXPLORER_URL.to_string(),
            chain_overrides: HashMap::new(),
        }
    }

    /// Effective max block range for a chain
    ///
    /// Returns chain-specific override if set, otherwise the global default.
    pub fn get_max_block_range(&self, chain: Chain) -> MaxBlockRange {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.max_block_range)
            .unwrap_or(self.max_block_range)
    }

    /// Effective rate limit delay for a chain
    ///
    /// Returns chain-specific override if set, otherwise the global default.
    pub fn get_rate_limit_delay(&self, chain: Chain) -> Option<Duration> {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.rate_limit_delay)
            .or(self.rate_limit_delay)
    }

    /// Effective RPC timeout for a chain
    pub fn get_rpc_timeout(&self, chain: Chain) -> Duration {
        self.chain_overrides
            .get(&chain)
            .and_then(|c| c.rpc_timeout)
            .unwrap_or(self.rpc_timeout)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain: Chain, config: ChainConfig) {
        self.chain_overrides.insert(chain, config);
    }
}

/// Builder for [`TransferscopeConfig`]
///
/// ```rust
/// use transferscope::TransferscopeConfigBuilder;
/// use alloy_chains::Chain;
/// use std::time::Duration;
///
/// let config = TransferscopeConfigBuilder::new()
///     .max_block_range(1000)
///     .chain_rate_limit(Chain::from_id(1), Duration::from_millis(500))
///     .build();
/// ```
pub struct TransferscopeConfigBuilder {
    config: TransferscopeConfig,
}

impl Default for TransferscopeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferscopeConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: TransferscopeConfig::minimal(),
        }
    }

    /// Start with common defaults
    pub fn with_defaults() -> Self {
        Self {
            config: TransferscopeConfig::with_common_defaults(),
        }
    }

    /// Set global max block range
    pub fn max_block_range(mut self, max: u64) -> Self {
        self.config.max_block_range = MaxBlockRange::new(max);
        self
    }

    /// Set global rate limit delay
    pub fn rate_limit_delay(mut self, delay: Duration) -> Self {
        self.config.rate_limit_delay = Some(delay);
        self
    }

    /// Set global RPC timeout
    pub fn rpc_timeout(mut self, timeout: Duration) -> Self {
        self.config.rpc_timeout = timeout;
        self
    }

    /// Set the first block scanned for Transfer history
    pub fn from_block(mut self, block: u64) -> Self {
        self.config.from_block = block;
        self
    }

    /// Point transaction links at a different explorer
    pub fn explorer_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.explorer_base_url = url.into();
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain: Chain, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain, config);
        self
    }

    /// Convenience: set rate limit delay for a specific chain
    pub fn chain_rate_limit(mut self, chain: Chain, delay: Duration) -> Self {
        let entry = self.config.chain_overrides.entry(chain).or_default();
        entry.rate_limit_delay = Some(delay);
        self
    }

    /// Convenience: set max block range for a specific chain
    pub fn chain_max_block_range(mut self, chain: Chain, max: u64) -> Self {
        let entry = self.config.chain_overrides.entry(chain).or_default();
        entry.max_block_range = Some(MaxBlockRange::new(max));
        self
    }

    /// Build the final configuration
    pub fn build(self) -> TransferscopeConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_limits_lisk_sepolia_only() {
        let config = TransferscopeConfig::default();
        assert_eq!(
            config.get_rate_limit_delay(constants::lisk_sepolia()),
            Some(Duration::from_millis(250))
        );
        assert_eq!(config.get_rate_limit_delay(Chain::from_id(1)), None);
    }

    #[test]
    fn test_minimal_has_no_delays() {
        let config = TransferscopeConfig::minimal();
        assert_eq!(config.get_rate_limit_delay(constants::lisk_sepolia()), None);
        assert_eq!(config.get_max_block_range(constants::lisk_sepolia()), MaxBlockRange::DEFAULT);
    }

    #[test]
    fn test_chain_override_wins() {
        let chain = Chain::from_id(1);
        let config = TransferscopeConfigBuilder::new()
            .max_block_range(2000)
            .chain_max_block_range(chain, 100)
            .chain_rate_limit(chain, Duration::from_millis(10))
            .build();

        assert_eq!(config.get_max_block_range(chain), MaxBlockRange::new(100));
        assert_eq!(
            config.get_max_block_range(constants::lisk_sepolia()),
            MaxBlockRange::new(2000)
        );
        assert_eq!(
            config.get_rate_limit_delay(chain),
            Some(Duration::from_millis(10))
        );
    }

    #[test]
    fn test_chain_helpers_merge_into_one_override() {
        let chain = Chain::from_id(10);
        let config = TransferscopeConfigBuilder::new()
            .chain_rate_limit(chain, Duration::from_millis(5))
            .chain_max_block_range(chain, 50)
            .build();

        let override_ = &config.chain_overrides[&chain];
        assert_eq!(override_.rate_limit_delay, Some(Duration::from_millis(5)));
        assert_eq!(override_.max_block_range, Some(MaxBlockRange::new(50)));
    }

    #[test]
    fn test_rpc_timeout_default() {
        let config = TransferscopeConfig::default();
        assert_eq!(
            config.get_rpc_timeout(constants::lisk_sepolia()),
            Duration::from_secs(30)
        );
    }
}
