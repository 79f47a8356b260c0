// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block explorer deep links

use alloy_primitives::{Address, TxHash};

use crate::config::{constants, TransferscopeConfig};

/// Builds Blockscout-style links (`{base}/tx/{hash}`, `{base}/address/{address}`)
///
/// ```
/// use alloy_primitives::TxHash;
/// use transferscope::BlockExplorer;
///
/// let link = BlockExplorer::lisk_sepolia().tx_url(TxHash::repeat_byte(0x01));
/// assert!(link.starts_with("https://sepolia-blockscout.lisk.com/tx/0x0101"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockExplorer {
    base_url: String,
}

impl BlockExplorer {
    /// Explorer at `base_url`; must be an absolute URL
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        url::Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Lisk Sepolia Blockscout
    pub fn lisk_sepolia() -> Self {
        Self {
            base_url: constants::LISK_SEPOLIA_EXPLORER_URL.to_string(),
        }
    }

    /// Explorer configured in `config`
    pub fn from_config(config: &TransferscopeConfig) -> Result<Self, url::ParseError> {
        Self::new(&config.explorer_base_url)
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Link to a transaction page
    pub fn tx_url(&self, hash: TxHash) -> String {
        format!("{}/tx/{hash}", self.base_url)
    }

    /// Link to an address page
    pub fn address_url(&self, address: Address) -> String {
        format!("{}/address/{address}", self.base_url)
    }
}

impl Default for BlockExplorer {
    fn default() -> Self {
        Self::lisk_sepolia()
    }
}
