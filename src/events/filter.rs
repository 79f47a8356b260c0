// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Semantic filter builder for `Transfer` logs
//!
//! Hides the topic layout of `Transfer(address indexed from, address indexed to, ...)`
//! behind domain methods, for both ERC-20 and ERC-721 contracts:
//!
//! ```rust,ignore
//! use transferscope::events::TransferFilterBuilder;
//!
//! let filter = TransferFilterBuilder::new()
//!     .with_token(nft_contract)
//!     .with_recipient(wallet)
//!     .build();
//! ```
//!
//! When used with [`EventScanner`](crate::events::scanner::EventScanner), leave
//! the block range unset: the scanner chunks ranges itself.

use alloy_primitives::{Address, BlockNumber};
use alloy_rpc_types::Filter;

use super::definitions::transfer_signature_hash;

/// Builder for `Transfer` event filters
///
/// - topic0: `Transfer(address,address,uint256)` (same for ERC-20 and ERC-721)
/// - topic1: `from`
/// - topic2: `to`
#[derive(Debug, Clone, Default)]
pub struct TransferFilterBuilder {
    from_block: Option<BlockNumber>,
    to_block: Option<BlockNumber>,
    token_address: Option<Address>,
    from_address: Option<Address>,
    to_address: Option<Address>,
}

impl TransferFilterBuilder {
    /// Create a new Transfer event filter builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter for transfers emitted by a specific token or NFT contract
    pub fn with_token(mut self, token: Address) -> Self {
        self.token_address = Some(token);
        self
    }

    /// Filter for transfers from a specific sender (topic1)
    pub fn with_sender(mut self, sender: Address) -> Self {
        self.from_address = Some(sender);
        self
    }

    /// Filter for transfers to a specific recipient (topic2)
    pub fn with_recipient(mut self, recipient: Address) -> Self {
        self.to_address = Some(recipient);
        self
    }

    /// Restrict to an inclusive block range
    pub fn in_block_range(mut self, from_block: BlockNumber, to_block: BlockNumber) -> Self {
        self.from_block = Some(from_block);
        self.to_block = Some(to_block);
        self
    }

    /// Build the final Alloy Filter
    pub fn build(self) -> Filter {
        let mut filter = Filter::new().event_signature(transfer_signature_hash());

        if let Some(from) = self.from_block {
            filter = filter.from_block(from);
        }
        if let Some(to) = self.to_block {
            filter = filter.to_block(to);
        }

        if let Some(token) = self.token_address {
            filter = filter.address(token);
        }

        if let Some(from) = self.from_address {
            filter = filter.topic1(from.into_word());
        }

        if let Some(to) = self.to_address {
            filter = filter.topic2(to.into_word());
        }

        filter
    }
}

/// All `Transfer` logs of one contract, without a block range
pub fn transfer_filter_for_contract(contract: Address) -> Filter {
    TransferFilterBuilder::new().with_token(contract).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_contract_filter_has_no_block_range() {
        let contract = address!("1111111111111111111111111111111111111111");
        let filter = transfer_filter_for_contract(contract);
        assert_eq!(filter.get_from_block(), None);
        assert_eq!(filter.get_to_block(), None);
    }

    #[test]
    fn test_block_range_is_applied() {
        let filter = TransferFilterBuilder::new()
            .in_block_range(100, 200)
            .build();
        assert_eq!(filter.get_from_block(), Some(100));
        assert_eq!(filter.get_to_block(), Some(200));
    }

    #[test]
    fn test_signature_topic_is_set() {
        let filter = TransferFilterBuilder::new().build();
        assert!(filter.topics[0].matches(&transfer_signature_hash()));
    }

    #[test]
    fn test_sender_and_recipient_topics() {
        let sender = address!("00000000000000000000000000000000000000aa");
        let recipient = address!("00000000000000000000000000000000000000bb");
        let filter = TransferFilterBuilder::new()
            .with_sender(sender)
            .with_recipient(recipient)
            .build();

        assert!(filter.topics[1].matches(&sender.into_word()));
        assert!(filter.topics[2].matches(&recipient.into_word()));
        assert!(!filter.topics[1].matches(&recipient.into_word()));
    }
}
