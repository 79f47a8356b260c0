// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical `Transfer` event definitions for ERC-20 and ERC-721 contracts
//!
//! Both standards emit an event named `Transfer` with the same signature string
//! `Transfer(address,address,uint256)`, so both share one topic0. They differ
//! in where the third argument lives:
//!
//! - **ERC-20**: `value` is unindexed and lives in the log data
//! - **ERC-721**: `tokenId` is indexed and lives in topic3
//!
//! The bindings are kept in separate modules so each decodes its own layout.
//!
//! ```rust,ignore
//! use transferscope::events::definitions::{erc20, erc721};
//! use alloy_sol_types::SolEvent;
//!
//! let token = erc20::Transfer::decode_log(&log.inner)?;
//! println!("{} -> {}: {}", token.data.from, token.data.to, token.data.value);
//!
//! let nft = erc721::Transfer::decode_log(&log.inner)?;
//! println!("{} -> {}: #{}", nft.data.from, nft.data.to, nft.data.tokenId);
//! ```

use alloy_primitives::B256;
use alloy_sol_types::SolEvent;

/// ERC-20 event bindings
pub mod erc20 {
    use std::fmt::Debug;

    alloy_sol_types::sol! {
        /// ERC-20 Transfer event
        ///
        /// Minting has `from = 0x0`, burning has `to = 0x0`.
        /// `value` is in base units (not adjusted for decimals).
        event Transfer(address indexed from, address indexed to, uint256 value);
    }

    impl Debug for Transfer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "Transfer(from: {}, to: {}, value: {})",
                self.from, self.to, self.value
            )
        }
    }
}

/// ERC-721 event bindings
pub mod erc721 {
    use std::fmt::Debug;

    alloy_sol_types::sol! {
        /// ERC-721 Transfer event
        ///
        /// Emitted on mint (`from = 0x0`), transfer and burn (`to = 0x0`).
        event Transfer(address indexed from, address indexed to, uint256 indexed tokenId);
    }

    impl Debug for Transfer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(
                f,
                "Transfer(from: {}, to: {}, tokenId: {})",
                self.from, self.to, self.tokenId
            )
        }
    }
}

/// topic0 shared by ERC-20 and ERC-721 `Transfer` events
pub fn transfer_signature_hash() -> B256 {
    erc20::Transfer::SIGNATURE_HASH
}
