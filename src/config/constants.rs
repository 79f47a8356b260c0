// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known chain constants and display defaults
//!
//! Centralizes the values the frontend treats as fixed external contracts:
//! the target chain, its block explorer and the token symbol shown next to amounts.

use alloy_chains::Chain;

/// Chain id of Lisk Sepolia
pub const LISK_SEPOLIA_CHAIN_ID: u64 = 4202;

/// Blockscout instance for Lisk Sepolia
pub const LISK_SEPOLIA_EXPLORER_URL: &str = "https://sepolia-blockscout.lisk.com";

/// Symbol shown next to formatted token amounts in event tables
pub const TOKEN_SYMBOL: &str = "LSEA";

/// Fractional digits used when displaying balances and amounts
pub const DISPLAY_DECIMAL_PLACES: u8 = 4;

/// Lisk Sepolia as an alloy [`Chain`]
pub fn lisk_sepolia() -> Chain {
    Chain::from_id(LISK_SEPOLIA_CHAIN_ID)
}
