// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// ERC-20 token decimal precision
///
/// Represents the number of decimal places for a token. The LSEA token and
/// every ETH-like token use 18 decimals.
///
/// # Examples
///
/// ```
/// use transferscope::TokenDecimals;
///
/// let decimals = TokenDecimals::STANDARD;
/// assert_eq!(decimals.as_u8(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl TokenDecimals {
    /// Largest precision for which `10^decimals` fits comfortably in a U256
    pub const MAX_SUPPORTED: u8 = 77;

    /// Standard decimals for ETH-like tokens (18)
    pub const STANDARD: Self = Self(18);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Number of fractional digits as a `usize`, handy for string padding
    ///
    /// Capped at [`MAX_SUPPORTED`](Self::MAX_SUPPORTED), matching [`scale`](Self::scale).
    pub const fn digits(&self) -> usize {
        if self.0 > Self::MAX_SUPPORTED {
            Self::MAX_SUPPORTED as usize
        } else {
            self.0 as usize
        }
    }

    /// Exact scale factor `10^decimals` in base units
    ///
    /// Saturates at [`MAX_SUPPORTED`](Self::MAX_SUPPORTED) decimals.
    pub fn scale(&self) -> U256 {
        let exponent = self.0.min(Self::MAX_SUPPORTED);
        U256::from(10u64).pow(U256::from(exponent))
    }
}

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
