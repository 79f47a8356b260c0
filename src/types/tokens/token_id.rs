// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-721 token identifier type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Identifier of a single ERC-721 token
///
/// Kept distinct from [`TokenAmount`](super::TokenAmount) so an NFT id can
/// never be scaled by token decimals by accident.
///
/// # Examples
///
/// ```
/// use transferscope::TokenId;
///
/// let id = TokenId::from(7u64);
/// assert_eq!(id.to_string(), "7");
/// assert_eq!(id.badge(), "#7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(U256);

impl TokenId {
    /// Create a token id from its on-chain value
    pub const fn new(id: U256) -> Self {
        Self(id)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Display form used in event tables
    pub fn badge(&self) -> String {
        format!("#{}", self.0)
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_decimal() {
        let id = TokenId::new(U256::from(255u64));
        assert_eq!(id.to_string(), "255");
        assert_eq!(id.badge(), "#255");
    }
}
