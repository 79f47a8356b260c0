// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Raw token amount type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::decimals::TokenDecimals;

/// Errors from parsing a human-readable decimal amount into base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAmountError {
    /// The input was empty after trimming
    #[error("amount is empty")]
    Empty,

    /// The input contained something other than digits and a single decimal point
    #[error("invalid amount `{input}`")]
    Invalid {
        /// The offending input
        input: String,
    },

    /// More fractional digits than the token supports
    #[error("amount `{input}` has more than {decimals} fractional digits")]
    TooPrecise {
        /// The offending input
        input: String,
        /// Token precision
        decimals: u8,
    },

    /// The value does not fit in 256 bits
    #[error("amount `{input}` overflows uint256")]
    Overflow {
        /// The offending input
        input: String,
    },
}

/// Raw token amount (not normalized for decimals)
///
/// This represents the raw token amount as stored on-chain in the smallest
/// unit. All conversions to and from decimal strings are exact; nothing goes
/// through floating point.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use transferscope::{TokenAmount, TokenDecimals};
///
/// let amount = TokenAmount::new(U256::from(2_500_000_000_000_000_000u64));
/// assert_eq!(amount.format_units(TokenDecimals::STANDARD), "2.5");
/// assert_eq!(amount.to_fixed(TokenDecimals::STANDARD, 4), "2.5000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenAmount(U256);

impl TokenAmount {
    /// Zero token amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new token amount from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Whether the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Full-precision decimal rendering: `amount / 10^decimals`.
    ///
    /// Trailing fractional zeros are trimmed and the decimal point is dropped
    /// for whole amounts, so `2.5 * 10^18` renders as `"2.5"` and `10^18` as `"1"`.
    pub fn format_units(&self, decimals: TokenDecimals) -> String {
        let (whole, fraction) = self.0.div_rem(decimals.scale());
        if fraction.is_zero() {
            return whole.to_string();
        }

        let padded = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = decimals.digits()
        );
        format!("{whole}.{}", padded.trim_end_matches('0'))
    }

    /// Render with exactly `places` fractional digits, rounding half up.
    ///
    /// The whole part is split off first, so only the fraction is rescaled
    /// and the result is exact for every `U256`.
    pub fn to_fixed(&self, decimals: TokenDecimals, places: u8) -> String {
        let (mut whole, remainder) = self.0.div_rem(decimals.scale());
        let digits = decimals.digits();
        let width = TokenDecimals::new(places).digits();

        let fraction = if width >= digits {
            remainder * TokenDecimals::new((width - digits) as u8).scale()
        } else {
            let step = TokenDecimals::new((digits - width) as u8).scale();
            let (mut fraction, rest) = remainder.div_rem(step);
            if rest >= step - rest {
                fraction += U256::from(1u64);
                if fraction == TokenDecimals::new(places).scale() {
                    whole = whole.saturating_add(U256::from(1u64));
                    fraction = U256::ZERO;
                }
            }
            fraction
        };

        if width == 0 {
            return whole.to_string();
        }
        format!("{whole}.{:0>width$}", fraction.to_string())
    }

    /// Parse a human-readable decimal string into base units.
    ///
    /// Accepts digits with at most one decimal point (`"1"`, `"1.5"`, `".5"`, `"5."`).
    pub fn parse_units(input: &str, decimals: TokenDecimals) -> Result<Self, ParseAmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseAmountError::Empty);
        }

        let invalid = || ParseAmountError::Invalid {
            input: trimmed.to_string(),
        };
        let overflow = || ParseAmountError::Overflow {
            input: trimmed.to_string(),
        };

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        if fraction.len() > decimals.digits() {
            return Err(ParseAmountError::TooPrecise {
                input: trimmed.to_string(),
                decimals: decimals.as_u8(),
            });
        }

        let digits = format!("{whole}{fraction:0<width$}", width = decimals.digits());
        let mut value = U256::ZERO;
        for digit in digits.bytes() {
            value = value
                .checked_mul(U256::from(10u64))
                .and_then(|v| v.checked_add(U256::from(digit - b'0')))
                .ok_or_else(overflow)?;
        }

        Ok(Self(value))
    }
}

impl From<u64> for TokenAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
