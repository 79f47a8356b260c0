// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for token-related values
//!
//! ```text
//! TokenAmount (U256, raw base units)
//!     |
//!     | format_units(TokenDecimals) / to_fixed(TokenDecimals, places)
//!     ↓
//! String (human-readable, exact)
//!
//! TokenId (U256, ERC-721 identifier, never scaled)
//! ```

mod amount;
mod decimals;
mod token_id;

pub use amount::{ParseAmountError, TokenAmount};
pub use decimals::TokenDecimals;
pub use token_id::TokenId;
