// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across transferscope.
//!
//! - Token amounts, decimals and ERC-721 ids
//! - Configuration values (block ranges)

pub mod config;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
