// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Free-text search over transfer records
//!
//! A record matches when any of these contain the term:
//!
//! | Field | Comparison |
//! |---|---|
//! | sender, recipient | lowercase hex vs lowercased term |
//! | amount / token id | rendered text vs raw term |
//! | block number | decimal vs raw term |
//! | transaction hash | lowercase hex vs lowercased term |
//!
//! Numeric fields compare against the term exactly as typed, so digits match
//! regardless of case while hex fields ignore case.

use crate::events::TransferRecord;

/// A prepared search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    lowered: String,
    blank: bool,
}

impl SearchQuery {
    /// Prepare `term` for matching
    pub fn new(term: &str) -> Self {
        Self {
            raw: term.to_string(),
            lowered: term.to_lowercase(),
            blank: term.trim().is_empty(),
        }
    }

    /// Whether the term is empty after trimming; blank queries match everything
    pub fn is_blank(&self) -> bool {
        self.blank
    }

    /// The term as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether `record` matches this query
    pub fn matches<T: TransferRecord + ?Sized>(&self, record: &T) -> bool {
        if self.blank {
            return true;
        }

        let address_hit = |address: Option<alloy_primitives::Address>| {
            address.is_some_and(|a| a.to_string().to_lowercase().contains(&self.lowered))
        };

        address_hit(record.sender())
            || address_hit(record.recipient())
            || record.value_text().contains(&self.raw)
            || record.block_number().to_string().contains(&self.raw)
            || record
                .transaction_hash()
                .to_string()
                .to_lowercase()
                .contains(&self.lowered)
    }

    /// Matching records, in their original order
    pub fn filter<'a, T: TransferRecord>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.matches(*record)).collect()
    }
}
