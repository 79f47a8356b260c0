// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration value types

use serde::{Deserialize, Serialize};

/// Maximum number of blocks requested in a single `eth_getLogs` call
///
/// # Examples
///
/// ```
/// use transferscope::MaxBlockRange;
///
/// let range = MaxBlockRange::new(1000);
/// let chunks: Vec<_> = range.chunk_range(0, 2500).collect();
/// assert_eq!(chunks, vec![(0, 999), (1000, 1999), (2000, 2500)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxBlockRange(u64);

impl MaxBlockRange {
    /// Safe default for public testnet RPC endpoints
    pub const DEFAULT: Self = Self(500);

    /// Create a new max block range; zero is bumped to one block
    pub const fn new(blocks: u64) -> Self {
        if blocks == 0 {
            Self(1)
        } else {
            Self(blocks)
        }
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Calculate number of chunks needed to cover an inclusive range
    pub fn chunks_needed(&self, start: u64, end: u64) -> usize {
        if end < start {
            return 0;
        }
        let total_blocks = end - start + 1;
        total_blocks.div_ceil(self.0) as usize
    }

    /// Split an inclusive block range into `(start, end)` chunks of at most `self` blocks
    pub fn chunk_range(&self, start: u64, end: u64) -> ChunkIterator {
        ChunkIterator {
            current: start,
            end,
            chunk_size: self.0,
            done: end < start,
        }
    }
}

impl Default for MaxBlockRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u64> for MaxBlockRange {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for MaxBlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} blocks", self.0)
    }
}

/// Iterator over block range chunks
///
/// Created by [`MaxBlockRange::chunk_range`].
#[derive(Debug, Clone)]
pub struct ChunkIterator {
    current: u64,
    end: u64,
    chunk_size: u64,
    done: bool,
}

impl Iterator for ChunkIterator {
    type Item = (u64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let chunk_start = self.current;
        let chunk_end = chunk_start
            .saturating_add(self.chunk_size - 1)
            .min(self.end);

        // u64::MAX as an end block would otherwise wrap
        match chunk_end.checked_add(1) {
            Some(next) if next <= self.end => self.current = next,
            _ => self.done = true,
        }

        Some((chunk_start, chunk_end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_needed() {
        let range = MaxBlockRange::new(1000);
        assert_eq!(range.chunks_needed(0, 2500), 3);
        assert_eq!(range.chunks_needed(0, 999), 1);
        assert_eq!(range.chunks_needed(10, 5), 0);
    }

    #[test]
    fn test_chunk_range_single_block() {
        let range = MaxBlockRange::new(500);
        let chunks: Vec<_> = range.chunk_range(42, 42).collect();
        assert_eq!(chunks, vec![(42, 42)]);
    }

    #[test]
    fn test_chunk_range_empty_when_inverted() {
        let range = MaxBlockRange::new(500);
        assert_eq!(range.chunk_range(10, 5).count(), 0);
    }

    #[test]
    fn test_chunk_range_at_u64_max() {
        let range = MaxBlockRange::new(10);
        let chunks: Vec<_> = range.chunk_range(u64::MAX - 3, u64::MAX).collect();
        assert_eq!(chunks, vec![(u64::MAX - 3, u64::MAX)]);
    }

    #[test]
    fn test_zero_is_bumped_to_one() {
        assert_eq!(MaxBlockRange::new(0).as_u64(), 1);
    }
}
