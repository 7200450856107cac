/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte frequency analysis
use alloc::vec::Vec;

use crate::constants::MAX_SYMBOLS;

/// Occurrence counts of byte values, in the order each
/// value was first seen
///
/// The order is part of the format: the decoder rebuilds the
/// Huffman tree from this table, and the tree depends on the
/// order entries are enumerated in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, u32)>
}

impl FrequencyTable {
    /// Create an empty table
    pub const fn new() -> FrequencyTable {
        FrequencyTable { entries: Vec::new() }
    }
    /// Count every byte in `data`
    ///
    /// # Example
    /// ```
    /// use maki_huffman::FrequencyTable;
    /// let table = FrequencyTable::from_bytes(b"abca");
    /// assert_eq!(table.entries(), &[(b'a', 2), (b'b', 1), (b'c', 1)]);
    /// ```
    ///
    /// # Panics
    /// If a single byte value occurs more than `u32::MAX` times,
    /// callers limit input sizes before getting here
    pub fn from_bytes(data: &[u8]) -> FrequencyTable {
        // position of each byte value in `entries`, or usize::MAX
        let mut slots = [usize::MAX; MAX_SYMBOLS];
        let mut entries = Vec::new();

        for byte in data {
            let slot = &mut slots[usize::from(*byte)];

            if *slot == usize::MAX {
                *slot = entries.len();
                entries.push((*byte, 1_u32));
            } else {
                entries[*slot].1 += 1;
            }
        }
        FrequencyTable { entries }
    }
    /// Append an entry to the end of the table
    ///
    /// The caller ensures `symbol` is not already present
    pub fn push(&mut self, symbol: u8, count: u32) {
        self.entries.push((symbol, count));
    }
    /// Return `(symbol, count)` pairs in first-occurrence order
    pub fn entries(&self) -> &[(u8, u32)] {
        &self.entries
    }
    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Sum of all counts, i.e. the length of the buffer
    /// the table describes
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| u64::from(*count)).sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::FrequencyTable;

    #[test]
    fn test_first_occurrence_order() {
        let table = FrequencyTable::from_bytes(&[9, 3, 9, 200, 3, 9, 0]);

        assert_eq!(table.entries(), &[(9, 3), (3, 2), (200, 1), (0, 1)]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 7);
    }

    #[test]
    fn test_empty_buffer() {
        let table = FrequencyTable::from_bytes(&[]);

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn test_all_byte_values() {
        let data: Vec<u8> = (0..=255).rev().chain(0..=255).collect();
        let table = FrequencyTable::from_bytes(&data);

        assert_eq!(table.len(), 256);
        assert_eq!(table.entries()[0], (255, 2));
        assert_eq!(table.entries()[255], (0, 2));
    }
}
