/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! `BitStreamWriter` and `BitStreamReader` API
//!
//! Bits are packed most significant bit first. The final byte is
//! zero padded and the number of padding bits travels separately.
use alloc::vec::Vec;

/// Packs single bits into bytes
pub struct BitStreamWriter {
    out:       Vec<u8>,
    // bits accumulated for the byte being built
    buffer:    u8,
    bits_used: u8
}

impl BitStreamWriter {
    pub fn new() -> BitStreamWriter {
        BitStreamWriter::with_capacity(0)
    }
    /// Create a writer able to hold `bytes` packed bytes
    /// before reallocating
    pub fn with_capacity(bytes: usize) -> BitStreamWriter {
        BitStreamWriter {
            out:       Vec::with_capacity(bytes),
            buffer:    0,
            bits_used: 0
        }
    }
    #[inline(always)]
    pub fn write_bit(&mut self, bit: bool) {
        self.buffer |= u8::from(bit) << (7 - self.bits_used);
        self.bits_used += 1;

        if self.bits_used == 8 {
            self.out.push(self.buffer);
            self.buffer = 0;
            self.bits_used = 0;
        }
    }
    /// Write bits in order, first bit is the most significant
    pub fn write_bits(&mut self, bits: &[bool]) {
        for bit in bits {
            self.write_bit(*bit);
        }
    }
    /// Write the low `num_bits` bits of `value`, highest first
    pub fn write_value(&mut self, value: u8, num_bits: u8) {
        debug_assert!(num_bits <= 8);

        for shift in (0..num_bits).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }
    /// Total number of bits written so far
    pub fn bits_written(&self) -> usize {
        self.out.len() * 8 + usize::from(self.bits_used)
    }
    /// Flush the partial byte and return the packed bytes together
    /// with the number of padding bits in the last byte (0-7)
    pub fn finish(mut self) -> (Vec<u8>, u8) {
        let mut padding = 0;

        if self.bits_used > 0 {
            padding = 8 - self.bits_used;
            self.out.push(self.buffer);
        }
        (self.out, padding)
    }
}

impl Default for BitStreamWriter {
    fn default() -> Self {
        BitStreamWriter::new()
    }
}

/// Reads back bits written by a [`BitStreamWriter`]
pub struct BitStreamReader<'src> {
    src:        &'src [u8],
    // position of the next bit to read
    position:   usize,
    // total readable bits, i.e. excluding padding
    bits_total: usize
}

impl<'src> BitStreamReader<'src> {
    /// Create a reader over `src` that stops before the last
    /// `padding` bits of the final byte
    ///
    /// A padding larger than the available bits leaves nothing
    /// to read; callers validate padding before this.
    pub fn new(src: &'src [u8], padding: u8) -> BitStreamReader<'src> {
        BitStreamReader {
            src,
            position: 0,
            bits_total: (src.len() * 8).saturating_sub(usize::from(padding))
        }
    }
    /// Return the next bit, or `None` once the stream is exhausted
    #[inline(always)]
    pub fn next_bit(&mut self) -> Option<bool> {
        if self.position >= self.bits_total {
            return None;
        }
        let byte = self.src[self.position >> 3];
        let bit = (byte >> (7 - (self.position & 7))) & 1;

        self.position += 1;

        Some(bit == 1)
    }
    /// Number of bits left before the padding
    pub const fn bits_left(&self) -> usize {
        self.bits_total - self.position
    }
}

impl Iterator for BitStreamReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_bit()
    }
}
