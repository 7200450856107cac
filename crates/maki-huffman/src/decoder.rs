/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use alloc::{format, vec};

use maki_core::bytestream::ZByteReader;
use maki_core::log::{debug, trace};
use maki_core::options::DecoderOptions;

use crate::bitstream::BitStreamReader;
use crate::constants::ENVELOPE_HEADER_SIZE;
use crate::errors::MakiErrors;
use crate::table::unpack_frequency_table;
use crate::tree::{HuffmanNode, HuffmanTree};

/// Undo a single round produced by [`encode_round`](crate::encode_round)
///
/// The tree is rebuilt from the frame's frequency table and walked
/// one bit at a time from the root, emitting a byte whenever a leaf
/// is reached. Exactly as many bytes as the table counts are
/// produced, and the payload must be used up by then.
pub fn decode_round(frame: &[u8], options: &DecoderOptions) -> Result<Vec<u8>, MakiErrors> {
    let mut reader = ZByteReader::new(frame);

    let padding = reader
        .get_u8_err()
        .map_err(|_| MakiErrors::MalformedFrame("frame is missing its padding byte"))?;

    if padding > 7 {
        return Err(MakiErrors::MalformedFrameOwned(format!(
            "padding of {padding} bits is larger than a byte"
        )));
    }
    let table = unpack_frequency_table(&mut reader, options.get_strict_mode())?;
    let payload = reader.remaining_bytes();

    if payload.is_empty() && padding != 0 {
        return Err(MakiErrors::MalformedFrame(
            "padding declared for an empty payload"
        ));
    }

    let total = table.total();
    let limit = options.get_max_output_size();

    let total = match usize::try_from(total) {
        Ok(size) if size <= limit => size,
        _ => {
            return Err(MakiErrors::OutputLimitExceeded(
                limit,
                usize::try_from(total).unwrap_or(usize::MAX)
            ))
        }
    };
    trace!(
        "Frame: {} symbols, {} payload bytes, {} bytes out",
        table.len(),
        payload.len(),
        total
    );

    let mut bits = BitStreamReader::new(payload, padding);

    if table.is_empty() {
        if bits.bits_left() != 0 {
            return Err(MakiErrors::MalformedFrame("payload present without any symbols"));
        }
        return Ok(Vec::new());
    }
    let tree = HuffmanTree::new(&table)?;
    let root = tree.root();

    if let Some(HuffmanNode::Leaf { symbol, .. }) = tree.node(root) {
        // single symbol, every occurrence is encoded in zero bits
        if bits.bits_left() != 0 {
            return Err(MakiErrors::UnexpectedTraversal(
                "payload bits for a tree that is a single leaf"
            ));
        }
        return Ok(vec![*symbol; total]);
    }

    let mut out = Vec::with_capacity(total);
    let mut current = root;

    while out.len() < total {
        let bit = bits.next_bit().ok_or(MakiErrors::MalformedFrame(
            "payload is shorter than the symbols it declares"
        ))?;

        let next = match tree.node(current) {
            Some(HuffmanNode::Internal { left, right, .. }) => {
                if bit {
                    *right
                } else {
                    *left
                }
            }
            _ => {
                return Err(MakiErrors::UnexpectedTraversal(
                    "stepped from a node that is not an internal node"
                ))
            }
        };

        match tree.node(next) {
            Some(HuffmanNode::Leaf { symbol, .. }) => {
                out.push(*symbol);
                current = root;
            }
            Some(HuffmanNode::Internal { .. }) => current = next,
            None => {
                return Err(MakiErrors::UnexpectedTraversal(
                    "child index outside of the tree"
                ))
            }
        }
    }
    if bits.bits_left() != 0 {
        return Err(MakiErrors::MalformedFrameOwned(format!(
            "{} payload bits left after the last symbol",
            bits.bits_left()
        )));
    }
    Ok(out)
}

/// Multi round Huffman decoder
///
/// Reads the envelope written by [`MakiEncoder`](crate::MakiEncoder)
/// and applies [`decode_round`] as many times as it records.
///
/// # Example
/// ```
/// use maki_huffman::{MakiDecoder, MakiEncoder, MakiErrors};
///
/// fn main() -> Result<(), MakiErrors> {
///     let pixels = [9_u8, 9, 9, 200].repeat(64);
///     let compressed = MakiEncoder::new(&pixels).encode()?;
///     let decoded = MakiDecoder::new(&compressed).decode()?;
///     assert_eq!(decoded, pixels);
///     Ok(())
/// }
/// ```
pub struct MakiDecoder<'a> {
    data:            &'a [u8],
    options:         DecoderOptions,
    rounds:          u8,
    original_size:   usize,
    decoded_headers: bool
}

impl<'a> MakiDecoder<'a> {
    /// Create a decoder with the default options
    pub fn new(data: &'a [u8]) -> MakiDecoder<'a> {
        MakiDecoder::new_with_options(data, DecoderOptions::default())
    }
    /// Create a decoder that respects `options`
    pub fn new_with_options(data: &'a [u8], options: DecoderOptions) -> MakiDecoder<'a> {
        MakiDecoder {
            data,
            options,
            rounds: 0,
            original_size: 0,
            decoded_headers: false
        }
    }
    /// Read the envelope header
    ///
    /// After this, [`rounds`](Self::rounds) and
    /// [`original_size`](Self::original_size) return values.
    pub fn decode_headers(&mut self) -> Result<(), MakiErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let mut reader = ZByteReader::new(self.data);

        let rounds = reader.get_u8_err()?;
        let original_size = reader.get_u32_le_err()?;

        if rounds == 0 {
            return Err(MakiErrors::MalformedFrame("envelope records zero rounds"));
        }
        let limit = self.options.get_max_output_size();
        let original_size = usize::try_from(original_size).unwrap_or(usize::MAX);

        if original_size > limit {
            return Err(MakiErrors::OutputLimitExceeded(limit, original_size));
        }
        self.rounds = rounds;
        self.original_size = original_size;
        self.decoded_headers = true;

        trace!("Rounds: {}", self.rounds);
        trace!("Original size: {}", self.original_size);

        Ok(())
    }
    /// Number of rounds the envelope records, `None` if
    /// headers were not decoded
    pub const fn rounds(&self) -> Option<u8> {
        if self.decoded_headers {
            Some(self.rounds)
        } else {
            None
        }
    }
    /// Size of the buffer before compression, `None` if
    /// headers were not decoded
    pub const fn original_size(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.original_size)
        } else {
            None
        }
    }
    /// Decode the envelope, returning the original bytes
    pub fn decode(&mut self) -> Result<Vec<u8>, MakiErrors> {
        self.decode_headers()?;

        let mut current = self.data[ENVELOPE_HEADER_SIZE..].to_vec();

        for round in 0..self.rounds {
            current = decode_round(&current, &self.options)?;
            debug!("Round {} decoded into {} bytes", round + 1, current.len());
        }

        if self.options.get_strict_mode() && current.len() != self.original_size {
            return Err(MakiErrors::MalformedFrameOwned(format!(
                "decoded {} bytes but the envelope records {}",
                current.len(),
                self.original_size
            )));
        }
        Ok(current)
    }
}
