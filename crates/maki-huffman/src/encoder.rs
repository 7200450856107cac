/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::borrow::Cow;
use alloc::vec::Vec;

use maki_core::bytestream::ZByteWriter;
use maki_core::log::{debug, trace};
use maki_core::options::EncoderOptions;

use crate::bitstream::BitStreamWriter;
use crate::constants::{ENVELOPE_HEADER_SIZE, FRAME_HEADER_SIZE};
use crate::errors::MakiErrors;
use crate::frequency::FrequencyTable;
use crate::table::pack_frequency_table;
use crate::tree::HuffmanTree;

/// Apply a single round of Huffman coding to `data`
///
/// The returned frame is laid out as
///
/// ```text
/// [u8: padding bits in last payload byte][frequency table][payload]
/// ```
///
/// No attempt is made to keep the frame smaller than the input,
/// that decision belongs to [`MakiEncoder`].
pub fn encode_round(data: &[u8]) -> Result<Vec<u8>, MakiErrors> {
    if u32::try_from(data.len()).is_err() {
        return Err(MakiErrors::TooLargeInput(data.len()));
    }
    let table = FrequencyTable::from_bytes(data);

    let (payload, padding) = if table.is_empty() {
        (Vec::new(), 0)
    } else {
        let codes = HuffmanTree::new(&table)?.code_table();
        let mut bits = BitStreamWriter::with_capacity(data.len());

        for byte in data {
            let code = codes.get(*byte).ok_or(MakiErrors::UnexpectedTraversal(
                "symbol missing from its own code table"
            ))?;
            bits.write_bits(code);
        }
        bits.finish()
    };

    let mut writer = ZByteWriter::with_capacity(FRAME_HEADER_SIZE + payload.len() + 64);
    writer.write_u8(padding);
    pack_frequency_table(&table, &mut writer);
    writer.write_all(&payload);

    trace!(
        "Round: {} bytes, {} symbols, frame {} bytes",
        data.len(),
        table.len(),
        writer.bytes_written()
    );

    Ok(writer.into_inner())
}

/// Multi round Huffman encoder
///
/// Rounds are applied to the output of the previous round for as
/// long as each one makes the data strictly smaller. The result is
/// wrapped in an envelope
///
/// ```text
/// [u8: rounds][u32 le: original size][final frame]
/// ```
///
/// # Example
/// ```
/// use maki_huffman::{MakiEncoder, MakiErrors};
///
/// fn main() -> Result<(), MakiErrors> {
///     let pixels = [0_u8, 0, 0, 1].repeat(100);
///     let compressed = MakiEncoder::new(&pixels).encode()?;
///     assert!(compressed.len() < pixels.len());
///     Ok(())
/// }
/// ```
pub struct MakiEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> MakiEncoder<'a> {
    /// Create an encoder with default options
    pub fn new(data: &'a [u8]) -> MakiEncoder<'a> {
        MakiEncoder::new_with_options(data, EncoderOptions::default())
    }
    /// Create an encoder that respects `options`
    pub fn new_with_options(data: &'a [u8], options: EncoderOptions) -> MakiEncoder<'a> {
        MakiEncoder { data, options }
    }
    /// Run rounds until one fails to shrink the data and
    /// return the enveloped result
    ///
    /// # Errors
    /// - [`MakiErrors::CompressionImpossible`] if not even the first
    ///   round produced a smaller buffer
    /// - [`MakiErrors::TooLargeInput`] if the input length does not fit a u32
    pub fn encode(&self) -> Result<Vec<u8>, MakiErrors> {
        let original_size = u32::try_from(self.data.len())
            .map_err(|_| MakiErrors::TooLargeInput(self.data.len()))?;

        let mut current = Cow::Borrowed(self.data);
        let mut rounds = 0_u8;

        while rounds < self.options.get_max_rounds() {
            let frame = encode_round(&current)?;

            if frame.len() >= current.len() {
                debug!(
                    "Stopping after {} rounds, next frame would be {} bytes from {}",
                    rounds,
                    frame.len(),
                    current.len()
                );
                break;
            }
            current = Cow::Owned(frame);
            rounds += 1;
        }
        if rounds == 0 {
            return Err(MakiErrors::CompressionImpossible(self.data.len()));
        }

        let mut writer = ZByteWriter::with_capacity(ENVELOPE_HEADER_SIZE + current.len());
        writer.write_u8(rounds);
        writer.write_u32_le(original_size);
        writer.write_all(&current);

        debug!(
            "Compressed {} bytes into {} in {} rounds",
            self.data.len(),
            writer.bytes_written(),
            rounds
        );
        Ok(writer.into_inner())
    }
}
