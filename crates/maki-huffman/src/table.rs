/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Frequency table serialization
//!
//! Layout
//!
//! ```text
//! [2 bit width tag per entry, MSB first][tag 0b11][zero bits up to a byte boundary]
//! [symbol: u8][count: u8 | u16 le | u32 le] ... one pair per tag, in table order
//! ```
use alloc::format;
use alloc::vec::Vec;

use maki_core::bytestream::{ZByteReader, ZByteWriter};

use crate::bitstream::BitStreamWriter;
use crate::constants::{
    MAX_SYMBOLS, TAG_BITS, TAG_COUNT_U16, TAG_COUNT_U32, TAG_COUNT_U8, TAG_END
};
use crate::errors::MakiErrors;
use crate::frequency::FrequencyTable;

/// Smallest width tag able to hold `count`
pub const fn width_tag(count: u32) -> u8 {
    if count <= u8::MAX as u32 {
        TAG_COUNT_U8
    } else if count <= u16::MAX as u32 {
        TAG_COUNT_U16
    } else {
        TAG_COUNT_U32
    }
}

/// Serialize `table` into `writer`
pub fn pack_frequency_table(table: &FrequencyTable, writer: &mut ZByteWriter) {
    let mut tags = BitStreamWriter::with_capacity((table.len() + 1) * TAG_BITS / 8 + 1);

    for (_, count) in table.entries() {
        tags.write_value(width_tag(*count), TAG_BITS as u8);
    }
    tags.write_value(TAG_END, TAG_BITS as u8);

    // padding bits are zero tags and need no count
    let (tag_bytes, _) = tags.finish();
    writer.write_all(&tag_bytes);

    for (symbol, count) in table.entries() {
        writer.write_u8(*symbol);

        match width_tag(*count) {
            TAG_COUNT_U8 => writer.write_u8(*count as u8),
            TAG_COUNT_U16 => writer.write_u16_le(*count as u16),
            _ => writer.write_u32_le(*count)
        }
    }
}

/// Read a table written by [`pack_frequency_table`], leaving
/// `reader` positioned at the first payload byte
///
/// Entries come back in the order they were written, which is the
/// order the encoder built its tree from.
///
/// # Arguments
/// - `strict`: Reject non zero bits after the terminator tag
pub fn unpack_frequency_table(
    reader: &mut ZByteReader, strict: bool
) -> Result<FrequencyTable, MakiErrors> {
    let mut tags = Vec::new();

    'tags: loop {
        let byte = reader.get_u8_err().map_err(|_| {
            MakiErrors::MalformedFrame("frequency table terminator not found")
        })?;

        for i in 0..4_u8 {
            let shift = 6 - i * 2;
            let tag = (byte >> shift) & 0b11;

            if tag == TAG_END {
                let trailing = byte & ((1_u8 << shift) - 1);

                if strict && trailing != 0 {
                    return Err(MakiErrors::MalformedFrameOwned(format!(
                        "non zero bits {trailing:#04b} after frequency table terminator"
                    )));
                }
                break 'tags;
            }
            if tags.len() == MAX_SYMBOLS {
                return Err(MakiErrors::MalformedFrame(
                    "frequency table declares more than 256 entries"
                ));
            }
            tags.push(tag);
        }
    }

    let mut seen = [false; MAX_SYMBOLS];
    let mut table = FrequencyTable::new();

    for tag in tags {
        let symbol = reader.get_u8_err()?;

        let count = match tag {
            TAG_COUNT_U8 => u32::from(reader.get_u8_err()?),
            TAG_COUNT_U16 => u32::from(reader.get_u16_le_err()?),
            TAG_COUNT_U32 => reader.get_u32_le_err()?,
            _ => {
                return Err(MakiErrors::MalformedFrameOwned(format!(
                    "unknown count width tag {tag:#04b}"
                )))
            }
        };
        if seen[usize::from(symbol)] {
            return Err(MakiErrors::MalformedFrameOwned(format!(
                "symbol {symbol} appears twice in frequency table"
            )));
        }
        if count == 0 {
            return Err(MakiErrors::MalformedFrameOwned(format!(
                "symbol {symbol} has a zero count"
            )));
        }
        seen[usize::from(symbol)] = true;
        table.push(symbol, count);
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use maki_core::bytestream::{ZByteReader, ZByteWriter};

    use crate::errors::MakiErrors;
    use crate::frequency::FrequencyTable;
    use crate::table::{pack_frequency_table, unpack_frequency_table, width_tag};

    fn pack(table: &FrequencyTable) -> Vec<u8> {
        let mut writer = ZByteWriter::new();
        pack_frequency_table(table, &mut writer);
        writer.into_inner()
    }

    #[test]
    fn test_width_boundaries() {
        assert_eq!(width_tag(255), 0b00);
        assert_eq!(width_tag(256), 0b01);
        assert_eq!(width_tag(65535), 0b01);
        assert_eq!(width_tag(65536), 0b10);

        let mut table = FrequencyTable::new();
        table.push(7, 255);
        table.push(8, 256);
        table.push(9, 65535);
        table.push(10, 65536);

        let bytes = pack(&table);
        assert_eq!(
            bytes,
            [
                0b0001_0110, 0b1100_0000, // tags 00 01 01 10, 11
                7, 0xFF, // u8
                8, 0x00, 0x01, // u16
                9, 0xFF, 0xFF, // u16
                10, 0x00, 0x00, 0x01, 0x00 // u32
            ]
        );

        let mut reader = ZByteReader::new(&bytes);
        let unpacked = unpack_frequency_table(&mut reader, true).unwrap();

        assert_eq!(unpacked, table);
        assert!(reader.eof());
    }

    #[test]
    fn test_terminator_fills_byte() {
        // three tags and the terminator fill exactly one byte
        let table = FrequencyTable::from_bytes(&[1, 2, 3]);
        let bytes = pack(&table);

        assert_eq!(bytes, [0b0000_0011, 1, 1, 2, 1, 3, 1]);
        let mut reader = ZByteReader::new(&bytes);
        assert_eq!(unpack_frequency_table(&mut reader, true).unwrap(), table);
    }

    #[test]
    fn test_empty_table() {
        let bytes = pack(&FrequencyTable::new());
        assert_eq!(bytes, [0b1100_0000]);

        let mut reader = ZByteReader::new(&bytes);
        assert!(unpack_frequency_table(&mut reader, true)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let table = FrequencyTable::from_bytes(b"zebra crossing");
        let bytes = pack(&table);

        let mut reader = ZByteReader::new(&bytes);
        let unpacked = unpack_frequency_table(&mut reader, true).unwrap();
        assert_eq!(unpacked.entries(), table.entries());
    }

    #[test]
    fn test_missing_terminator() {
        let mut reader = ZByteReader::new(&[0x00, 0x00]);

        assert!(matches!(
            unpack_frequency_table(&mut reader, true),
            Err(MakiErrors::MalformedFrame(_))
        ));
    }

    #[test]
    fn test_truncated_pairs() {
        // one u16 entry declared, count cut short
        let mut reader = ZByteReader::new(&[0b0111_0000, 5, 0x01]);

        assert!(matches!(
            unpack_frequency_table(&mut reader, true),
            Err(MakiErrors::MalformedFrameOwned(_))
        ));
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let mut reader = ZByteReader::new(&[0b0000_1100, 4, 1, 4, 2]);
        assert!(unpack_frequency_table(&mut reader, true).is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        let mut reader = ZByteReader::new(&[0b0011_0000, 4, 0]);
        assert!(unpack_frequency_table(&mut reader, true).is_err());
    }

    #[test]
    fn test_trailing_tag_bits() {
        let data = [0b0011_0100, 4, 1];

        let mut reader = ZByteReader::new(&data);
        assert!(unpack_frequency_table(&mut reader, true).is_err());

        let mut reader = ZByteReader::new(&data);
        let table = unpack_frequency_table(&mut reader, false).unwrap();
        assert_eq!(table.entries(), &[(4, 1)]);
    }

    #[test]
    fn test_too_many_entries() {
        // 65 bytes of zero tags is 260 entries before any terminator
        let mut data = vec![0_u8; 65];
        data.push(0b1100_0000);

        let mut reader = ZByteReader::new(&data);
        assert!(matches!(
            unpack_frequency_table(&mut reader, true),
            Err(MakiErrors::MalformedFrame(_))
        ));
    }
}
