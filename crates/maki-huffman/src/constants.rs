/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Width tag for a count stored in one byte
pub const TAG_COUNT_U8: u8 = 0b00;
/// Width tag for a count stored as a little endian u16
pub const TAG_COUNT_U16: u8 = 0b01;
/// Width tag for a count stored as a little endian u32
pub const TAG_COUNT_U32: u8 = 0b10;
/// Marks the end of the width tag stream
pub const TAG_END: u8 = 0b11;

/// Number of bits a single width tag occupies
pub const TAG_BITS: usize = 2;

/// Size of the per-round header, the padding count byte
pub const FRAME_HEADER_SIZE: usize = 1;
/// Size of the envelope header, round count + original size
pub const ENVELOPE_HEADER_SIZE: usize = 1 + 4;

/// Distinct values a byte can take, and thus the most
/// entries a frequency table can have
pub const MAX_SYMBOLS: usize = 256;
