/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;
use core::mem::size_of;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

/// Encapsulates a simple growable byte writer with
/// support for endian aware writes
pub struct ZByteWriter {
    buffer: Vec<u8>
}

impl Default for ZByteWriter {
    fn default() -> Self {
        ZByteWriter::new()
    }
}

impl ZByteWriter {
    /// Create a new, empty writer
    pub const fn new() -> ZByteWriter {
        ZByteWriter { buffer: Vec::new() }
    }
    /// Create a writer whose buffer can hold `capacity`
    /// bytes before reallocating
    pub fn with_capacity(capacity: usize) -> ZByteWriter {
        ZByteWriter {
            buffer: Vec::with_capacity(capacity)
        }
    }
    /// Return the number of bytes the writer has written
    ///
    /// ```
    /// use maki_core::bytestream::ZByteWriter;
    /// let mut stream = ZByteWriter::new();
    /// stream.write_u8(1);
    /// assert_eq!(stream.bytes_written(), 1);
    /// ```
    pub fn bytes_written(&self) -> usize {
        self.buffer.len()
    }
    /// Write a single byte into the bytestream
    #[inline(always)]
    pub fn write_u8(&mut self, byte: u8) {
        self.buffer.push(byte);
    }
    /// Write all bytes from `buf` into the bytestream
    pub fn write_all(&mut self, buf: &[u8]) {
        self.buffer.extend_from_slice(buf);
    }
    /// Return the written bytes, consuming the writer
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl ZByteWriter {
            #[inline(always)]
            fn $name(&mut self, byte: $int_type, mode: Mode) {
                const SIZE: usize = size_of::<$int_type>();

                // get bits, depending on mode.
                // This should be inlined and not visible in
                // the generated binary since mode is a compile
                // time constant.
                let bytes: [u8; SIZE] = match mode {
                    Mode::BE => byte.to_be_bytes(),
                    Mode::LE => byte.to_le_bytes()
                };
                self.buffer.extend_from_slice(&bytes);
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a big endian integer")]
            #[inline]
            pub fn $name2(&mut self, byte: $int_type) {
                self.$name(byte, Mode::BE)
            }

            #[doc=concat!("Write ",stringify!($int_type)," as a little endian integer")]
            #[inline]
            pub fn $name3(&mut self, byte: $int_type) {
                self.$name(byte, Mode::LE)
            }
        }
    };
}

write_single_type!(write_u16_inner, write_u16_be, write_u16_le, u16);
write_single_type!(write_u32_inner, write_u32_be, write_u32_le, u32);
write_single_type!(write_u64_inner, write_u64_be, write_u64_le, u64);
