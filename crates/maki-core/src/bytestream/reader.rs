/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use core::mem::size_of;

/// Errors possible when reading from a [`ZByteReader`]
pub enum ZByteIoError {
    // requested, left
    NotEnoughBytes(usize, usize),
    Generic(&'static str)
}

impl Debug for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ZByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ZByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl Display for ZByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ZByteIoError {}

impl From<&'static str> for ZByteIoError {
    fn from(value: &'static str) -> Self {
        ZByteIoError::Generic(value)
    }
}

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// with the exception of adding endian aware reads which
/// return an error when the stream cannot satisfy them
pub struct ZByteReader<'a> {
    stream:   &'a [u8],
    position: usize
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    ///
    /// # Example
    /// ```
    /// use maki_core::bytestream::ZByteReader;
    /// let reader = ZByteReader::new(&[1, 2, 3]);
    /// assert_eq!(reader.remaining(), 3);
    /// ```
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Return the current position of the inner cursor.
    ///
    /// This can be used to check the number of bytes read
    pub const fn position(&self) -> usize {
        self.position
    }
    /// Return the number of bytes left unread in the stream
    pub const fn remaining(&self) -> usize {
        self.stream.len().saturating_sub(self.position)
    }
    /// Return true if the stream has `num` more bytes
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Return true if the stream has no more bytes
    pub const fn eof(&self) -> bool {
        self.position >= self.stream.len()
    }
    /// Skip `num` bytes ahead of the stream or error out
    /// if the stream does not have that many bytes
    pub fn skip(&mut self, num: usize) -> Result<(), ZByteIoError> {
        if !self.has(num) {
            return Err(ZByteIoError::NotEnoughBytes(num, self.remaining()));
        }
        self.position += num;
        Ok(())
    }
    /// Read a single byte or error out if the stream
    /// is exhausted
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ZByteIoError> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err(ZByteIoError::NotEnoughBytes(1, 0))
        }
    }
    /// Read a single byte returning `0` if the stream
    /// is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        self.get_u8_err().unwrap_or(0)
    }
    /// Return a reference to the next `num` bytes, advancing
    /// the stream past them
    pub fn get_bytes(&mut self, num: usize) -> Result<&'a [u8], ZByteIoError> {
        match self.stream.get(self.position..self.position.saturating_add(num)) {
            Some(bytes) => {
                self.position += num;
                Ok(bytes)
            }
            None => Err(ZByteIoError::NotEnoughBytes(num, self.remaining()))
        }
    }
    /// Read `N` bytes into a fixed size array
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ZByteIoError> {
        let mut byte_store = [0; N];
        byte_store.copy_from_slice(self.get_bytes(N)?);
        Ok(byte_store)
    }
    /// Return the bytes that have not yet been read
    /// and move the stream to the end
    pub fn remaining_bytes(&mut self) -> &'a [u8] {
        let bytes = self.stream.get(self.position..).unwrap_or(&[]);
        self.position = self.stream.len();
        bytes
    }
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<'a> ZByteReader<'a> {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> Result<$int_type, ZByteIoError> {
                const SIZE_OF_VAL: usize = size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];
                space.copy_from_slice(self.get_bytes(SIZE_OF_VAL)?);

                Ok(match mode {
                    Mode::BE => $int_type::from_be_bytes(space),
                    Mode::LE => $int_type::from_le_bytes(space)
                })
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a big endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name2(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$name(Mode::BE)
            }

            #[doc=concat!("Read ",stringify!($int_type)," as a little endian integer")]
            #[doc=concat!("Returning an error if the underlying buffer cannot support a ",stringify!($int_type)," read.")]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ZByteIoError> {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(get_u16_inner_or_error, get_u16_be_err, get_u16_le_err, u16);
get_single_type!(get_u32_inner_or_error, get_u32_be_err, get_u32_le_err, u32);
get_single_type!(get_u64_inner_or_error, get_u64_be_err, get_u64_le_err, u64);
