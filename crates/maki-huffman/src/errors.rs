/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during encoding and decoding
use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

use maki_core::bytestream::ZByteIoError;

/// Possible errors that may occur during encoding and decoding
pub enum MakiErrors {
    /// The first round could not make the input smaller
    ///
    /// # Arguments
    /// - size of the input that could not be shrunk
    CompressionImpossible(usize),
    /// The input is longer than the envelope can describe
    TooLargeInput(usize),
    /// A frame or envelope is structurally inconsistent
    MalformedFrame(&'static str),
    /// Same as `MalformedFrame` but with a formatted reason
    MalformedFrameOwned(String),
    /// The tree walk stepped somewhere a well formed frame
    /// never leads to
    UnexpectedTraversal(&'static str),
    /// The data declares more output than the decoder was
    /// configured to produce
    ///
    /// # Arguments
    /// - 1st argument is the configured limit
    /// - 2nd argument is the declared size
    OutputLimitExceeded(usize, usize)
}

impl Debug for MakiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MakiErrors::CompressionImpossible(size) => {
                writeln!(f, "Cannot compress {size} bytes even once")
            }
            MakiErrors::TooLargeInput(size) => {
                writeln!(
                    f,
                    "Input of {size} bytes is too large, at most {} bytes can be encoded",
                    u32::MAX
                )
            }
            MakiErrors::MalformedFrame(reason) => {
                writeln!(f, "Malformed frame: {reason}")
            }
            MakiErrors::MalformedFrameOwned(reason) => {
                writeln!(f, "Malformed frame: {reason}")
            }
            MakiErrors::UnexpectedTraversal(reason) => {
                writeln!(f, "Unexpected tree traversal: {reason}")
            }
            MakiErrors::OutputLimitExceeded(limit, size) => {
                writeln!(
                    f,
                    "Output limit exceeded, set limit was {limit} and output size is {size}"
                )
            }
        }
    }
}

impl Display for MakiErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MakiErrors {}

impl From<ZByteIoError> for MakiErrors {
    fn from(value: ZByteIoError) -> Self {
        match value {
            ZByteIoError::NotEnoughBytes(expected, found) => MakiErrors::MalformedFrameOwned(
                alloc::format!("truncated data, needed {expected} bytes but only {found} remain")
            ),
            ZByteIoError::Generic(reason) => MakiErrors::MalformedFrame(reason)
        }
    }
}
