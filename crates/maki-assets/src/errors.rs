/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::string::String;
use core::fmt::{Debug, Display, Formatter};

/// Errors possible when preparing an asset
pub enum AssetErrors {
    /// The pixel buffer length is not a multiple of the
    /// number of channels
    ///
    /// # Arguments
    /// - 1st argument is the buffer length
    /// - 2nd argument is the expected channel count
    InvalidPixelBuffer(usize, usize),
    /// No usable C identifier could be derived from the path
    InvalidVariableName(String)
}

impl Debug for AssetErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            AssetErrors::InvalidPixelBuffer(length, channels) => {
                writeln!(
                    f,
                    "Pixel buffer of {length} bytes is not a multiple of {channels} channels"
                )
            }
            AssetErrors::InvalidVariableName(path) => {
                writeln!(f, "Cannot derive a C variable name from {path:?}")
            }
        }
    }
}

impl Display for AssetErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AssetErrors {}
