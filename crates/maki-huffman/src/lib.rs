/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A multi-round Huffman codec
//!
//! This crate shrinks small, highly repetitive buffers (think raw pixel
//! data for a microcontroller display) by applying
//! Huffman coding repeatedly and stopping as soon as another round would
//! no longer make the data smaller.
//!
//! Every round produces a self describing frame
//!
//! ```text
//! [u8 padding][frequency table][payload]
//! ```
//!
//! and the whole stack of rounds is wrapped in an envelope
//!
//! ```text
//! [u8 rounds][u32 LE original size][last frame]
//! ```
//!
//! The tree is rebuilt on decode from the frequency table alone, so
//! tie-breaking during construction is part of the format.
//!
//! # Example
//! ```
//! use maki_huffman::{compress, decompress, MakiErrors};
//!
//! fn main() -> Result<(), MakiErrors> {
//!     let data = [0_u8, 0, 0, 0, 255, 255, 0, 0].repeat(100);
//!     let compressed = compress(&data)?;
//!     assert!(compressed.len() < data.len());
//!     assert_eq!(decompress(&compressed)?, data);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//! - `std`: Enables `std::error::Error` for the error type
//! - `log`: Routes trace/debug messages to the `log` crate
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

use alloc::vec::Vec;

pub use bitstream::{BitStreamReader, BitStreamWriter};
pub use decoder::{decode_round, MakiDecoder};
pub use encoder::{encode_round, MakiEncoder};
pub use errors::MakiErrors;
pub use frequency::FrequencyTable;
pub use maki_core;
pub use table::{pack_frequency_table, unpack_frequency_table, width_tag};
pub use tree::{CodeTable, HuffmanNode, HuffmanTree};

mod bitstream;
pub mod constants;
mod decoder;
mod encoder;
pub mod errors;
mod frequency;
mod table;
mod tree;

/// Compress `data` with default encoder options
///
/// See [`MakiEncoder`] for control over the number of rounds.
pub fn compress(data: &[u8]) -> Result<Vec<u8>, MakiErrors> {
    MakiEncoder::new(data).encode()
}

/// Decompress an envelope produced by [`compress`] with default
/// decoder options
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, MakiErrors> {
    MakiDecoder::new(data).decode()
}
