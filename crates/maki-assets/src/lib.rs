/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turning decoded pixels into something a microcontroller can `#include`
//!
//! - [`pack_pixels`] converts interleaved 8-bit RGB into the
//!   byte layout of the target display, either RGB565 or one byte
//!   grayscale.
//! - [`HeaderWriter`] renders a byte buffer as a C header holding a
//!   single `const unsigned char` array.
//!
//! # Example
//! ```
//! use maki_assets::{pack_pixels, HeaderWriter, PixelFormat};
//!
//! let rgb = [255, 0, 0, 0, 0, 255];
//! let packed = pack_pixels(&rgb, PixelFormat::Rgb565).unwrap();
//! assert_eq!(packed, [0x00, 0xF8, 0x1F, 0x00]);
//!
//! let header = HeaderWriter::from_output_path("out/icon.h").unwrap();
//! assert!(header.render(&packed).starts_with("#ifndef ICON\n"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub use errors::AssetErrors;
pub use header::{sanitize_name, HeaderWriter};
pub use pixels::{grayscale, pack_pixels, rgb565, PixelFormat};

pub mod errors;
mod header;
mod pixels;
