/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

use maki_core::log::trace;

use crate::errors::AssetErrors;

/// Byte layout expected by the target display
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum PixelFormat {
    /// 5 bits red, 6 bits green, 5 bits blue, two bytes per pixel
    #[default]
    Rgb565,
    /// Average of the three channels, one byte per pixel
    Grayscale
}

impl PixelFormat {
    /// Number of bytes one pixel occupies once packed
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb565 => 2,
            PixelFormat::Grayscale => 1
        }
    }
}

/// Pack one pixel into RGB565
///
/// The display reads the word byte swapped, so the low byte comes first.
#[inline]
pub const fn rgb565(r: u8, g: u8, b: u8) -> [u8; 2] {
    let value = ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | ((b as u16) >> 3);

    value.to_le_bytes()
}

/// Floor of the channel average
#[inline]
pub const fn grayscale(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Pack an interleaved RGB buffer into `format`
///
/// # Errors
/// If `rgb.len()` is not a multiple of three
pub fn pack_pixels(rgb: &[u8], format: PixelFormat) -> Result<Vec<u8>, AssetErrors> {
    if rgb.len() % 3 != 0 {
        return Err(AssetErrors::InvalidPixelBuffer(rgb.len(), 3));
    }
    let pixels = rgb.len() / 3;
    let mut out = Vec::with_capacity(pixels * format.bytes_per_pixel());

    match format {
        PixelFormat::Rgb565 => {
            for px in rgb.chunks_exact(3) {
                out.extend_from_slice(&rgb565(px[0], px[1], px[2]));
            }
        }
        PixelFormat::Grayscale => {
            out.extend(rgb.chunks_exact(3).map(|px| grayscale(px[0], px[1], px[2])));
        }
    }
    trace!("Packed {} pixels as {:?} into {} bytes", pixels, format, out.len());

    Ok(out)
}
