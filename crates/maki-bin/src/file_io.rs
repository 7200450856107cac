/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use log::{debug, info};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;
use zune_imageprocs::resize::{Resize, ResizeMethod};

use crate::errors::MakiBinErrors;

/// An image on disk that will be turned into display pixels
pub struct MakiFile {
    file_path: OsString
}

impl MakiFile {
    pub fn new(file_path: OsString) -> MakiFile {
        MakiFile { file_path }
    }

    /// Decode the file into interleaved 8-bit RGB of exactly
    /// `width` x `height` pixels
    pub fn load_rgb(&self, width: usize, height: usize) -> Result<Vec<u8>, MakiBinErrors> {
        if width == 0 || height == 0 {
            return Err(MakiBinErrors::Generic(format!(
                "Cannot resize to {width}x{height}"
            )));
        }
        let mut image = Image::open(&self.file_path)?;

        let (in_width, in_height) = image.dimensions();
        info!("Decoded {:?}, {}x{}", self.file_path, in_width, in_height);

        ColorspaceConv::new(ColorSpace::RGB).execute(&mut image)?;
        Depth::new(BitDepth::Eight).execute(&mut image)?;

        if (in_width, in_height) != (width, height) {
            debug!("Resizing to {}x{}", width, height);
            Resize::new(width, height, ResizeMethod::Bilinear).execute(&mut image)?;
        }

        let pixels = image
            .flatten_to_u8()
            .into_iter()
            .next()
            .ok_or_else(|| MakiBinErrors::Generic(String::from("Image contains no frames")))?;

        if pixels.len() != width * height * 3 {
            return Err(MakiBinErrors::Generic(format!(
                "Expected {} bytes of RGB pixels but image produced {}",
                width * height * 3,
                pixels.len()
            )));
        }
        Ok(pixels)
    }
}
