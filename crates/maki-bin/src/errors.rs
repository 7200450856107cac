/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use maki_assets::AssetErrors;
use maki_huffman::MakiErrors;
use zune_image::errors::ImageErrors;

/// Everything that can stop the command line tool
pub enum MakiBinErrors {
    Codec(MakiErrors),
    Asset(AssetErrors),
    Image(ImageErrors),
    Io(std::io::Error),
    /// Decompressing the output did not give back the packed pixels
    VerificationFailed,
    Generic(String)
}

impl Debug for MakiBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MakiBinErrors::Codec(err) => writeln!(f, "Codec error: {err:?}"),
            MakiBinErrors::Asset(err) => writeln!(f, "Asset error: {err:?}"),
            MakiBinErrors::Image(err) => writeln!(f, "Image error: {err:?}"),
            MakiBinErrors::Io(err) => writeln!(f, "I/O error: {err}"),
            MakiBinErrors::VerificationFailed => {
                writeln!(f, "Decompressed data does not match the packed pixels")
            }
            MakiBinErrors::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for MakiBinErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for MakiBinErrors {}

impl From<MakiErrors> for MakiBinErrors {
    fn from(value: MakiErrors) -> Self {
        MakiBinErrors::Codec(value)
    }
}

impl From<AssetErrors> for MakiBinErrors {
    fn from(value: AssetErrors) -> Self {
        MakiBinErrors::Asset(value)
    }
}

impl From<ImageErrors> for MakiBinErrors {
    fn from(value: ImageErrors) -> Self {
        MakiBinErrors::Image(value)
    }
}

impl From<std::io::Error> for MakiBinErrors {
    fn from(value: std::io::Error) -> Self {
        MakiBinErrors::Io(value)
    }
}

impl From<String> for MakiBinErrors {
    fn from(value: String) -> Self {
        MakiBinErrors::Generic(value)
    }
}
