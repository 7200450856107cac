/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use maki_assets::PixelFormat;
use nanorand::Rng;
use serde::Deserialize;
use xxhash_rust::xxh3::xxh3_128;

mod assets;
mod corpus;

/// How the bytes of a corpus entry are produced
#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generator {
    /// Every byte is `seed as u8`
    Constant,
    /// Uniform choice among `palette` values
    Palette,
    /// Zero with a one every `period` bytes
    Sparse,
    /// Horizontal bands of RGB565 pixels
    Rgb565Bands,
    /// Uniform random bytes
    Random
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonPixelFormat {
    Rgb565,
    Grayscale
}

impl JsonPixelFormat {
    pub fn to_pixel_format(self) -> PixelFormat {
        match self {
            Self::Rgb565 => PixelFormat::Rgb565,
            Self::Grayscale => PixelFormat::Grayscale
        }
    }
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:         String,
    pub generator:    Generator,
    pub length:       usize,
    pub seed:         u64,
    pub palette:      Option<u8>,
    pub period:       Option<usize>,
    /// `false` when not even one round is expected to shrink the data
    pub compressible: bool,
    pub comment:      Option<String>
}

impl TestEntry {
    pub fn generate(&self) -> Vec<u8> {
        let mut rand = nanorand::WyRand::new_seed(self.seed);

        match self.generator {
            Generator::Constant => vec![self.seed as u8; self.length],
            Generator::Palette => {
                let colors = self.palette.unwrap_or(4).max(1);
                (0..self.length)
                    .map(|_| rand.generate_range(0..colors).wrapping_mul(67))
                    .collect()
            }
            Generator::Sparse => {
                let period = self.period.unwrap_or(16).max(1);
                (0..self.length).map(|x| u8::from(x % period == 0)).collect()
            }
            Generator::Rgb565Bands => {
                let period = self.period.unwrap_or(8).max(1);
                (0..self.length)
                    .map(|x| {
                        let band = ((x / 2) / period) as u16;
                        let word = (band.wrapping_mul(0x0841)).to_le_bytes();
                        word[x % 2]
                    })
                    .collect()
            }
            Generator::Random => {
                let mut data = vec![0_u8; self.length];
                rand.fill(&mut data);
                data
            }
        }
    }
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).to_owned()
}

pub fn read_entries(name: &str) -> Vec<TestEntry> {
    let file = sample_path().join("tests").join(name);
    let json_file = read(file).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
