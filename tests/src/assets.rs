/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use maki_assets::{pack_pixels, HeaderWriter};
use maki_huffman::{compress, decompress};

use crate::{read_entries, JsonPixelFormat};

/// Pixels pass through packing, compression and the header and
/// come back out the same
#[test]
fn test_pack_compress_render() {
    for format in [JsonPixelFormat::Rgb565, JsonPixelFormat::Grayscale] {
        let format = format.to_pixel_format();

        for entry in read_entries("corpus.json") {
            let mut rgb = entry.generate();
            rgb.truncate(rgb.len() - rgb.len() % 3);

            let packed = pack_pixels(&rgb, format).unwrap();
            assert_eq!(packed.len(), rgb.len() / 3 * format.bytes_per_pixel());

            let Ok(compressed) = compress(&packed) else {
                continue;
            };
            assert_eq!(decompress(&compressed).unwrap(), packed);

            let header = HeaderWriter::new(&entry.name).unwrap();
            let text = header.render(&compressed);

            let start = text.find('{').unwrap() + 1;
            let end = text.rfind('}').unwrap();
            let bytes: Vec<u8> = text[start..end]
                .split(',')
                .filter(|x| !x.is_empty())
                .map(|x| x.parse().unwrap())
                .collect();
            assert_eq!(bytes, compressed, "{}", entry.name);
        }
    }
}
