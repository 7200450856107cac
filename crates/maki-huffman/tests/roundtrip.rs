/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use maki_core::options::{DecoderOptions, EncoderOptions};
use maki_huffman::{
    compress, decode_round, decompress, encode_round, MakiDecoder, MakiEncoder, MakiErrors
};
use nanorand::Rng;

/// Pixels drawn from a small palette, similar to what a UI icon looks like
fn palette_pixels(len: usize, colors: u8, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);
    (0..len)
        .map(|_| rand.generate_range(0..colors).wrapping_mul(37))
        .collect()
}

/// Mostly background with a sparse foreground, the shape that benefits
/// from more than one round
fn sparse_pixels(len: usize, every: usize) -> Vec<u8> {
    (0..len).map(|x| u8::from(x % every == 0)).collect()
}

#[test]
fn roundtrip_palette_data() {
    for (colors, seed) in [(2, 1), (4, 2), (16, 3), (60, 4)] {
        let data = palette_pixels(4096, colors, seed);
        let compressed = compress(&data).unwrap();

        assert!(compressed.len() < data.len(), "{colors} colors did not shrink");
        assert_eq!(decompress(&compressed).unwrap(), data);
    }
}

#[test]
fn roundtrip_degenerate_alphabet() {
    let data = vec![0xA5_u8; 1000];
    let compressed = compress(&data).unwrap();

    // one round is enough, a single symbol costs no payload bits
    assert_eq!(compressed[0], 1);
    assert_eq!(&compressed[1..5], &1000_u32.to_le_bytes());
    assert_eq!(decompress(&compressed).unwrap(), data);
}

#[test]
fn rounds_match_envelope() {
    let data = sparse_pixels(20_000, 50);
    let compressed = compress(&data).unwrap();
    let rounds = compressed[0];
    assert!(rounds > 1);

    // replay the rounds by hand and check each one shrinks
    let mut current = data.clone();
    for _ in 0..rounds {
        let frame = encode_round(&current).unwrap();
        assert!(frame.len() < current.len());
        current = frame;
    }
    assert_eq!(&compressed[5..], &current[..]);

    let options = DecoderOptions::default();
    for _ in 0..rounds {
        current = decode_round(&current, &options).unwrap();
    }
    assert_eq!(current, data);
}

#[test]
fn random_bytes_cannot_be_compressed() {
    let mut data = vec![0_u8; 256];
    for (pos, byte) in data.iter_mut().enumerate() {
        *byte = pos as u8;
    }
    let err = compress(&data);
    assert!(matches!(err, Err(MakiErrors::CompressionImpossible(256))));
}

#[test]
fn max_rounds_is_respected() {
    let data = sparse_pixels(20_000, 50);
    let unlimited = compress(&data).unwrap();
    assert!(unlimited[0] > 1);

    let options = EncoderOptions::default().set_max_rounds(1);
    let limited = MakiEncoder::new_with_options(&data, options)
        .encode()
        .unwrap();
    assert_eq!(limited[0], 1);
    assert_eq!(decompress(&limited).unwrap(), data);
}

#[test]
fn truncated_envelope_is_rejected() {
    let data = palette_pixels(4096, 4, 11);
    let compressed = compress(&data).unwrap();

    for cut in [1, 4, 6, compressed.len() - 1] {
        let result = MakiDecoder::new(&compressed[..cut]).decode();
        assert!(result.is_err(), "cut at {cut} decoded");
    }
}

#[test]
fn output_limit_is_enforced() {
    let data = palette_pixels(4096, 4, 12);
    let compressed = compress(&data).unwrap();

    let options = DecoderOptions::default().set_max_output_size(4095);
    let result = MakiDecoder::new_with_options(&compressed, options).decode();
    assert!(matches!(
        result,
        Err(MakiErrors::OutputLimitExceeded(4095, 4096))
    ));
}

#[test]
fn rgb565_like_pairs() {
    // a gradient packed two bytes per pixel
    let mut data = Vec::new();
    for y in 0..64_u16 {
        for _ in 0..64 {
            let value = (y >> 2) << 11;
            data.extend_from_slice(&value.to_le_bytes());
        }
    }
    let compressed = compress(&data).unwrap();
    assert!(compressed.len() < data.len() / 2);
    assert_eq!(decompress(&compressed).unwrap(), data);
}
