/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use maki_core::options::{DecoderOptions, EncoderOptions};

pub mod global_options;

pub fn get_encoder_options(options: &ArgMatches) -> EncoderOptions {
    let max_rounds = options.get_one::<u8>("max-rounds").copied().unwrap_or(255);

    EncoderOptions::default().set_max_rounds(max_rounds)
}

/// Options used when checking our own output
///
/// The output can never be larger than what we just packed, so the
/// limit is the packed size itself.
pub fn get_decoder_options(packed_len: usize) -> DecoderOptions {
    DecoderOptions::default()
        .set_max_output_size(packed_len)
        .set_strict_mode(true)
}
