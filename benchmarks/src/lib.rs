/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;

/// Side of the square display the assets are sized for
pub const SCREEN: usize = 240;

/// A full screen of interleaved RGB drawn from `colors` flat colors,
/// laid out in horizontal runs the way icons and UI chrome are
pub fn screen_rgb(colors: u8, seed: u64) -> Vec<u8> {
    let mut rand = nanorand::WyRand::new_seed(seed);
    let palette: Vec<[u8; 3]> = (0..colors.max(1))
        .map(|_| [rand.generate(), rand.generate(), rand.generate()])
        .collect();

    let mut out = Vec::with_capacity(SCREEN * SCREEN * 3);
    let mut current = palette[0];

    for _ in 0..SCREEN * SCREEN {
        if rand.generate_range(0_u8..16) == 0 {
            current = palette[rand.generate_range(0..palette.len())];
        }
        out.extend_from_slice(&current);
    }
    out
}
