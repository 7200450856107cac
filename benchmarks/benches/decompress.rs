/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use maki_assets::{pack_pixels, PixelFormat};
use maki_benches::screen_rgb;
use maki_huffman::{compress, decompress};

fn bench_decompress(c: &mut Criterion) {
    for colors in [2, 12, 64] {
        let packed = pack_pixels(&screen_rgb(colors, 7), PixelFormat::Rgb565).unwrap();
        let compressed = compress(&packed).unwrap();

        let mut group = c.benchmark_group(format!("maki: decompress {colors} colors"));
        group.throughput(Throughput::Bytes(packed.len() as u64));

        group.bench_function("maki-huffman", |b| {
            b.iter(|| black_box(decompress(compressed.as_slice()).unwrap()))
        });
    }
}

criterion_group!(name=benches;
      config={
      let c = Criterion::default();
        c.measurement_time(Duration::from_secs(20))
      };
    targets=bench_decompress);

criterion_main!(benches);
