/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use maki_core::options::DecoderOptions;
use maki_huffman::{compress, MakiDecoder, MakiErrors};

use crate::{hash, read_entries};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_corpus() {
    let paths = read_entries("corpus.json");

    let mut error = false;
    let mut files = Vec::new();

    for path in &paths {
        let data = path.generate();
        let expected_hash = hash(&data);

        match compress(&data) {
            Ok(compressed) => {
                if !path.compressible {
                    error = true;
                    files.push(path.to_owned());
                    eprintln!("{} compressed but was expected not to\n", path.name);
                    continue;
                }
                assert!(compressed.len() < data.len());

                let options = DecoderOptions::default().set_max_output_size(data.len());
                let decoded = MakiDecoder::new_with_options(&compressed, options)
                    .decode()
                    .unwrap();

                let hash = hash(&decoded);

                if hash != expected_hash {
                    error = true;
                    files.push(path.to_owned());
                    // report error
                    let err = format!(
                        "Hash mismatch for entry {:?}\nExpected {} but found {}\nConfig:{:#?}",
                        path.name, expected_hash, hash, path
                    );
                    eprintln!("{}\n", err);
                }
            }
            Err(MakiErrors::CompressionImpossible(size)) if !path.compressible => {
                assert_eq!(size, data.len());
            }
            Err(err) => {
                error = true;
                files.push(path.to_owned());
                eprintln!("{} failed to compress: {:?}\n", path.name, err);
            }
        }
    }
    if error {
        panic!("Errors found during round trip\n {:#?}", files);
    }
}
