#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let frame = maki_huffman::encode_round(data).unwrap();
    let opts = maki_core::options::DecoderOptions::default().set_max_output_size(usize::MAX);
    assert_eq!(maki_huffman::decode_round(&frame, &opts).unwrap(), data);

    if let Ok(compressed) = maki_huffman::compress(data) {
        assert_eq!(maki_huffman::decompress(&compressed).unwrap(), data);
    }
});
