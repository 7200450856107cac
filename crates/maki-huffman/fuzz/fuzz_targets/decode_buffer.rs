#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let opts = maki_core::options::DecoderOptions::default().set_max_output_size(1 << 20);

    let mut decoder = maki_huffman::MakiDecoder::new_with_options(data, opts);
    let _ = decoder.decode();
    let _ = maki_huffman::decode_round(data, &opts);
});
