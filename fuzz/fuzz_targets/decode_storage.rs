#![no_main]

use libfuzzer_sys::fuzz_target;
use lump_decoder::{DecoderConfig, StorageDecoder};

// Fuzz target: StorageDecoder::decode over arbitrary images.
//
// Catches bugs in:
// - Container and table byte budgets
// - Reads past a lump's declared end
// - Unbounded recursion on nested roots
// - Trailing-byte accounting
fuzz_target!(|data: &[u8]| {
    if let Ok(root) = StorageDecoder::decode(data) {
        assert_eq!(root.size() + root.trailing_bytes, data.len());

        let strict = DecoderConfig {
            strict_trailing: true,
            ..DecoderConfig::default()
        };
        let exact = StorageDecoder::decode_with_config(&data[..root.size()], &strict);
        assert_eq!(exact.ok(), Some(root));
    }
});
