#![no_main]

use libfuzzer_sys::fuzz_target;
use lump_types::{DecodersVersion, Item};
use lump_wire::ByteCursor;

// Fuzz target: one item record under every table version.
//
// The first byte picks the type, the rest is the slot and record.
// Catches bugs in:
// - Layout selection per version
// - Optional-pin and flag decoding
// - Record sizes disagreeing with the bytes actually read
fuzz_target!(|data: &[u8]| {
    let Some((&type_byte, record)) = data.split_first() else {
        return;
    };
    for version in DecodersVersion::ALL {
        let Ok(kind) = version.resolve_item(type_byte) else {
            continue;
        };
        let mut cursor = ByteCursor::new(record);
        if let Ok(item) = Item::read(kind, &mut cursor) {
            assert_eq!(cursor.offset(), 1 + kind.size());
            assert_eq!(item.size(), kind.size());
        }
    }
});
