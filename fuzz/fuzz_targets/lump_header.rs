#![no_main]

use libfuzzer_sys::fuzz_target;
use lump_wire::{ByteCursor, LumpHeader, HEADER_SIZE, TAG_LEN};

// Fuzz target: LumpHeader::read_from with arbitrary bytes.
//
// Catches bugs in:
// - Truncated header handling
// - Tag NUL trimming on non-ASCII input
fuzz_target!(|data: &[u8]| {
    let mut cursor = ByteCursor::new(data);
    match LumpHeader::read_from(&mut cursor) {
        Ok(header) => {
            assert_eq!(cursor.offset(), HEADER_SIZE);
            assert!(header.name().chars().count() <= TAG_LEN);
            assert_eq!(header.total_size(), HEADER_SIZE + usize::from(header.declared_size));
        }
        Err(_) => assert!(data.len() < HEADER_SIZE),
    }
});
