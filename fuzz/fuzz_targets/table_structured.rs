#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lump_decoder::StorageDecoder;
use lump_types::{DecodersVersion, ItemType};
use lump_wire::ROOT_TAG;

#[derive(Debug, Arbitrary)]
struct FuzzGroup {
    family: u8,
    items: Vec<(u8, [u8; 8])>,
}

#[derive(Debug, Arbitrary)]
struct FuzzTable {
    version: u8,
    guid: [u8; 16],
    groups: Vec<FuzzGroup>,
}

fn lump(tag: &str, payload: &[u8]) -> Option<Vec<u8>> {
    let size = u16::try_from(payload.len()).ok()?;
    let mut out = [0u8; 8].to_vec();
    out[..tag.len()].copy_from_slice(tag.as_bytes());
    out.extend_from_slice(&size.to_le_bytes());
    out.extend_from_slice(payload);
    Some(out)
}

// Fuzz target: well-formed decoders tables always decode.
//
// Groups are built with the exact record size the version's layout
// declares, so every generated image is valid. Any decode error is a bug
// in the budget or layout tables.
fuzz_target!(|input: FuzzTable| {
    let versions = DecodersVersion::ALL;
    let version = versions[usize::from(input.version) % versions.len()];

    let mut payload = input.guid.to_vec();
    let mut expected = 0;
    for group in &input.groups {
        let family = ItemType::ALL[usize::from(group.family) % ItemType::ALL.len()];
        let Some(kind) = version.layout(family) else {
            continue;
        };
        let items = &group.items[..group.items.len().min(255)];
        payload.push(family.wire_id());
        payload.push(items.len() as u8);
        for (slot, record) in items {
            payload.push(*slot);
            payload.extend_from_slice(&record[..kind.size()]);
        }
        expected += items.len();
    }
    payload.push(0);

    let Some(table) = lump(version.tag(), &payload) else {
        return;
    };
    let Some(mut image) = lump("", &table) else {
        return;
    };
    image[..8].copy_from_slice(&ROOT_TAG);

    let root = StorageDecoder::decode(&image).expect("well-formed table decodes");
    let decoded: usize = root.decoders().map(|t| t.items().len()).sum();
    assert_eq!(decoded, expected);
});
