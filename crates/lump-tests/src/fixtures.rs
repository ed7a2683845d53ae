use lump_types::item_type::ITEM_TERMINATOR;
use lump_types::network::NODE_NAME_LEN;
use lump_types::{DecodersVersion, ItemType};
use lump_wire::{ROOT_TAG, TAG_LEN};

/// GUID stored in every table built by [`TableBuilder::new`].
pub const SAMPLE_GUID: [u8; 16] = [
    0x67, 0x45, 0x23, 0x01, 0xab, 0x89, 0xef, 0xcd, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef,
];

/// Erased EEPROM byte.
pub const FILL: u8 = 0xFF;

/// One lump: NUL-padded tag, `u16` LE payload length, payload.
///
/// # Panics
///
/// If `tag` is longer than 8 bytes or `payload` longer than `u16::MAX`.
#[must_use]
pub fn lump(tag: &str, payload: &[u8]) -> Vec<u8> {
    let mut raw = [0u8; TAG_LEN];
    raw[..tag.len()].copy_from_slice(tag.as_bytes());
    lump_raw(raw, payload)
}

/// Like [`lump`] but with the tag bytes exactly as given.
///
/// # Panics
///
/// If `payload` is longer than `u16::MAX`.
#[must_use]
pub fn lump_raw(tag: [u8; TAG_LEN], payload: &[u8]) -> Vec<u8> {
    let size = u16::try_from(payload.len()).expect("payload fits u16");
    let mut buf = tag.to_vec();
    buf.extend_from_slice(&size.to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Root container holding `children` back to back.
#[must_use]
pub fn root(children: &[Vec<u8>]) -> Vec<u8> {
    lump_raw(ROOT_TAG, &children.concat())
}

/// Overwrite the `u16` size field of the lump header starting at `offset`.
pub fn patch_size(image: &mut [u8], offset: usize, size: u16) {
    image[offset + TAG_LEN..offset + TAG_LEN + 2].copy_from_slice(&size.to_le_bytes());
}

/// Append `n` bytes of erased fill.
#[must_use]
pub fn with_fill(mut image: Vec<u8>, n: usize) -> Vec<u8> {
    image.resize(image.len() + n, FILL);
    image
}

fn node_name(name: &str) -> [u8; NODE_NAME_LEN] {
    let mut raw = [0u8; NODE_NAME_LEN];
    raw[..name.len()].copy_from_slice(name.as_bytes());
    raw
}

/// `NetU002` lump.
#[must_use]
pub fn network_v2(name: &str, mac: [u8; 6], ip: [u8; 4], port: u16) -> Vec<u8> {
    let mut payload = node_name(name).to_vec();
    payload.extend_from_slice(&mac);
    payload.extend_from_slice(&ip);
    payload.extend_from_slice(&port.to_le_bytes());
    lump("NetU002", &payload)
}

/// `NetU003` lump.
#[must_use]
pub fn network_v3(name: &str, mac: [u8; 6], port: u16) -> Vec<u8> {
    let mut payload = node_name(name).to_vec();
    payload.extend_from_slice(&mac);
    payload.extend_from_slice(&port.to_le_bytes());
    lump("NetU003", &payload)
}

/// `Sson001` lump.
#[must_use]
pub fn session_v1(ip: [u8; 4], port: u16) -> Vec<u8> {
    let mut payload = ip.to_vec();
    payload.extend_from_slice(&port.to_le_bytes());
    lump("Sson001", &payload)
}

/// `Sson002` lump.
#[must_use]
pub fn session_v2(ip: [u8; 4], port: u16, token: [u8; 16]) -> Vec<u8> {
    let mut payload = ip.to_vec();
    payload.extend_from_slice(&port.to_le_bytes());
    payload.extend_from_slice(&token);
    lump("Sson002", &payload)
}

/// `ENDEND1` lump.
#[must_use]
pub fn end_marker() -> Vec<u8> {
    lump("ENDEND1", &[])
}

/// Builder for a `DECS0xx` lump.
///
/// ```rust
/// use lump_tests::fixtures::TableBuilder;
/// use lump_types::{DecodersVersion, ItemType};
///
/// let table = TableBuilder::new(DecodersVersion::V020)
///     .group(ItemType::Output, &[(0, vec![4, 0x80])])
///     .build();
/// assert_eq!(&table[..7], b"DECS020");
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder {
    tag: String,
    payload: Vec<u8>,
    terminate: bool,
}

impl TableBuilder {
    #[must_use]
    pub fn new(version: DecodersVersion) -> Self {
        Self::with_tag(version.tag())
    }

    /// A table under an arbitrary tag, for registry tests.
    #[must_use]
    pub fn with_tag(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            payload: SAMPLE_GUID.to_vec(),
            terminate: true,
        }
    }

    /// One type group: type byte, quantity, then `slot + record` per item.
    ///
    /// # Panics
    ///
    /// If more than 255 items are given.
    #[must_use]
    pub fn group(self, family: ItemType, items: &[(u8, Vec<u8>)]) -> Self {
        self.raw_group(family.wire_id(), items)
    }

    /// Like [`group`](Self::group) with an arbitrary type byte.
    ///
    /// # Panics
    ///
    /// If more than 255 items are given.
    #[must_use]
    pub fn raw_group(mut self, type_byte: u8, items: &[(u8, Vec<u8>)]) -> Self {
        self.payload.push(type_byte);
        self.payload.push(u8::try_from(items.len()).expect("quantity fits u8"));
        for (slot, record) in items {
            self.payload.push(*slot);
            self.payload.extend_from_slice(record);
        }
        self
    }

    /// Append bytes verbatim.
    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.payload.extend_from_slice(bytes);
        self
    }

    /// Leave off the terminator byte.
    #[must_use]
    pub fn unterminated(mut self) -> Self {
        self.terminate = false;
        self
    }

    /// Payload bytes, terminator included unless disabled.
    #[must_use]
    pub fn payload(&self) -> Vec<u8> {
        let mut payload = self.payload.clone();
        if self.terminate {
            payload.push(ITEM_TERMINATOR);
        }
        payload
    }

    /// The complete lump, header included.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        lump(&self.tag, &self.payload())
    }
}

// ── Item records (bytes after the slot) ───────────────────────────────────────

#[must_use]
pub fn output(pin: u8, flags: u8) -> Vec<u8> {
    vec![pin, flags]
}

#[must_use]
pub fn servo(
    pin: u8,
    flags: u8,
    power_pin: u8,
    frog_pin: u8,
    start: u8,
    end: u8,
    ticks: u8,
) -> Vec<u8> {
    vec![pin, flags, power_pin, frog_pin, start, end, ticks]
}

#[must_use]
pub fn sensor_v019(pin: u8, flags: u8, activate_ms: u16, deactivate_ms: u16) -> Vec<u8> {
    let mut record = vec![pin, flags];
    record.extend_from_slice(&activate_ms.to_le_bytes());
    record.extend_from_slice(&deactivate_ms.to_le_bytes());
    record
}

#[must_use]
pub fn turntable_v018(
    pin: u8,
    flags: u8,
    flip: u8,
    sensors: [u8; 2],
    tracks: [u8; 2],
    power: u8,
) -> Vec<u8> {
    vec![
        pin, flags, flip, sensors[0], sensors[1], tracks[0], tracks[1], power,
    ]
}

#[must_use]
pub fn quad_v020(
    pin: u8,
    flags: u8,
    flip_ms: u16,
    track_a: [u8; 2],
    track_b: [u8; 2],
) -> Vec<u8> {
    let mut record = vec![pin, flags];
    record.extend_from_slice(&flip_ms.to_le_bytes());
    record.extend_from_slice(&track_a);
    record.extend_from_slice(&track_b);
    record
}

/// A current-format image covering every lump kind and item family:
///
/// ```text
/// Bcs0008
/// ├── NetU003   "yard-east"
/// ├── Sson002   10.0.0.2:1883
/// ├── DECS020   output ×2, sensor, servo, turntable, quad inverter
/// └── ENDEND1
/// ```
#[must_use]
pub fn sample_image() -> Vec<u8> {
    let table = TableBuilder::new(DecodersVersion::V020)
        .group(
            ItemType::Output,
            &[(0, output(4, 0x80)), (1, output(5, 0x81))],
        )
        .group(ItemType::Sensor, &[(2, sensor_v019(6, 0x01, 250, 1500))])
        .group(
            ItemType::ServoTurnout,
            &[(3, servo(12, 0x88, 128, 14, 10, 190, 5))],
        )
        .group(
            ItemType::TurntableAutoInverter,
            &[(4, turntable_v018(20, 0x80, 3, [21, 22], [23, 24], 25))],
        )
        .group(
            ItemType::QuadInverter,
            &[(5, quad_v020(30, 0x80, 750, [31, 32], [33, 34]))],
        )
        .build();

    root(&[
        network_v3("yard-east", [0x02, 0, 0, 0x12, 0x34, 0x56], 1883),
        session_v2([10, 0, 0, 2], 1883, SAMPLE_GUID),
        table,
        end_marker(),
    ])
}

/// Decode a hex literal, ignoring whitespace.
///
/// # Panics
///
/// If the literal is not valid hex.
#[must_use]
pub fn from_hex(literal: &str) -> Vec<u8> {
    let compact: String = literal.split_whitespace().collect();
    hex::decode(compact).expect("valid hex literal")
}
