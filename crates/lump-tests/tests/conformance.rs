//! Conformance tests: hand-built images for every lump kind and every
//! (version, item family) layout decode to exactly the fields written.
//!
//! Images come from `lump_tests::fixtures`, or from hex literals where the
//! exact byte layout is the point of the test.

use std::net::Ipv4Addr;
use std::time::Duration;

use lump_decoder::StorageDecoder;
use lump_tests::fixtures::{self, SAMPLE_GUID, TableBuilder};
use lump_types::{
    DecoderItem, DecodersTable, DecodersVersion, ItemKind, ItemType, LumpBody, LumpKind,
};

fn decode_single_table(table: &TableBuilder) -> DecodersTable {
    let image = fixtures::root(&[table.build()]);
    let root = StorageDecoder::decode(&image).expect("table image should decode");
    root.lump.children()[0]
        .decoders_table()
        .expect("child is a decoders table")
        .clone()
}

// ── Literal image ─────────────────────────────────────────────────────────────

#[test]
fn literal_image_layout() {
    // Bcs0008 (size 0x20 = 32)
    //   DECS020 (size 0x16 = 22): guid, output group {slot 7: pin 9, active}, 0
    let image = fixtures::from_hex(
        "42637330303038 00 2000
         44454353303230 00 1600
         67452301 ab89efcd 0123456789abcdef
         01 01 07 09 80
         00",
    );
    let root = StorageDecoder::decode(&image).unwrap();
    assert_eq!(root.size(), image.len());

    let table = root.find("DECS020").unwrap().decoders_table().unwrap();
    assert_eq!(table.guid.to_string(), "01234567-89ab-cdef-0123-456789abcdef");
    assert_eq!(table.items.len(), 1);
    let item = &table.items[0];
    assert_eq!(item.slot, 7);
    match &item.decoder {
        DecoderItem::Output(o) => {
            assert_eq!(o.pin, 9);
            assert!(o.flags.active);
            assert!(!o.flags.inverted_operation);
        }
        other => panic!("expected output, got {other:?}"),
    }
}

// ── Sample image ──────────────────────────────────────────────────────────────

#[test]
fn sample_image_round_trip_fields() {
    let image = fixtures::sample_image();
    let root = StorageDecoder::decode(&image).unwrap();
    assert_eq!(root.trailing_bytes, 0);

    let kinds: Vec<_> = root.lump.children().iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        [
            LumpKind::NetworkV3,
            LumpKind::SessionV2,
            LumpKind::Decoders(DecodersVersion::V020),
            LumpKind::EndMarker,
        ]
    );

    match &root.find("NetU003").unwrap().body {
        LumpBody::NetworkV3(n) => {
            assert_eq!(n.node_name, "yard-east");
            assert_eq!(n.mac, [0x02, 0, 0, 0x12, 0x34, 0x56]);
            assert_eq!(n.server_port, 1883);
        }
        other => panic!("expected NetU003 body, got {other:?}"),
    }

    match &root.find("Sson002").unwrap().body {
        LumpBody::SessionV2(s) => {
            assert_eq!(s.server_ip, Ipv4Addr::new(10, 0, 0, 2));
            assert_eq!(s.server_port, 1883);
            assert_eq!(s.config_token.as_bytes(), &SAMPLE_GUID);
        }
        other => panic!("expected Sson002 body, got {other:?}"),
    }

    let table = root.decoders().next().unwrap().decoders_table().unwrap();
    let families: Vec<_> = table.items.iter().map(|i| i.item_type()).collect();
    assert_eq!(
        families,
        [
            ItemType::Output,
            ItemType::Output,
            ItemType::Sensor,
            ItemType::ServoTurnout,
            ItemType::TurntableAutoInverter,
            ItemType::QuadInverter,
        ]
    );
    let slots: Vec<_> = table.items.iter().map(|i| i.slot).collect();
    assert_eq!(slots, [0, 1, 2, 3, 4, 5]);
    assert!(table.items.iter().all(|i| !i.is_deprecated()));
}

#[test]
fn sample_servo_fields() {
    let root = StorageDecoder::decode(&fixtures::sample_image()).unwrap();
    let table = root.decoders().next().unwrap().decoders_table().unwrap();
    match &table.slot(3).unwrap().decoder {
        DecoderItem::ServoTurnout(s) => {
            assert_eq!(s.pin, 12);
            assert_eq!(s.power_pin, None);
            assert_eq!(s.frog_pin, Some(14));
            assert_eq!(s.range(), 180);
            assert_eq!(s.total_time(), 900);
            assert!(s.flags.active);
            assert!(s.flags.inverted_frog);
            assert!(!s.flags.inverted_power);
        }
        other => panic!("expected servo, got {other:?}"),
    }
}

// ── Fixed leaves ──────────────────────────────────────────────────────────────

#[test]
fn deprecated_network_and_session() {
    let image = fixtures::root(&[
        fixtures::network_v2("shed", [1, 2, 3, 4, 5, 6], [192, 168, 4, 1], 7000),
        fixtures::session_v1([192, 168, 4, 1], 7001),
        fixtures::end_marker(),
    ]);
    let root = StorageDecoder::decode(&image).unwrap();

    let net = root.find("NetU002").unwrap();
    assert!(net.is_deprecated());
    match &net.body {
        LumpBody::NetworkV2(n) => {
            assert_eq!(n.node_name, "shed");
            assert_eq!(n.server_ip, Ipv4Addr::new(192, 168, 4, 1));
            assert_eq!(n.server_port, 7000);
        }
        other => panic!("expected NetU002 body, got {other:?}"),
    }

    let session = root.find("Sson001").unwrap();
    assert!(session.is_deprecated());
    assert!(matches!(&session.body, LumpBody::SessionV1(s) if s.server_port == 7001));

    assert!(!root.find("ENDEND1").unwrap().is_deprecated());
}

// ── Per-version item layouts ──────────────────────────────────────────────────

#[test]
fn sensor_layout_per_version() {
    let v015 = decode_single_table(
        &TableBuilder::new(DecodersVersion::V015).group(ItemType::Sensor, &[(0, vec![3, 0x01])]),
    );
    assert_eq!(v015.items[0].decoder.kind(), ItemKind::SensorV015);
    assert!(matches!(&v015.items[0].decoder, DecoderItem::SensorV015(s) if s.flags.pull_up));

    let v016 = decode_single_table(
        &TableBuilder::new(DecodersVersion::V016).group(ItemType::Sensor, &[(0, vec![3, 0, 2, 5])]),
    );
    match &v016.items[0].decoder {
        DecoderItem::SensorV016(s) => {
            assert_eq!(s.activate_delay(), Duration::from_secs(2));
            assert_eq!(s.deactivate_delay(), Duration::from_secs(5));
        }
        other => panic!("expected V016 sensor, got {other:?}"),
    }

    // 017 and 018 share the 7-byte layout.
    for version in [DecodersVersion::V017, DecodersVersion::V018] {
        let record = vec![3, 0x02, 4, 0xf4, 0x01, 0xe8, 0x03];
        let table =
            decode_single_table(&TableBuilder::new(version).group(ItemType::Sensor, &[(9, record)]));
        match &table.items[0].decoder {
            DecoderItem::SensorV017(s) => {
                assert!(s.flags.inverted);
                assert_eq!(s.start_delay(), Duration::from_secs(4));
                assert_eq!(s.activate_delay_ms, 500);
                assert_eq!(s.deactivate_delay_ms, 1000);
            }
            other => panic!("expected V017 sensor in {version}, got {other:?}"),
        }
    }

    // 019 and 020 drop the start delay.
    for version in [DecodersVersion::V019, DecodersVersion::V020] {
        let table = decode_single_table(
            &TableBuilder::new(version)
                .group(ItemType::Sensor, &[(0, fixtures::sensor_v019(3, 0xC0, 20, 30))]),
        );
        match &table.items[0].decoder {
            DecoderItem::SensorV019(s) => {
                assert!(s.flags.active && s.flags.remote_active);
                assert_eq!(s.activate_delay(), Duration::from_millis(20));
                assert_eq!(s.deactivate_delay(), Duration::from_millis(30));
            }
            other => panic!("expected V019 sensor in {version}, got {other:?}"),
        }
    }
}

#[test]
fn turntable_layout_changes_at_018() {
    // Same family byte, different record widths.
    let v016 = decode_single_table(&TableBuilder::new(DecodersVersion::V016).group(
        ItemType::TurntableAutoInverter,
        &[(0, vec![1, 0x80, 2, 3, 4, 5, 6])],
    ));
    match &v016.items[0].decoder {
        DecoderItem::TurntableV016(t) => {
            assert_eq!((t.sensor_a, t.sensor_b), (2, 3));
            assert_eq!((t.track_a_pin, t.track_b_pin), (4, 5));
            assert_eq!(t.turntable_power_pin, 6);
        }
        other => panic!("expected V016 turntable, got {other:?}"),
    }
    assert!(v016.items[0].is_deprecated());

    let v018 = decode_single_table(&TableBuilder::new(DecodersVersion::V018).group(
        ItemType::TurntableAutoInverter,
        &[(0, fixtures::turntable_v018(1, 0x80, 9, [2, 3], [4, 5], 6))],
    ));
    match &v018.items[0].decoder {
        DecoderItem::TurntableV018(t) => {
            assert_eq!(t.flip_interval, 9);
            assert_eq!((t.sensor_a, t.sensor_b), (2, 3));
            assert_eq!(t.turntable_power_pin, 6);
        }
        other => panic!("expected V018 turntable, got {other:?}"),
    }
    assert!(!v018.items[0].is_deprecated());
}

#[test]
fn quad_inverter_layouts() {
    let v019 = decode_single_table(&TableBuilder::new(DecodersVersion::V019).group(
        ItemType::QuadInverter,
        &[(0, vec![1, 0x80, 4, 10, 11, 12, 13])],
    ));
    match &v019.items[0].decoder {
        DecoderItem::QuadInverterV019(q) => {
            assert_eq!(q.flip_interval, 4);
            assert_eq!(q.track_a_pins, [10, 11]);
            assert_eq!(q.track_b_pins, [12, 13]);
        }
        other => panic!("expected V019 quad inverter, got {other:?}"),
    }

    let v020 = decode_single_table(&TableBuilder::new(DecodersVersion::V020).group(
        ItemType::QuadInverter,
        &[(0, fixtures::quad_v020(1, 0x80, 750, [10, 11], [12, 13]))],
    ));
    match &v020.items[0].decoder {
        DecoderItem::QuadInverterV020(q) => {
            assert_eq!(q.flip_interval_ms, 750);
            assert_eq!(q.track_b_pins, [12, 13]);
        }
        other => panic!("expected V020 quad inverter, got {other:?}"),
    }
}

#[test]
fn servo_layout_is_stable_from_016() {
    for version in [
        DecodersVersion::V016,
        DecodersVersion::V017,
        DecodersVersion::V018,
        DecodersVersion::V019,
        DecodersVersion::V020,
    ] {
        let table = decode_single_table(&TableBuilder::new(version).group(
            ItemType::ServoTurnout,
            &[(0, fixtures::servo(8, 0x10, 40, 128, 200, 20, 3))],
        ));
        match &table.items[0].decoder {
            DecoderItem::ServoTurnout(s) => {
                assert_eq!(s.power_pin, Some(40));
                assert_eq!(s.frog_pin, None);
                assert!(s.flags.inverted_power);
                assert_eq!(s.range(), -180);
                assert_eq!(s.total_time(), -540);
            }
            other => panic!("expected servo in {version}, got {other:?}"),
        }
    }
}

#[test]
fn every_layout_consumes_its_declared_size() {
    // One item of every family each version accepts, records of the
    // registry's size, in a single table. Any off-by-one in a reader would
    // shift the following group and fail the decode.
    for version in DecodersVersion::ALL {
        let mut builder = TableBuilder::new(version);
        let mut expected = Vec::new();
        for family in ItemType::ALL {
            if let Some(kind) = version.layout(family) {
                let record = vec![0x80; kind.size()];
                builder = builder.group(family, &[(family.wire_id(), record)]);
                expected.push(kind);
            }
        }
        let table = decode_single_table(&builder);
        let kinds: Vec<_> = table.items.iter().map(|i| i.decoder.kind()).collect();
        assert_eq!(kinds, expected, "layouts for {version}");
    }
}

#[test]
fn multiple_tables_in_order() {
    let image = fixtures::root(&[
        TableBuilder::new(DecodersVersion::V015)
            .group(ItemType::Output, &[(0, fixtures::output(1, 0))])
            .build(),
        TableBuilder::new(DecodersVersion::V020)
            .group(ItemType::Output, &[(0, fixtures::output(2, 0))])
            .build(),
    ]);
    let root = StorageDecoder::decode(&image).unwrap();
    let versions: Vec<_> = root
        .decoders()
        .map(|l| l.decoders_table().unwrap().version)
        .collect();
    assert_eq!(versions, [DecodersVersion::V015, DecodersVersion::V020]);
}
