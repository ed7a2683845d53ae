//! Field views of decoded items, shared by `inspect` and `dump`.

use lump_types::flags::{InverterFlags, OutputFlags, SensorFlags, ServoFlags};
use lump_types::DecoderItem;
use serde_json::{Map, Value, json};

/// Names of the set flags, in bit order.
fn set_flags(flags: &[(&'static str, bool)]) -> Vec<&'static str> {
    flags
        .iter()
        .filter_map(|&(name, set)| set.then_some(name))
        .collect()
}

fn output_flags(f: OutputFlags) -> Vec<&'static str> {
    set_flags(&[
        ("inverted_operation", f.inverted_operation),
        ("ignore_saved_state", f.ignore_saved_state),
        ("activate_on_power_up", f.activate_on_power_up),
        ("remote_active", f.remote_active),
        ("active", f.active),
    ])
}

fn servo_flags(f: ServoFlags) -> Vec<&'static str> {
    set_flags(&[
        ("inverted_operation", f.inverted_operation),
        ("ignore_saved_state", f.ignore_saved_state),
        ("activate_on_power_up", f.activate_on_power_up),
        ("inverted_frog", f.inverted_frog),
        ("inverted_power", f.inverted_power),
        ("remote_active", f.remote_active),
        ("active", f.active),
    ])
}

fn sensor_flags(f: SensorFlags) -> Vec<&'static str> {
    set_flags(&[
        ("pull_up", f.pull_up),
        ("inverted", f.inverted),
        ("remote_active", f.remote_active),
        ("active", f.active),
    ])
}

fn inverter_flags(f: InverterFlags) -> Vec<&'static str> {
    set_flags(&[
        ("inverted_operation", f.inverted_operation),
        ("ignore_saved_state", f.ignore_saved_state),
        ("active", f.active),
    ])
}

/// Every decoded field of `item` except the slot, as a JSON object.
///
/// Keys follow the record's field order. Optional pins are `null` when the
/// sentinel was stored; servo records also carry their derived `range` and
/// `total_time`.
pub fn item_fields(item: &DecoderItem) -> Value {
    match item {
        DecoderItem::Output(o) => json!({
            "pin": o.pin,
            "flags": output_flags(o.flags),
        }),
        DecoderItem::SensorV015(s) => json!({
            "pin": s.pin,
            "flags": sensor_flags(s.flags),
        }),
        DecoderItem::SensorV016(s) => json!({
            "pin": s.pin,
            "flags": sensor_flags(s.flags),
            "activate_delay_secs": s.activate_delay_secs,
            "deactivate_delay_secs": s.deactivate_delay_secs,
        }),
        DecoderItem::SensorV017(s) => json!({
            "pin": s.pin,
            "flags": sensor_flags(s.flags),
            "start_delay_secs": s.start_delay_secs,
            "activate_delay_ms": s.activate_delay_ms,
            "deactivate_delay_ms": s.deactivate_delay_ms,
        }),
        DecoderItem::SensorV019(s) => json!({
            "pin": s.pin,
            "flags": sensor_flags(s.flags),
            "activate_delay_ms": s.activate_delay_ms,
            "deactivate_delay_ms": s.deactivate_delay_ms,
        }),
        DecoderItem::ServoTurnout(s) => json!({
            "pin": s.pin,
            "flags": servo_flags(s.flags),
            "power_pin": s.power_pin,
            "frog_pin": s.frog_pin,
            "start_pos": s.start_pos,
            "end_pos": s.end_pos,
            "ticks": s.ticks,
            "range": s.range(),
            "total_time": s.total_time(),
        }),
        DecoderItem::TurntableV016(t) => json!({
            "pin": t.pin,
            "flags": inverter_flags(t.flags),
            "sensor_a": t.sensor_a,
            "sensor_b": t.sensor_b,
            "track_a_pin": t.track_a_pin,
            "track_b_pin": t.track_b_pin,
            "turntable_power_pin": t.turntable_power_pin,
        }),
        DecoderItem::TurntableV018(t) => json!({
            "pin": t.pin,
            "flags": inverter_flags(t.flags),
            "flip_interval": t.flip_interval,
            "sensor_a": t.sensor_a,
            "sensor_b": t.sensor_b,
            "track_a_pin": t.track_a_pin,
            "track_b_pin": t.track_b_pin,
            "turntable_power_pin": t.turntable_power_pin,
        }),
        DecoderItem::QuadInverterV019(q) => json!({
            "pin": q.pin,
            "flags": inverter_flags(q.flags),
            "flip_interval": q.flip_interval,
            "track_a_pins": q.track_a_pins,
            "track_b_pins": q.track_b_pins,
        }),
        DecoderItem::QuadInverterV020(q) => json!({
            "pin": q.pin,
            "flags": inverter_flags(q.flags),
            "flip_interval_ms": q.flip_interval_ms,
            "track_a_pins": q.track_a_pins,
            "track_b_pins": q.track_b_pins,
        }),
    }
}

/// One-line `key=value` rendering of a field object, for `inspect`.
pub fn inline(fields: &Value) -> String {
    let Some(map) = fields.as_object() else {
        return fields.to_string();
    };
    inline_map(map)
}

fn inline_map(map: &Map<String, Value>) -> String {
    map.iter()
        .map(|(key, value)| match value {
            Value::Null => format!("{key}=-"),
            Value::Array(flags) if key == "flags" => {
                let names: Vec<_> = flags.iter().filter_map(Value::as_str).collect();
                if names.is_empty() {
                    format!("{key}=none")
                } else {
                    format!("{key}={}", names.join("|"))
                }
            }
            other => format!("{key}={other}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
