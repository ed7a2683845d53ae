use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::flags::{DecoderFlags, InverterFlags};

/// Quad inverter, first layout: one-byte flip interval.
///
/// Drives two pairs of relays that swap the polarity of track A and B.
///
/// ```text
/// pin │ flags │ flip_interval │ track_a_pins[2] │ track_b_pins[2]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadInverterV019 {
  pub pin: u8,
  pub flags: InverterFlags,
  pub flip_interval: u8,
  pub track_a_pins: [u8; 2],
  pub track_b_pins: [u8; 2],
}

impl QuadInverterV019 {
  pub const SIZE: usize = 7;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let pin = cursor.read_u8()?;
    let flags = DecoderFlags::read_from(cursor)?.into();
    Ok(Self {
      pin,
      flags,
      flip_interval: cursor.read_u8()?,
      track_a_pins: cursor.read_array()?,
      track_b_pins: cursor.read_array()?,
    })
  }
}

/// Quad inverter with the flip interval widened to milliseconds.
///
/// ```text
/// pin │ flags │ flip_interval_ms (u16 LE) │ track_a_pins[2] │ track_b_pins[2]
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuadInverterV020 {
  pub pin: u8,
  pub flags: InverterFlags,
  pub flip_interval_ms: u16,
  pub track_a_pins: [u8; 2],
  pub track_b_pins: [u8; 2],
}

impl QuadInverterV020 {
  pub const SIZE: usize = 8;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let pin = cursor.read_u8()?;
    let flags = DecoderFlags::read_from(cursor)?.into();
    Ok(Self {
      pin,
      flags,
      flip_interval_ms: cursor.read_u16_le()?,
      track_a_pins: cursor.read_array()?,
      track_b_pins: cursor.read_array()?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn v019_layout() {
    let buf = [2, 0x02, 10, 40, 41, 42, 43];
    let mut cursor = ByteCursor::new(&buf);
    let q = QuadInverterV019::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), QuadInverterV019::SIZE);
    assert_eq!(q.flip_interval, 10);
    assert_eq!(q.track_a_pins, [40, 41]);
    assert_eq!(q.track_b_pins, [42, 43]);
    assert!(q.flags.ignore_saved_state);
  }

  #[test]
  fn v020_wide_interval() {
    let buf = [2, 0x80, 0xFA, 0x00, 40, 41, 42, 43];
    let mut cursor = ByteCursor::new(&buf);
    let q = QuadInverterV020::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), QuadInverterV020::SIZE);
    assert_eq!(q.flip_interval_ms, 250);
    assert_eq!(q.track_b_pins, [42, 43]);
    assert!(q.flags.active);
  }
}
