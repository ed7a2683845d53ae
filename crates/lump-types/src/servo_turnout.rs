use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::flags::{DecoderFlags, ServoFlags};
use crate::pin::read_optional_pin;

/// Servo-driven turnout with optional frog and power relays.
///
/// ```text
/// ┌────────┬──────┬───────────┬──────────────────────────────────┐
/// │ Offset │ Size │ Name      │ Description                      │
/// ├────────┼──────┼───────────┼──────────────────────────────────┤
/// │ 0      │ 1    │ pin       │ Servo signal pin                 │
/// │ 1      │ 1    │ flags     │ See [`ServoFlags`]               │
/// │ 2      │ 1    │ power_pin │ Optional, 128 = unassigned       │
/// │ 3      │ 1    │ frog_pin  │ Optional, 128 = unassigned       │
/// │ 4      │ 1    │ start_pos │ Closed position                  │
/// │ 5      │ 1    │ end_pos   │ Thrown position                  │
/// │ 6      │ 1    │ ticks     │ Milliseconds per position step   │
/// └────────┴──────┴───────────┴──────────────────────────────────┘
/// ```
///
/// `range` and `total_time` are computed from the stored positions; they
/// are never written to the image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServoTurnoutDecoder {
  pub pin: u8,
  pub flags: ServoFlags,
  pub power_pin: Option<u8>,
  pub frog_pin: Option<u8>,
  pub start_pos: u8,
  pub end_pos: u8,
  pub ticks: u8,
}

impl ServoTurnoutDecoder {
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
      power_pin: read_optional_pin(cursor)?,
      frog_pin: read_optional_pin(cursor)?,
      start_pos: cursor.read_u8()?,
      end_pos: cursor.read_u8()?,
      ticks: cursor.read_u8()?,
    })
  }

  /// Travel between the two positions; negative when the servo sweeps
  /// backwards.
  #[must_use]
  pub fn range(&self) -> i16 {
    i16::from(self.end_pos) - i16::from(self.start_pos)
  }

  /// Time for a full sweep, in ticks' unit (milliseconds).
  #[must_use]
  pub fn total_time(&self) -> i32 {
    i32::from(self.range()) * i32::from(self.ticks)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reads_full_layout() {
    let buf = [9, 0x08 | 0x80, 128, 22, 10, 190, 5];
    let mut cursor = ByteCursor::new(&buf);
    let s = ServoTurnoutDecoder::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), ServoTurnoutDecoder::SIZE);
    assert_eq!(s.pin, 9);
    assert!(s.flags.inverted_frog);
    assert!(s.flags.active);
    assert_eq!(s.power_pin, None);
    assert_eq!(s.frog_pin, Some(22));
    assert_eq!(s.start_pos, 10);
    assert_eq!(s.end_pos, 190);
    assert_eq!(s.ticks, 5);
  }

  #[test]
  fn derived_range_and_total_time() {
    let s = ServoTurnoutDecoder {
      pin: 3,
      flags: ServoFlags::default(),
      power_pin: None,
      frog_pin: None,
      start_pos: 10,
      end_pos: 190,
      ticks: 5,
    };
    assert_eq!(s.range(), 180);
    assert_eq!(s.total_time(), 900);
  }

  #[test]
  fn backwards_sweep_is_negative() {
    let s = ServoTurnoutDecoder {
      pin: 3,
      flags: ServoFlags::default(),
      power_pin: Some(1),
      frog_pin: Some(2),
      start_pos: 255,
      end_pos: 0,
      ticks: 255,
    };
    assert_eq!(s.range(), -255);
    assert_eq!(s.total_time(), -65_025);
  }
}
