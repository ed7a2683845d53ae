//! Sensor decoders, one struct per on-disk layout.
//!
//! The delay fields are where the sensor layout kept changing:
//!
//! ```text
//! ┌──────┬──────┬─────────────────────────────────────────────────────┐
//! │ Ver  │ Size │ After pin + flags                                   │
//! ├──────┼──────┼─────────────────────────────────────────────────────┤
//! │ 015  │ 2    │ (nothing)                                           │
//! │ 016  │ 4    │ activate u8 s, deactivate u8 s                      │
//! │ 017  │ 7    │ start u8 s, activate u16 ms, deactivate u16 ms      │
//! │ 019  │ 6    │ activate u16 ms, deactivate u16 ms                  │
//! └──────┴──────┴─────────────────────────────────────────────────────┘
//! ```
//!
//! Versions 018 and 020 reuse the previous layout.

use std::time::Duration;

use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::flags::{DecoderFlags, SensorFlags};

fn read_base(cursor: &mut ByteCursor<'_>) -> Result<(u8, SensorFlags), TypeError> {
  let pin = cursor.read_u8()?;
  let flags = DecoderFlags::read_from(cursor)?.into();
  Ok((pin, flags))
}

/// Sensor with no debounce configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorV015 {
  pub pin: u8,
  pub flags: SensorFlags,
}

impl SensorV015 {
  pub const SIZE: usize = 2;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let (pin, flags) = read_base(cursor)?;
    Ok(Self { pin, flags })
  }
}

/// Sensor with whole-second activate/deactivate delays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorV016 {
  pub pin: u8,
  pub flags: SensorFlags,
  pub activate_delay_secs: u8,
  pub deactivate_delay_secs: u8,
}

impl SensorV016 {
  pub const SIZE: usize = 4;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let (pin, flags) = read_base(cursor)?;
    Ok(Self {
      pin,
      flags,
      activate_delay_secs: cursor.read_u8()?,
      deactivate_delay_secs: cursor.read_u8()?,
    })
  }

  #[must_use]
  pub fn activate_delay(&self) -> Duration {
    Duration::from_secs(u64::from(self.activate_delay_secs))
  }

  #[must_use]
  pub fn deactivate_delay(&self) -> Duration {
    Duration::from_secs(u64::from(self.deactivate_delay_secs))
  }
}

/// Sensor with a start-up delay and millisecond debounce delays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorV017 {
  pub pin: u8,
  pub flags: SensorFlags,
  pub start_delay_secs: u8,
  pub activate_delay_ms: u16,
  pub deactivate_delay_ms: u16,
}

impl SensorV017 {
  pub const SIZE: usize = 7;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let (pin, flags) = read_base(cursor)?;
    Ok(Self {
      pin,
      flags,
      start_delay_secs: cursor.read_u8()?,
      activate_delay_ms: cursor.read_u16_le()?,
      deactivate_delay_ms: cursor.read_u16_le()?,
    })
  }

  #[must_use]
  pub fn start_delay(&self) -> Duration {
    Duration::from_secs(u64::from(self.start_delay_secs))
  }

  #[must_use]
  pub fn activate_delay(&self) -> Duration {
    Duration::from_millis(u64::from(self.activate_delay_ms))
  }

  #[must_use]
  pub fn deactivate_delay(&self) -> Duration {
    Duration::from_millis(u64::from(self.deactivate_delay_ms))
  }
}

/// Current sensor layout: millisecond delays, start delay dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensorV019 {
  pub pin: u8,
  pub flags: SensorFlags,
  pub activate_delay_ms: u16,
  pub deactivate_delay_ms: u16,
}

impl SensorV019 {
  pub const SIZE: usize = 6;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let (pin, flags) = read_base(cursor)?;
    Ok(Self {
      pin,
      flags,
      activate_delay_ms: cursor.read_u16_le()?,
      deactivate_delay_ms: cursor.read_u16_le()?,
    })
  }

  #[must_use]
  pub fn activate_delay(&self) -> Duration {
    Duration::from_millis(u64::from(self.activate_delay_ms))
  }

  #[must_use]
  pub fn deactivate_delay(&self) -> Duration {
    Duration::from_millis(u64::from(self.deactivate_delay_ms))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn v015_pin_and_flags_only() {
    let buf = [5, 0x01 | 0x80];
    let mut cursor = ByteCursor::new(&buf);
    let s = SensorV015::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), SensorV015::SIZE);
    assert_eq!(s.pin, 5);
    assert!(s.flags.pull_up);
    assert!(s.flags.active);
    assert!(!s.flags.inverted);
  }

  #[test]
  fn v016_delays_in_seconds() {
    let buf = [6, 0x02, 3, 9];
    let mut cursor = ByteCursor::new(&buf);
    let s = SensorV016::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), SensorV016::SIZE);
    assert!(s.flags.inverted);
    assert_eq!(s.activate_delay(), Duration::from_secs(3));
    assert_eq!(s.deactivate_delay(), Duration::from_secs(9));
  }

  #[test]
  fn v017_start_delay_and_millis() {
    // start=2s, activate=0x01F4 (500ms), deactivate=0x03E8 (1000ms)
    let buf = [7, 0x00, 2, 0xF4, 0x01, 0xE8, 0x03];
    let mut cursor = ByteCursor::new(&buf);
    let s = SensorV017::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), SensorV017::SIZE);
    assert_eq!(s.start_delay(), Duration::from_secs(2));
    assert_eq!(s.activate_delay_ms, 500);
    assert_eq!(s.deactivate_delay(), Duration::from_millis(1000));
  }

  #[test]
  fn v019_drops_start_delay() {
    let buf = [8, 0x40, 0x32, 0x00, 0x64, 0x00];
    let mut cursor = ByteCursor::new(&buf);
    let s = SensorV019::read(&mut cursor).unwrap();
    assert_eq!(cursor.offset(), SensorV019::SIZE);
    assert!(s.flags.remote_active);
    assert_eq!(s.activate_delay_ms, 50);
    assert_eq!(s.deactivate_delay_ms, 100);
  }

  #[test]
  fn v017_truncated_inside_delay() {
    let buf = [7, 0x00, 2, 0xF4];
    let mut cursor = ByteCursor::new(&buf);
    assert!(matches!(
      SensorV017::read(&mut cursor),
      Err(TypeError::Wire(_))
    ));
  }
}
