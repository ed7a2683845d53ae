use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::flags::{DecoderFlags, InverterFlags};

/// Turntable auto-inverter, original layout (7 bytes, no flip interval).
///
/// Watches two sensor decoders and flips track polarity when the bridge
/// crosses. `sensor_a` and `sensor_b` are slots of sensor items in the same
/// decoders table.
///
/// ```text
/// pin │ flags │ sensor_a │ sensor_b │ track_a_pin │ track_b_pin │ turntable_power_pin
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurntableInverterV016 {
  pub pin: u8,
  pub flags: InverterFlags,
  pub sensor_a: u8,
  pub sensor_b: u8,
  pub track_a_pin: u8,
  pub track_b_pin: u8,
  pub turntable_power_pin: u8,
}

impl TurntableInverterV016 {
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
      sensor_a: cursor.read_u8()?,
      sensor_b: cursor.read_u8()?,
      track_a_pin: cursor.read_u8()?,
      track_b_pin: cursor.read_u8()?,
      turntable_power_pin: cursor.read_u8()?,
    })
  }
}

/// Turntable auto-inverter with a flip interval (8 bytes).
///
/// The interval byte sits right after the flags, ahead of the sensors.
///
/// ```text
/// pin │ flags │ flip_interval │ sensor_a │ sensor_b │ track_a_pin │ track_b_pin │ turntable_power_pin
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurntableInverterV018 {
  pub pin: u8,
  pub flags: InverterFlags,
  pub flip_interval: u8,
  pub sensor_a: u8,
  pub sensor_b: u8,
  pub track_a_pin: u8,
  pub track_b_pin: u8,
  pub turntable_power_pin: u8,
}

impl TurntableInverterV018 {
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
      flip_interval: cursor.read_u8()?,
      sensor_a: cursor.read_u8()?,
      sensor_b: cursor.read_u8()?,
      track_a_pin: cursor.read_u8()?,
      track_b_pin: cursor.read_u8()?,
      turntable_power_pin: cursor.read_u8()?,
    })
  }
}
