use lump_wire::{ByteCursor, WireError};

/// Raw per-decoder flags byte.
///
/// Every decoder layout stores one flags byte right after its pin. The same
/// byte means different things depending on the decoder family, so the bit
/// constants below overlap: sensors reuse bits 0 and 1 for their own
/// meanings.
///
/// ```text
/// ┌──────┬──────────────────────┬──────────────────────────────┐
/// │ Bit  │ Name                 │ Families                     │
/// ├──────┼──────────────────────┼──────────────────────────────┤
/// │ 0x01 │ INVERTED_OPERATION   │ output, servo, inverters     │
/// │ 0x02 │ IGNORE_SAVED_STATE   │ output, servo, inverters     │
/// │ 0x04 │ ACTIVATE_ON_POWER_UP │ output, servo                │
/// │ 0x08 │ INVERTED_FROG        │ servo                        │
/// │ 0x10 │ INVERTED_POWER       │ servo                        │
/// │ 0x01 │ PULL_UP              │ sensor                       │
/// │ 0x02 │ INVERTED_SENSE       │ sensor                       │
/// │ 0x40 │ REMOTE_ACTIVE        │ output, servo, sensor        │
/// │ 0x80 │ ACTIVE               │ all                          │
/// └──────┴──────────────────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderFlags(u8);

impl DecoderFlags {
  pub const NONE: Self = Self(0);
  pub const INVERTED_OPERATION: Self = Self(0b0000_0001);
  pub const IGNORE_SAVED_STATE: Self = Self(0b0000_0010);
  pub const ACTIVATE_ON_POWER_UP: Self = Self(0b0000_0100);
  pub const INVERTED_FROG: Self = Self(0b0000_1000);
  pub const INVERTED_POWER: Self = Self(0b0001_0000);
  pub const PULL_UP: Self = Self(0b0000_0001);
  pub const INVERTED_SENSE: Self = Self(0b0000_0010);
  pub const REMOTE_ACTIVE: Self = Self(0b0100_0000);
  pub const ACTIVE: Self = Self(0b1000_0000);

  #[must_use]
  pub fn from_raw(raw: u8) -> Self {
    Self(raw)
  }

  #[must_use]
  pub fn raw(self) -> u8 {
    self.0
  }

  /// Whether every bit of `other` is set.
  #[must_use]
  pub fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  /// Read the flags byte from the cursor.
  ///
  /// # Errors
  ///
  /// [`WireError::UnexpectedEndOfData`] if the image is exhausted.
  pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
    Ok(Self(cursor.read_u8()?))
  }
}

/// Flags of an output decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputFlags {
  pub inverted_operation: bool,
  pub ignore_saved_state: bool,
  pub activate_on_power_up: bool,
  pub remote_active: bool,
  pub active: bool,
}

impl From<DecoderFlags> for OutputFlags {
  fn from(f: DecoderFlags) -> Self {
    Self {
      inverted_operation: f.contains(DecoderFlags::INVERTED_OPERATION),
      ignore_saved_state: f.contains(DecoderFlags::IGNORE_SAVED_STATE),
      activate_on_power_up: f.contains(DecoderFlags::ACTIVATE_ON_POWER_UP),
      remote_active: f.contains(DecoderFlags::REMOTE_ACTIVE),
      active: f.contains(DecoderFlags::ACTIVE),
    }
  }
}

/// Flags of a servo turnout: the output set plus frog and power polarity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ServoFlags {
  pub inverted_operation: bool,
  pub ignore_saved_state: bool,
  pub activate_on_power_up: bool,
  pub inverted_frog: bool,
  pub inverted_power: bool,
  pub remote_active: bool,
  pub active: bool,
}

impl From<DecoderFlags> for ServoFlags {
  fn from(f: DecoderFlags) -> Self {
    let base = OutputFlags::from(f);
    Self {
      inverted_operation: base.inverted_operation,
      ignore_saved_state: base.ignore_saved_state,
      activate_on_power_up: base.activate_on_power_up,
      inverted_frog: f.contains(DecoderFlags::INVERTED_FROG),
      inverted_power: f.contains(DecoderFlags::INVERTED_POWER),
      remote_active: base.remote_active,
      active: base.active,
    }
  }
}

/// Flags of a sensor decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SensorFlags {
  pub pull_up: bool,
  pub inverted: bool,
  pub remote_active: bool,
  pub active: bool,
}

impl From<DecoderFlags> for SensorFlags {
  fn from(f: DecoderFlags) -> Self {
    Self {
      pull_up: f.contains(DecoderFlags::PULL_UP),
      inverted: f.contains(DecoderFlags::INVERTED_SENSE),
      remote_active: f.contains(DecoderFlags::REMOTE_ACTIVE),
      active: f.contains(DecoderFlags::ACTIVE),
    }
  }
}

/// Flags shared by the turntable and quad track-polarity inverters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InverterFlags {
  pub inverted_operation: bool,
  pub ignore_saved_state: bool,
  pub active: bool,
}

impl From<DecoderFlags> for InverterFlags {
  fn from(f: DecoderFlags) -> Self {
    Self {
      inverted_operation: f.contains(DecoderFlags::INVERTED_OPERATION),
      ignore_saved_state: f.contains(DecoderFlags::IGNORE_SAVED_STATE),
      active: f.contains(DecoderFlags::ACTIVE),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn contains_checks_every_bit() {
    let f = DecoderFlags::from_raw(0b1000_0101);
    assert!(f.contains(DecoderFlags::ACTIVE));
    assert!(f.contains(DecoderFlags::INVERTED_OPERATION));
    assert!(f.contains(DecoderFlags::ACTIVATE_ON_POWER_UP));
    assert!(!f.contains(DecoderFlags::IGNORE_SAVED_STATE));
    assert!(f.contains(DecoderFlags::NONE));
  }

  #[test]
  fn output_flags_from_byte() {
    let f = OutputFlags::from(DecoderFlags::from_raw(0x02 | 0x40));
    assert_eq!(
      f,
      OutputFlags {
        ignore_saved_state: true,
        remote_active: true,
        ..OutputFlags::default()
      }
    );
  }

  #[test]
  fn servo_flags_include_frog_and_power() {
    let f = ServoFlags::from(DecoderFlags::from_raw(0x08 | 0x10 | 0x80));
    assert!(f.inverted_frog);
    assert!(f.inverted_power);
    assert!(f.active);
    assert!(!f.inverted_operation);
  }

  #[test]
  fn sensor_bits_reuse_low_positions() {
    let f = SensorFlags::from(DecoderFlags::from_raw(0x03));
    assert!(f.pull_up);
    assert!(f.inverted);
    assert!(!f.active);
  }

  #[test]
  fn inverter_ignores_servo_bits() {
    let f = InverterFlags::from(DecoderFlags::from_raw(0xFF));
    assert_eq!(
      f,
      InverterFlags {
        inverted_operation: true,
        ignore_saved_state: true,
        active: true,
      }
    );
  }
}
