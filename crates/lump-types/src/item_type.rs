use std::fmt;

use crate::error::TypeError;
use crate::output::OutputDecoder;
use crate::quad_inverter::{QuadInverterV019, QuadInverterV020};
use crate::sensor::{SensorV015, SensorV016, SensorV017, SensorV019};
use crate::servo_turnout::ServoTurnoutDecoder;
use crate::turntable::{TurntableInverterV016, TurntableInverterV018};

/// Item type byte that ends a decoders table.
pub const ITEM_TERMINATOR: u8 = 0;

/// Logical hardware decoder family, as written in the type byte of a
/// decoders-table group.
///
/// ```text
/// ┌──────┬─────────────────────────┐
/// │ Wire │ Variant                 │
/// ├──────┼─────────────────────────┤
/// │ 0x00 │ (terminator)            │
/// │ 0x01 │ Output                  │
/// │ 0x02 │ Sensor                  │
/// │ 0x03 │ ServoTurnout            │
/// │ 0x04 │ TurntableAutoInverter   │
/// │ 0x05 │ QuadInverter            │
/// └──────┴─────────────────────────┘
/// ```
///
/// The numbering is shared by all versions; which families a version
/// accepts, and with what layout, is decided by [`DecodersVersion`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
  Output,
  Sensor,
  ServoTurnout,
  TurntableAutoInverter,
  QuadInverter,
}

impl ItemType {
  pub const ALL: [Self; 5] = [
    Self::Output,
    Self::Sensor,
    Self::ServoTurnout,
    Self::TurntableAutoInverter,
    Self::QuadInverter,
  ];

  #[must_use]
  pub fn wire_id(self) -> u8 {
    match self {
      Self::Output => 0x01,
      Self::Sensor => 0x02,
      Self::ServoTurnout => 0x03,
      Self::TurntableAutoInverter => 0x04,
      Self::QuadInverter => 0x05,
    }
  }

  #[must_use]
  pub fn from_wire_id(id: u8) -> Option<Self> {
    match id {
      0x01 => Some(Self::Output),
      0x02 => Some(Self::Sensor),
      0x03 => Some(Self::ServoTurnout),
      0x04 => Some(Self::TurntableAutoInverter),
      0x05 => Some(Self::QuadInverter),
      _ => None,
    }
  }

  #[must_use]
  pub fn name(self) -> &'static str {
    match self {
      Self::Output => "output",
      Self::Sensor => "sensor",
      Self::ServoTurnout => "servo-turnout",
      Self::TurntableAutoInverter => "turntable-inverter",
      Self::QuadInverter => "quad-inverter",
    }
  }
}

/// Concrete on-disk item layout: a family plus the schema version of its
/// fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemKind {
  Output,
  SensorV015,
  SensorV016,
  SensorV017,
  SensorV019,
  ServoTurnout,
  TurntableV016,
  TurntableV018,
  QuadInverterV019,
  QuadInverterV020,
}

impl ItemKind {
  /// Bytes the layout occupies after the slot byte.
  #[must_use]
  pub fn size(self) -> usize {
    match self {
      Self::Output => OutputDecoder::SIZE,
      Self::SensorV015 => SensorV015::SIZE,
      Self::SensorV016 => SensorV016::SIZE,
      Self::SensorV017 => SensorV017::SIZE,
      Self::SensorV019 => SensorV019::SIZE,
      Self::ServoTurnout => ServoTurnoutDecoder::SIZE,
      Self::TurntableV016 => TurntableInverterV016::SIZE,
      Self::TurntableV018 => TurntableInverterV018::SIZE,
      Self::QuadInverterV019 => QuadInverterV019::SIZE,
      Self::QuadInverterV020 => QuadInverterV020::SIZE,
    }
  }

  #[must_use]
  pub fn item_type(self) -> ItemType {
    match self {
      Self::Output => ItemType::Output,
      Self::SensorV015 | Self::SensorV016 | Self::SensorV017 | Self::SensorV019 => ItemType::Sensor,
      Self::ServoTurnout => ItemType::ServoTurnout,
      Self::TurntableV016 | Self::TurntableV018 => ItemType::TurntableAutoInverter,
      Self::QuadInverterV019 | Self::QuadInverterV020 => ItemType::QuadInverter,
    }
  }

  /// Superseded layouts that are only read, never written, by current
  /// firmware.
  #[must_use]
  pub fn is_deprecated(self) -> bool {
    matches!(
      self,
      Self::SensorV015
        | Self::SensorV016
        | Self::SensorV017
        | Self::TurntableV016
        | Self::QuadInverterV019
    )
  }
}

/// Schema version of a decoders-table lump, taken from its tag.
///
/// The version decides which item families may appear and which layout
/// each one uses:
///
/// ```text
/// ┌─────────┬────────┬────────┬───────┬───────────┬──────┐
/// │ Tag     │ Output │ Sensor │ Servo │ Turntable │ Quad │
/// ├─────────┼────────┼────────┼───────┼───────────┼──────┤
/// │ DECS015 │ ✓      │ V015   │       │           │      │
/// │ DECS016 │ ✓      │ V016   │ ✓     │ V016      │      │
/// │ DECS017 │ ✓      │ V017   │ ✓     │ V016      │      │
/// │ DECS018 │ ✓      │ V017   │ ✓     │ V018      │      │
/// │ DECS019 │ ✓      │ V019   │ ✓     │ V018      │ V019 │
/// │ DECS020 │ ✓      │ V019   │ ✓     │ V018      │ V020 │
/// └─────────┴────────┴────────┴───────┴───────────┴──────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DecodersVersion {
  V015,
  V016,
  V017,
  V018,
  V019,
  V020,
}

impl DecodersVersion {
  pub const ALL: [Self; 6] = [
    Self::V015,
    Self::V016,
    Self::V017,
    Self::V018,
    Self::V019,
    Self::V020,
  ];

  #[must_use]
  pub fn tag(self) -> &'static str {
    match self {
      Self::V015 => "DECS015",
      Self::V016 => "DECS016",
      Self::V017 => "DECS017",
      Self::V018 => "DECS018",
      Self::V019 => "DECS019",
      Self::V020 => "DECS020",
    }
  }

  #[must_use]
  pub fn from_tag(tag: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|v| v.tag() == tag)
  }

  #[must_use]
  pub fn is_deprecated(self) -> bool {
    self != Self::V020
  }

  /// Item layout for `family` in this version, if the version has one.
  #[must_use]
  pub fn layout(self, family: ItemType) -> Option<ItemKind> {
    use DecodersVersion::{V015, V016, V017, V018, V019, V020};

    match (family, self) {
      (ItemType::Output, _) => Some(ItemKind::Output),

      (ItemType::Sensor, V015) => Some(ItemKind::SensorV015),
      (ItemType::Sensor, V016) => Some(ItemKind::SensorV016),
      (ItemType::Sensor, V017 | V018) => Some(ItemKind::SensorV017),
      (ItemType::Sensor, V019 | V020) => Some(ItemKind::SensorV019),

      (ItemType::ServoTurnout, V015) => None,
      (ItemType::ServoTurnout, _) => Some(ItemKind::ServoTurnout),

      (ItemType::TurntableAutoInverter, V015) => None,
      (ItemType::TurntableAutoInverter, V016 | V017) => Some(ItemKind::TurntableV016),
      (ItemType::TurntableAutoInverter, _) => Some(ItemKind::TurntableV018),

      (ItemType::QuadInverter, V019) => Some(ItemKind::QuadInverterV019),
      (ItemType::QuadInverter, V020) => Some(ItemKind::QuadInverterV020),
      (ItemType::QuadInverter, _) => None,
    }
  }

  /// Resolve a group's type byte against this version's item registry.
  ///
  /// The terminator byte is not an item type; callers check for it first.
  ///
  /// # Errors
  ///
  /// [`TypeError::UnknownItemType`] if the byte names no family, or a
  /// family this version does not define.
  pub fn resolve_item(self, tag: u8) -> Result<ItemKind, TypeError> {
    ItemType::from_wire_id(tag)
      .and_then(|family| self.layout(family))
      .ok_or(TypeError::UnknownItemType { version: self, tag })
  }
}

impl fmt::Display for DecodersVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.tag())
  }
}
