use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::item_type::{ItemKind, ItemType};
use crate::output::OutputDecoder;
use crate::quad_inverter::{QuadInverterV019, QuadInverterV020};
use crate::sensor::{SensorV015, SensorV016, SensorV017, SensorV019};
use crate::servo_turnout::ServoTurnoutDecoder;
use crate::turntable::{TurntableInverterV016, TurntableInverterV018};

/// One decoded hardware decoder record, in the layout its table version
/// dictated.
///
/// Each variant carries only the fields that layout stores. Dispatch from
/// an [`ItemKind`] to the right reader happens in [`DecoderItem::read`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecoderItem {
  Output(OutputDecoder),
  SensorV015(SensorV015),
  SensorV016(SensorV016),
  SensorV017(SensorV017),
  SensorV019(SensorV019),
  ServoTurnout(ServoTurnoutDecoder),
  TurntableV016(TurntableInverterV016),
  TurntableV018(TurntableInverterV018),
  QuadInverterV019(QuadInverterV019),
  QuadInverterV020(QuadInverterV020),
}

impl DecoderItem {
  /// Read one record of the given layout.
  ///
  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(kind: ItemKind, cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    Ok(match kind {
      ItemKind::Output => Self::Output(OutputDecoder::read(cursor)?),
      ItemKind::SensorV015 => Self::SensorV015(SensorV015::read(cursor)?),
      ItemKind::SensorV016 => Self::SensorV016(SensorV016::read(cursor)?),
      ItemKind::SensorV017 => Self::SensorV017(SensorV017::read(cursor)?),
      ItemKind::SensorV019 => Self::SensorV019(SensorV019::read(cursor)?),
      ItemKind::ServoTurnout => Self::ServoTurnout(ServoTurnoutDecoder::read(cursor)?),
      ItemKind::TurntableV016 => Self::TurntableV016(TurntableInverterV016::read(cursor)?),
      ItemKind::TurntableV018 => Self::TurntableV018(TurntableInverterV018::read(cursor)?),
      ItemKind::QuadInverterV019 => Self::QuadInverterV019(QuadInverterV019::read(cursor)?),
      ItemKind::QuadInverterV020 => Self::QuadInverterV020(QuadInverterV020::read(cursor)?),
    })
  }

  #[must_use]
  pub fn kind(&self) -> ItemKind {
    match self {
      Self::Output(_) => ItemKind::Output,
      Self::SensorV015(_) => ItemKind::SensorV015,
      Self::SensorV016(_) => ItemKind::SensorV016,
      Self::SensorV017(_) => ItemKind::SensorV017,
      Self::SensorV019(_) => ItemKind::SensorV019,
      Self::ServoTurnout(_) => ItemKind::ServoTurnout,
      Self::TurntableV016(_) => ItemKind::TurntableV016,
      Self::TurntableV018(_) => ItemKind::TurntableV018,
      Self::QuadInverterV019(_) => ItemKind::QuadInverterV019,
      Self::QuadInverterV020(_) => ItemKind::QuadInverterV020,
    }
  }

  /// The pin byte every layout starts with.
  #[must_use]
  pub fn pin(&self) -> u8 {
    match self {
      Self::Output(d) => d.pin,
      Self::SensorV015(d) => d.pin,
      Self::SensorV016(d) => d.pin,
      Self::SensorV017(d) => d.pin,
      Self::SensorV019(d) => d.pin,
      Self::ServoTurnout(d) => d.pin,
      Self::TurntableV016(d) => d.pin,
      Self::TurntableV018(d) => d.pin,
      Self::QuadInverterV019(d) => d.pin,
      Self::QuadInverterV020(d) => d.pin,
    }
  }
}

/// A decoder record together with its slot in the owning table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
  pub slot: u8,
  pub decoder: DecoderItem,
}

impl Item {
  /// Read the slot byte followed by a record of the given layout.
  ///
  /// Consumes `1 + kind.size()` bytes.
  ///
  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(kind: ItemKind, cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let slot = cursor.read_u8()?;
    let decoder = DecoderItem::read(kind, cursor)?;
    Ok(Self { slot, decoder })
  }

  /// Payload bytes of this item, slot excluded.
  #[must_use]
  pub fn size(&self) -> usize {
    self.decoder.kind().size()
  }

  #[must_use]
  pub fn is_deprecated(&self) -> bool {
    self.decoder.kind().is_deprecated()
  }

  #[must_use]
  pub fn item_type(&self) -> ItemType {
    self.decoder.kind().item_type()
  }
}
