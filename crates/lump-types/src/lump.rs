use lump_wire::{Guid, HEADER_SIZE};

use crate::item::Item;
use crate::item_type::DecodersVersion;
use crate::lump_type::LumpKind;
use crate::network::{NetworkInfoV2, NetworkInfoV3};
use crate::session::{SessionInfoV1, SessionInfoV2};

/// A decoded lump: header fields plus its typed body.
///
/// Lumps are built bottom-up by the decoder and never change afterwards.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ Lump                                             │
/// │   name           ← tag, NUL-trimmed              │
/// │   declared_size  ← payload bytes, header excluded│
/// │   kind           ← registry entry for the tag    │
/// │   body           ← children, items or fixed data │
/// └──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lump {
  pub name: String,
  pub declared_size: u16,
  pub kind: LumpKind,
  pub body: LumpBody,
}

/// Typed payload of a lump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LumpBody {
  Container(Vec<Lump>),
  NetworkV2(NetworkInfoV2),
  NetworkV3(NetworkInfoV3),
  SessionV1(SessionInfoV1),
  SessionV2(SessionInfoV2),
  Decoders(DecodersTable),
  EndMarker,
}

/// Payload of a `DECS0xx` lump.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodersTable {
  pub version: DecodersVersion,
  pub guid: Guid,
  pub items: Vec<Item>,
}

impl DecodersTable {
  /// Item stored at `slot`, if any.
  #[must_use]
  pub fn slot(&self, slot: u8) -> Option<&Item> {
    self.items.iter().find(|item| item.slot == slot)
  }
}

impl Lump {
  #[must_use]
  pub fn is_deprecated(&self) -> bool {
    self.kind.is_deprecated()
  }

  /// Bytes this lump occupies in its parent: header plus payload.
  #[must_use]
  pub fn total_size(&self) -> usize {
    HEADER_SIZE + usize::from(self.declared_size)
  }

  /// Direct children; empty for leaf lumps.
  #[must_use]
  pub fn children(&self) -> &[Lump] {
    match &self.body {
      LumpBody::Container(children) => children,
      _ => &[],
    }
  }

  /// Items of a decoders table; empty for every other lump.
  #[must_use]
  pub fn items(&self) -> &[Item] {
    match &self.body {
      LumpBody::Decoders(table) => &table.items,
      _ => &[],
    }
  }

  #[must_use]
  pub fn decoders_table(&self) -> Option<&DecodersTable> {
    match &self.body {
      LumpBody::Decoders(table) => Some(table),
      _ => None,
    }
  }

  /// Sum of `header + payload` over the direct children.
  ///
  /// For a decoded container this always equals `declared_size`.
  #[must_use]
  pub fn children_size(&self) -> usize {
    self.children().iter().map(Lump::total_size).sum()
  }

  /// First lump named `name`, searching this lump and then its
  /// descendants depth-first.
  #[must_use]
  pub fn find(&self, name: &str) -> Option<&Lump> {
    self.descendants().find(|lump| lump.name == name)
  }

  /// Depth-first, pre-order walk starting with `self`.
  pub fn descendants(&self) -> impl Iterator<Item = &Lump> {
    let mut stack = vec![self];
    std::iter::from_fn(move || {
      let next = stack.pop()?;
      stack.extend(next.children().iter().rev());
      Some(next)
    })
  }
}
