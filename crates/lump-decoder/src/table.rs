use lump_types::item_type::ITEM_TERMINATOR;
use lump_types::{DecodersTable, DecodersVersion, Item};
use lump_wire::ByteCursor;
use tracing::trace;

use crate::budget::Budget;
use crate::error::DecodeError;

const GUID_LEN: usize = 16;

/// Decode the payload of a `DECS0xx` lump.
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ guid          16 bytes                                   │
/// │ ┌─ group ──────────────────────────────────────────────┐ │
/// │ │ type      u8   (charged once per group)              │ │
/// │ │ quantity  u8   (charged once per group)              │ │
/// │ │ quantity × { slot u8, record [kind.size()] }         │ │
/// │ └──────────────────────────────────────────────────────┘ │
/// │ ... more groups ...                                      │
/// │ 0x00          terminator (charged)                       │
/// └──────────────────────────────────────────────────────────┘
/// ```
///
/// The item layout is chosen from `version`, i.e. from the enclosing lump's
/// tag, never from the type byte alone.
pub(crate) fn decode_table(
    cursor: &mut ByteCursor<'_>,
    tag: &str,
    version: DecodersVersion,
    declared: u16,
) -> Result<DecodersTable, DecodeError> {
    let mut budget = Budget::new(tag, declared);

    budget.charge(GUID_LEN)?;
    let guid = cursor.read_guid()?;

    let mut items = Vec::new();
    loop {
        budget.charge(1)?;
        let type_tag = cursor.read_u8()?;
        if type_tag == ITEM_TERMINATOR {
            break;
        }

        let kind = version.resolve_item(type_tag)?;

        budget.charge(1)?;
        let quantity = cursor.read_u8()?;
        trace!(%version, ?kind, quantity, offset = cursor.offset(), "item group");

        for _ in 0..quantity {
            budget.charge(1 + kind.size())?;
            items.push(Item::read(kind, cursor)?);
        }
    }

    budget.finish()?;
    Ok(DecodersTable {
        version,
        guid,
        items,
    })
}
