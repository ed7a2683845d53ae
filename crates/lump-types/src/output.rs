use lump_wire::ByteCursor;

use crate::error::TypeError;
use crate::flags::{DecoderFlags, OutputFlags};

/// Output decoder: drives a single digital pin (lights, relays, signals).
///
/// The layout has not changed since the first decoders-table version.
///
/// ```text
/// ┌────────┬──────┬───────┬───────────────────────────┐
/// │ Offset │ Size │ Name  │ Description               │
/// ├────────┼──────┼───────┼───────────────────────────┤
/// │ 0      │ 1    │ pin   │ Output pin                │
/// │ 1      │ 1    │ flags │ See [`OutputFlags`]       │
/// └────────┴──────┴───────┴───────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputDecoder {
  pub pin: u8,
  pub flags: OutputFlags,
}

impl OutputDecoder {
  pub const SIZE: usize = 2;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-record.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    let pin = cursor.read_u8()?;
    let flags = DecoderFlags::read_from(cursor)?.into();
    Ok(Self { pin, flags })
  }
}
