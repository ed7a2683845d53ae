use lump_wire::WireError;

use crate::item_type::DecodersVersion;

/// Errors raised while resolving or reading typed lump and item payloads.
///
/// These sit one level above [`WireError`]: they concern what the bytes
/// mean, not whether they exist. A `TypeError` wraps a `WireError` when a
/// typed reader runs off the end of the image mid-field.
///
/// ```text
/// ┌──────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                               │
/// │   ├── UnknownLumpType   tag not in lump registry     │
/// │   ├── UnknownItemType   type byte not in the version │
/// │   ├── UnexpectedSize    fixed lump with wrong length │
/// │   └── wraps WireError   truncated payload            │
/// └──────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
  /// A lump tag that no registered schema claims.
  ///
  /// Unknown lumps are never skipped: every tag a device can write must be
  /// registered for its images to be readable.
  #[error("unknown lump type {tag:?}")]
  UnknownLumpType { tag: String },

  /// An item type byte that the enclosing decoders-table version does not
  /// define.
  #[error("unknown item type {tag} in {version} decoders table")]
  UnknownItemType { version: DecodersVersion, tag: u8 },

  /// A fixed-layout lump whose declared payload length differs from its
  /// schema.
  #[error("lump {tag} declares {actual} payload bytes, schema requires {expected}")]
  UnexpectedSize {
    tag: &'static str,
    expected: u16,
    actual: u16,
  },

  #[error(transparent)]
  Wire(#[from] WireError),
}
