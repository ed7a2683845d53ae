use crate::error::TypeError;
use crate::item_type::DecodersVersion;
use crate::network::{NetworkInfoV2, NetworkInfoV3};
use crate::session::{SessionInfoV1, SessionInfoV2};

/// Lump schema registry, keyed by the NUL-trimmed tag.
///
/// ```text
/// ┌─────────┬─────────────────────┬───────────────────┬────────────┐
/// │ Tag     │ Variant             │ Payload           │ Deprecated │
/// ├─────────┼─────────────────────┼───────────────────┼────────────┤
/// │ Bcs0008 │ Root                │ child lumps       │            │
/// │ NetU002 │ NetworkV2           │ 28 bytes          │ ✓          │
/// │ NetU003 │ NetworkV3           │ 24 bytes          │            │
/// │ Sson001 │ SessionV1           │ 6 bytes           │ ✓          │
/// │ Sson002 │ SessionV2           │ 22 bytes          │            │
/// │ DECS0xx │ Decoders(version)   │ GUID + items      │ < 020      │
/// │ ENDEND1 │ EndMarker           │ 0 bytes           │            │
/// └─────────┴─────────────────────┴───────────────────┴────────────┘
/// ```
///
/// New on-disk versions get new variants; existing variants are never
/// changed, so old images stay readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LumpKind {
  Root,
  NetworkV2,
  NetworkV3,
  SessionV1,
  SessionV2,
  Decoders(DecodersVersion),
  EndMarker,
}

impl LumpKind {
  /// Every registered schema, in tag order of introduction.
  pub const ALL: [Self; 12] = [
    Self::Root,
    Self::NetworkV2,
    Self::NetworkV3,
    Self::SessionV1,
    Self::SessionV2,
    Self::Decoders(DecodersVersion::V015),
    Self::Decoders(DecodersVersion::V016),
    Self::Decoders(DecodersVersion::V017),
    Self::Decoders(DecodersVersion::V018),
    Self::Decoders(DecodersVersion::V019),
    Self::Decoders(DecodersVersion::V020),
    Self::EndMarker,
  ];

  /// Tag text without padding.
  #[must_use]
  pub fn tag(self) -> &'static str {
    match self {
      Self::Root => "Bcs0008",
      Self::NetworkV2 => "NetU002",
      Self::NetworkV3 => "NetU003",
      Self::SessionV1 => "Sson001",
      Self::SessionV2 => "Sson002",
      Self::Decoders(v) => v.tag(),
      Self::EndMarker => "ENDEND1",
    }
  }

  /// Look a tag up in the registry.
  ///
  /// # Errors
  ///
  /// [`TypeError::UnknownLumpType`] if no schema is registered for `tag`.
  pub fn resolve(tag: &str) -> Result<Self, TypeError> {
    match tag {
      "Bcs0008" => Ok(Self::Root),
      "NetU002" => Ok(Self::NetworkV2),
      "NetU003" => Ok(Self::NetworkV3),
      "Sson001" => Ok(Self::SessionV1),
      "Sson002" => Ok(Self::SessionV2),
      "ENDEND1" => Ok(Self::EndMarker),
      other => DecodersVersion::from_tag(other)
        .map(Self::Decoders)
        .ok_or_else(|| TypeError::UnknownLumpType {
          tag: other.to_string(),
        }),
    }
  }

  #[must_use]
  pub fn is_deprecated(self) -> bool {
    match self {
      Self::NetworkV2 | Self::SessionV1 => true,
      Self::Decoders(v) => v.is_deprecated(),
      Self::Root | Self::NetworkV3 | Self::SessionV2 | Self::EndMarker => false,
    }
  }

  #[must_use]
  pub fn is_container(self) -> bool {
    self == Self::Root
  }

  /// Payload size for fixed-layout lumps; `None` for variable ones.
  #[must_use]
  pub fn fixed_size(self) -> Option<u16> {
    match self {
      Self::NetworkV2 => Some(NetworkInfoV2::SIZE),
      Self::NetworkV3 => Some(NetworkInfoV3::SIZE),
      Self::SessionV1 => Some(SessionInfoV1::SIZE),
      Self::SessionV2 => Some(SessionInfoV2::SIZE),
      Self::EndMarker => Some(0),
      Self::Root | Self::Decoders(_) => None,
    }
  }

  /// Check a declared payload length against the fixed layout.
  ///
  /// Variable-size kinds accept any length here; their own budget checks
  /// run while decoding.
  ///
  /// # Errors
  ///
  /// [`TypeError::UnexpectedSize`] if the kind is fixed and `declared`
  /// differs from its layout.
  pub fn check_fixed_size(self, declared: u16) -> Result<(), TypeError> {
    match self.fixed_size() {
      Some(expected) if expected != declared => Err(TypeError::UnexpectedSize {
        tag: self.tag(),
        expected,
        actual: declared,
      }),
      _ => Ok(()),
    }
  }
}
