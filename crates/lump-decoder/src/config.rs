/// Default limit on lump nesting below the root.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Configuration for [`StorageDecoder`](crate::StorageDecoder).
///
/// ```text
/// ┌─────────────────┬──────────────────────────────────────────────────┐
/// │ Field           │ Purpose                                          │
/// ├─────────────────┼──────────────────────────────────────────────────┤
/// │ max_depth       │ Deepest container nesting accepted below root    │
/// │ strict_trailing │ Reject bytes after the root lump                 │
/// └─────────────────┴──────────────────────────────────────────────────┘
/// ```
///
/// An EEPROM dump is the whole chip, so the root lump is normally followed
/// by erased fill. The default accepts that fill and reports its length in
/// [`RootLump::trailing_bytes`](crate::RootLump::trailing_bytes);
/// `strict_trailing` turns it into
/// [`DecodeError::TrailingData`](crate::DecodeError::TrailingData) for
/// images that are expected to be exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Maximum container depth. The root is depth 0, its children depth 1.
    pub max_depth: usize,

    /// Fail instead of warning when bytes follow the root lump.
    pub strict_trailing: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_trailing: false,
        }
    }
}
