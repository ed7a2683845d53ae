use lump_types::TypeError;
use lump_wire::WireError;

/// Errors that abort decoding of a storage image.
///
/// Every error is fatal: the decoder never hands back a partial tree.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InvalidHeader      ← first lump is not the Bcs0008 root
///   ├── SizeMismatch       ← byte budget of a lump did not end at zero
///   ├── TrailingData       ← bytes after the root (strict mode only)
///   ├── NestingTooDeep     ← container depth over the configured limit
///   ├── Type(TypeError)    ← unknown lump/item type, wrong fixed size
///   ├── Wire(WireError)    ← image ended mid-read
///   └── Io(std::io::Error) ← reader-based entry point
/// ```
///
/// [`DecodeError::kind`] flattens the nesting for callers that only care
/// which condition occurred.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The image does not start with the root container tag.
    ///
    /// `found` is the NUL-trimmed tag that was read instead.
    #[error("invalid header: expected root lump Bcs0008, found {found:?}")]
    InvalidHeader { found: String },

    /// A lump's contents did not add up to its declared payload length.
    ///
    /// `consumed` is how many payload bytes the contents account for at
    /// the point the mismatch was detected: larger than `declared` for an
    /// overrun, smaller for a shortfall.
    #[error("size mismatch in lump {tag}: declared {declared} bytes, contents account for {consumed}")]
    SizeMismatch {
        tag: String,
        declared: usize,
        consumed: usize,
    },

    /// Bytes follow the root lump and the decoder runs in strict mode.
    #[error("unexpected data after root lump ({extra_bytes} bytes)")]
    TrailingData { extra_bytes: usize },

    /// Containers nest deeper than [`DecoderConfig::max_depth`](crate::DecoderConfig::max_depth).
    #[error("lump nesting depth {depth} exceeds limit {limit}")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Flat classification of a [`DecodeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnexpectedEndOfData,
    UnknownLumpType,
    UnknownItemType,
    SizeMismatch,
    InvalidHeader,
    UnexpectedSize,
    TrailingData,
    NestingTooDeep,
    Io,
}

impl DecodeError {
    /// Which condition caused the failure, regardless of the layer that
    /// reported it.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidHeader { .. } => ErrorKind::InvalidHeader,
            Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Self::TrailingData { .. } => ErrorKind::TrailingData,
            Self::NestingTooDeep { .. } => ErrorKind::NestingTooDeep,
            Self::Type(TypeError::UnknownLumpType { .. }) => ErrorKind::UnknownLumpType,
            Self::Type(TypeError::UnknownItemType { .. }) => ErrorKind::UnknownItemType,
            Self::Type(TypeError::UnexpectedSize { .. }) => ErrorKind::UnexpectedSize,
            Self::Type(TypeError::Wire(_)) | Self::Wire(_) => ErrorKind::UnexpectedEndOfData,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}
