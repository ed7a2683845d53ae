use lump_types::network::{NetworkInfoV2, NetworkInfoV3};
use lump_types::session::{SessionInfoV1, SessionInfoV2};
use lump_types::{Lump, LumpBody, LumpKind};
use lump_wire::{ByteCursor, HEADER_SIZE, LumpHeader};
use tracing::{debug, warn};

use crate::budget::Budget;
use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::table;

/// A fully decoded storage image.
///
/// ```text
/// ┌──────────────────────────────────────────────────┐
/// │ RootLump                                         │
/// │   lump:           Lump  ← the Bcs0008 container  │
/// │   trailing_bytes: usize ← fill after the root    │
/// └──────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootLump {
    /// The root container and everything beneath it.
    pub lump: Lump,

    /// Bytes that followed the root lump in the image. Always zero when
    /// decoding with [`DecoderConfig::strict_trailing`].
    pub trailing_bytes: usize,
}

impl RootLump {
    /// Bytes the root lump occupied, header included.
    #[must_use]
    pub fn size(&self) -> usize {
        self.lump.total_size()
    }

    /// Every decoders-table lump in the tree, in storage order.
    pub fn decoders(&self) -> impl Iterator<Item = &Lump> {
        self.lump
            .descendants()
            .filter(|lump| lump.decoders_table().is_some())
    }

    /// First lump whose tag is `name`, root included.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Lump> {
        self.lump.find(name)
    }
}

/// Decoder for EEPROM storage images.
///
/// Decoding proceeds in three steps:
///
///   1. **Root header**: the first 10 bytes must carry the `Bcs0008` tag.
///      Anything else is [`DecodeError::InvalidHeader`], checked before the
///      tag is looked up in the registry.
///   2. **Tree**: lumps are decoded recursively. Each container spends its
///      declared payload length on child lumps (`10 + child size` apiece)
///      and must land on exactly zero. Decoders tables spend theirs on the
///      GUID, item groups and the terminator byte.
///   3. **Trailing fill**: bytes after the root are counted. They are a
///      warning by default and [`DecodeError::TrailingData`] in strict mode.
///
/// Unknown tags, at any depth, abort the decode. No partial tree is ever
/// returned.
///
/// # Example
///
/// ```rust
/// use lump_decoder::StorageDecoder;
///
/// // Root container holding a single end marker.
/// let mut image = b"Bcs0008\0".to_vec();
/// image.extend_from_slice(&10u16.to_le_bytes());
/// image.extend_from_slice(b"ENDEND1\0");
/// image.extend_from_slice(&0u16.to_le_bytes());
///
/// let root = StorageDecoder::decode(&image).unwrap();
/// assert_eq!(root.lump.children().len(), 1);
/// assert_eq!(root.trailing_bytes, 0);
/// ```
pub struct StorageDecoder;

impl StorageDecoder {
    /// Decode an image with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidHeader`] if the first lump is not the root.
    /// - [`DecodeError::SizeMismatch`] if a lump's contents do not add up
    ///   to its declared length.
    /// - [`DecodeError::Type`] for unknown lump or item tags and for fixed
    ///   lumps with the wrong declared length.
    /// - [`DecodeError::Wire`] if the image ends mid-lump.
    /// - [`DecodeError::NestingTooDeep`] if containers nest past the limit.
    pub fn decode(image: &[u8]) -> Result<RootLump, DecodeError> {
        Self::decode_with_config(image, &DecoderConfig::default())
    }

    /// Decode an image with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Everything [`decode`](Self::decode) reports, plus
    /// [`DecodeError::TrailingData`] when `config.strict_trailing` is set
    /// and bytes follow the root lump.
    pub fn decode_with_config(
        image: &[u8],
        config: &DecoderConfig,
    ) -> Result<RootLump, DecodeError> {
        let mut cursor = ByteCursor::new(image);

        let header = LumpHeader::read_from(&mut cursor)?;
        if !header.is_root() {
            return Err(DecodeError::InvalidHeader {
                found: header.name(),
            });
        }

        let (lump, _) = decode_body(&mut cursor, &header, 0, config)?;

        let trailing_bytes = cursor.remaining();
        if trailing_bytes > 0 {
            if config.strict_trailing {
                return Err(DecodeError::TrailingData {
                    extra_bytes: trailing_bytes,
                });
            }
            warn!(
                offset = cursor.offset(),
                trailing_bytes, "bytes after root lump"
            );
        }

        Ok(RootLump {
            lump,
            trailing_bytes,
        })
    }
}

/// Decode the payload that follows `header`.
///
/// Returns the lump and the payload bytes consumed.
fn decode_body(
    cursor: &mut ByteCursor<'_>,
    header: &LumpHeader,
    depth: usize,
    config: &DecoderConfig,
) -> Result<(Lump, usize), DecodeError> {
    if depth > config.max_depth {
        return Err(DecodeError::NestingTooDeep {
            depth,
            limit: config.max_depth,
        });
    }

    let name = header.name();
    let declared = header.declared_size;
    let kind = LumpKind::resolve(&name)?;
    kind.check_fixed_size(declared)?;

    let start = cursor.offset();
    debug!(
        tag = %name,
        size = declared,
        depth,
        offset = start - HEADER_SIZE,
        "lump"
    );

    let body = match kind {
        LumpKind::Root => {
            LumpBody::Container(decode_children(cursor, &name, declared, depth, config)?)
        }
        LumpKind::NetworkV2 => LumpBody::NetworkV2(NetworkInfoV2::read(cursor)?),
        LumpKind::NetworkV3 => LumpBody::NetworkV3(NetworkInfoV3::read(cursor)?),
        LumpKind::SessionV1 => LumpBody::SessionV1(SessionInfoV1::read(cursor)?),
        LumpKind::SessionV2 => LumpBody::SessionV2(SessionInfoV2::read(cursor)?),
        LumpKind::Decoders(version) => {
            LumpBody::Decoders(table::decode_table(cursor, &name, version, declared)?)
        }
        LumpKind::EndMarker => LumpBody::EndMarker,
    };

    let lump = Lump {
        name,
        declared_size: declared,
        kind,
        body,
    };
    Ok((lump, cursor.offset() - start))
}

/// Decode child lumps until the container's declared length is spent.
fn decode_children(
    cursor: &mut ByteCursor<'_>,
    tag: &str,
    declared: u16,
    depth: usize,
    config: &DecoderConfig,
) -> Result<Vec<Lump>, DecodeError> {
    let mut budget = Budget::new(tag, declared);
    let mut children = Vec::new();

    while budget.remaining() > 0 {
        // A header that does not fit is a shortfall, not a truncated read.
        if budget.remaining() < HEADER_SIZE {
            return Err(budget.shortfall());
        }

        // Checked before the payload is read so an overrun never reads
        // past the container.
        let child_header = LumpHeader::read_from(cursor)?;
        if child_header.total_size() > budget.remaining() {
            return Err(budget.overrun(child_header.total_size()));
        }

        let (child, payload) = decode_body(cursor, &child_header, depth + 1, config)?;
        budget.charge(HEADER_SIZE + payload)?;
        children.push(child);
    }

    budget.finish()?;
    Ok(children)
}
