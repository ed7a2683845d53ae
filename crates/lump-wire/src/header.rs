use crate::cursor::ByteCursor;
use crate::error::WireError;

/// Width of the ASCII tag at the start of every lump header.
pub const TAG_LEN: usize = 8;

/// Total lump header size in bytes: tag plus 16-bit payload length.
pub const HEADER_SIZE: usize = TAG_LEN + 2;

/// Tag of the container lump that must open every image.
///
/// Stored as raw bytes so the trailing NUL is part of the comparison.
pub const ROOT_TAG: [u8; TAG_LEN] = *b"Bcs0008\0";

/// Lump header: the first 10 bytes of every lump.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────────┐
/// │ Offset │ Size    │ Description                              │
/// ├────────┼─────────┼──────────────────────────────────────────┤
/// │ 0x00   │ 8 bytes │ Tag: ASCII, NUL-padded on the right      │
/// │ 0x08   │ 2 bytes │ Payload length (u16 LE), header excluded │
/// └────────┴─────────┴──────────────────────────────────────────┘
/// ```
///
/// The raw tag bytes are kept alongside the trimmed name: the root check
/// compares raw bytes, dispatch uses the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LumpHeader {
    pub raw_tag: [u8; TAG_LEN],
    pub declared_size: u16,
}

impl LumpHeader {
    /// Read a header from the cursor, consuming exactly [`HEADER_SIZE`] bytes.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than 10 bytes remain.
    pub fn read_from(cursor: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        let raw_tag = cursor.read_array::<TAG_LEN>()?;
        let declared_size = cursor.read_u16_le()?;
        Ok(Self {
            raw_tag,
            declared_size,
        })
    }

    /// Tag text cut at the first NUL (`"Bcs0008\0"` → `"Bcs0008"`).
    #[must_use]
    pub fn name(&self) -> String {
        let end = self
            .raw_tag
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(TAG_LEN);
        self.raw_tag[..end].iter().map(|&b| char::from(b)).collect()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.raw_tag == ROOT_TAG
    }

    /// Header plus payload: the number of bytes this lump occupies in its
    /// parent's budget.
    #[must_use]
    pub fn total_size(&self) -> usize {
        HEADER_SIZE + usize::from(self.declared_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(tag: &[u8; TAG_LEN], size: u16) -> Vec<u8> {
        let mut buf = tag.to_vec();
        buf.extend_from_slice(&size.to_le_bytes());
        buf
    }

    #[test]
    fn reads_root_header() {
        let buf = header_bytes(&ROOT_TAG, 0x0134);
        let mut cursor = ByteCursor::new(&buf);
        let header = LumpHeader::read_from(&mut cursor).unwrap();
        assert!(header.is_root());
        assert_eq!(header.name(), "Bcs0008");
        assert_eq!(header.declared_size, 0x0134);
        assert_eq!(header.total_size(), 10 + 0x0134);
        assert_eq!(cursor.offset(), HEADER_SIZE);
    }

    #[test]
    fn name_without_padding() {
        let buf = header_bytes(b"ZZZZZZZZ", 0);
        let header = LumpHeader::read_from(&mut ByteCursor::new(&buf)).unwrap();
        assert_eq!(header.name(), "ZZZZZZZZ");
        assert!(!header.is_root());
    }

    #[test]
    fn root_check_requires_trailing_nul() {
        // Same visible text, but the eighth byte is not NUL.
        let buf = header_bytes(b"Bcs0008X", 0);
        let header = LumpHeader::read_from(&mut ByteCursor::new(&buf)).unwrap();
        assert!(!header.is_root());
    }

    #[test]
    fn truncated_header() {
        let buf = [b'B', b'c', b's'];
        let result = LumpHeader::read_from(&mut ByteCursor::new(&buf));
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEndOfData { offset: 0, .. })
        ));
    }

    #[test]
    fn truncated_size_field() {
        let mut buf = ROOT_TAG.to_vec();
        buf.push(0x01);
        let result = LumpHeader::read_from(&mut ByteCursor::new(&buf));
        assert!(matches!(
            result,
            Err(WireError::UnexpectedEndOfData {
                offset: 8,
                needed: 2
            })
        ));
    }
}
