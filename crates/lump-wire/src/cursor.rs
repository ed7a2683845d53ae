use crate::error::WireError;
use crate::guid::Guid;

/// Forward-only, bounds-checked reader over a storage image.
///
/// Every read advances the cursor; there is no seeking backwards. A read
/// that would run past the end of the buffer fails with
/// [`WireError::UnexpectedEndOfData`] and leaves the cursor where it was,
/// so the reported offset points at the field that could not be read.
///
/// All multi-byte integers in the storage format are little-endian.
/// [`read_u16_be`](Self::read_u16_be) exists for checking captured dumps
/// against that assumption, not for decoding.
///
/// ```text
///   ┌───────────── buf ─────────────┐
///   │ consumed     │ remaining      │
///   └──────────────┴────────────────┘
///                  ^ pos
/// ```
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at offset 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current absolute offset from the start of the buffer.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Borrow the next `n` bytes and advance past them.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(WireError::UnexpectedEndOfData {
                offset: self.pos,
                needed: n,
            })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into a fixed-size array.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if the buffer is exhausted.
    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let [b] = self.read_array::<1>()?;
        Ok(b)
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than 2 bytes remain.
    pub fn read_u16_le(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than 2 bytes remain.
    pub fn read_u16_be(&mut self) -> Result<u16, WireError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    /// Read a fixed-width ASCII field and cut it at the first NUL.
    ///
    /// Always consumes `n` bytes, regardless of where the NUL falls. Bytes
    /// outside the ASCII range are mapped one-to-one onto `char`s so a
    /// corrupt name still renders instead of failing the decode.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than `n` bytes remain.
    pub fn read_fixed_ascii(&mut self, n: usize) -> Result<String, WireError> {
        let raw = self.read_bytes(n)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        Ok(raw[..end].iter().map(|&b| char::from(b)).collect())
    }

    /// Read a 16-byte identifier.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEndOfData`] if fewer than 16 bytes remain.
    pub fn read_guid(&mut self) -> Result<Guid, WireError> {
        Ok(Guid::from_bytes(self.read_array()?))
    }
}
