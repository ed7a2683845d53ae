use std::fmt;

/// A 16-byte identifier stored verbatim in the image.
///
/// The device writes GUIDs in the mixed-endian layout used by Windows
/// tooling: the first three groups are little-endian, the last eight bytes
/// are stored as-is. [`fmt::Display`] renders that canonical form, so
///
/// ```text
/// bytes:   33 22 11 00 55 44 77 66 88 99 AA BB CC DD EE FF
/// display: 00112233-4455-6677-8899-aabbccddeeff
/// ```
///
/// The decoder stores the identifier but never interprets it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Guid([u8; 16]);

impl Guid {
    pub const NIL: Self = Self([0; 16]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; 16]
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-",
            b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9]
        )?;
        for byte in &b[10..] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
