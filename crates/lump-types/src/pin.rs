use lump_wire::{ByteCursor, WireError};

/// Pin byte value meaning "no pin assigned".
pub const NO_PIN: u8 = 128;

/// Read an optional pin: [`NO_PIN`] decodes to `None`, anything else to
/// that literal pin number.
///
/// # Errors
///
/// [`WireError::UnexpectedEndOfData`] if the image is exhausted.
pub fn read_optional_pin(cursor: &mut ByteCursor<'_>) -> Result<Option<u8>, WireError> {
  Ok(match cursor.read_u8()? {
    NO_PIN => None,
    pin => Some(pin),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sentinel_is_none() {
    let mut cursor = ByteCursor::new(&[128]);
    assert_eq!(read_optional_pin(&mut cursor).unwrap(), None);
  }

  #[test]
  fn other_values_are_literal() {
    for value in [0u8, 13, 127, 129, 255] {
      let buf = [value];
      let mut cursor = ByteCursor::new(&buf);
      assert_eq!(read_optional_pin(&mut cursor).unwrap(), Some(value));
    }
  }
}
