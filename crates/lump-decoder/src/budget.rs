use crate::error::DecodeError;

/// Payload byte budget of one lump.
///
/// Every read is charged before it happens, so a lump whose contents would
/// overrun its declared length fails without reading past its end.
pub(crate) struct Budget<'t> {
    tag: &'t str,
    declared: usize,
    consumed: usize,
}

impl<'t> Budget<'t> {
    pub(crate) fn new(tag: &'t str, declared: u16) -> Self {
        Self {
            tag,
            declared: usize::from(declared),
            consumed: 0,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.declared - self.consumed
    }

    /// Charge `n` bytes, failing if that would exceed the declared length.
    pub(crate) fn charge(&mut self, n: usize) -> Result<(), DecodeError> {
        if n > self.remaining() {
            return Err(self.overrun(n));
        }
        self.consumed += n;
        Ok(())
    }

    /// Fail if any declared bytes were left unaccounted for.
    pub(crate) fn finish(self) -> Result<(), DecodeError> {
        if self.consumed == self.declared {
            Ok(())
        } else {
            Err(self.shortfall())
        }
    }

    /// The error for spending `n` more bytes than remain.
    pub(crate) fn overrun(&self, n: usize) -> DecodeError {
        self.mismatch(self.consumed + n)
    }

    /// The error for a budget that stopped short of its declared length.
    pub(crate) fn shortfall(&self) -> DecodeError {
        self.mismatch(self.consumed)
    }

    fn mismatch(&self, consumed: usize) -> DecodeError {
        DecodeError::SizeMismatch {
            tag: self.tag.to_string(),
            declared: self.declared,
            consumed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_spend_finishes() {
        let mut budget = Budget::new("Bcs0008", 12);
        budget.charge(10).unwrap();
        budget.charge(2).unwrap();
        assert_eq!(budget.remaining(), 0);
        budget.finish().unwrap();
    }

    #[test]
    fn overrun_reports_would_be_total() {
        let mut budget = Budget::new("DECS020", 17);
        budget.charge(16).unwrap();
        let err = budget.charge(3).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::SizeMismatch {
                declared: 17,
                consumed: 19,
                ..
            }
        ));
        // A failed charge leaves the budget untouched.
        assert_eq!(budget.remaining(), 1);
    }

    #[test]
    fn shortfall_on_finish() {
        let mut budget = Budget::new("Bcs0008", 20);
        budget.charge(10).unwrap();
        match budget.finish().unwrap_err() {
            DecodeError::SizeMismatch {
                tag,
                declared,
                consumed,
            } => {
                assert_eq!(tag, "Bcs0008");
                assert_eq!(declared, 20);
                assert_eq!(consumed, 10);
            }
            other => panic!("expected SizeMismatch, got {other:?}"),
        }
    }
}
