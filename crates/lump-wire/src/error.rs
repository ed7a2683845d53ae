/// Errors raised while pulling primitive values out of a storage image.
///
/// The wire layer knows nothing about lumps or items; the only thing that
/// can go wrong at this level is running out of bytes. Higher layers wrap
/// this error rather than re-describing it.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// A read needed more bytes than remain in the buffer.
    ///
    /// `offset` is the cursor position at which the read was attempted and
    /// `needed` the number of bytes it asked for.
    #[error("unexpected end of data at offset {offset}: needed {needed} more byte(s)")]
    UnexpectedEndOfData { offset: usize, needed: usize },
}
