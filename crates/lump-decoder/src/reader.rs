use std::io::Read;

use crate::config::DecoderConfig;
use crate::decoder::{RootLump, StorageDecoder};
use crate::error::DecodeError;

/// Read `reader` to the end and decode the bytes as a storage image.
///
/// Images are at most a few kilobytes (the payload length field is 16
/// bits), so the stream is buffered whole rather than decoded
/// incrementally.
///
/// # Errors
///
/// [`DecodeError::Io`] if reading fails, otherwise anything
/// [`StorageDecoder::decode`] reports.
pub fn decode_reader<R: Read>(reader: R) -> Result<RootLump, DecodeError> {
    decode_reader_with_config(reader, &DecoderConfig::default())
}

/// [`decode_reader`] with an explicit configuration.
///
/// # Errors
///
/// [`DecodeError::Io`] if reading fails, otherwise anything
/// [`StorageDecoder::decode_with_config`] reports.
pub fn decode_reader_with_config<R: Read>(
    mut reader: R,
    config: &DecoderConfig,
) -> Result<RootLump, DecodeError> {
    let mut image = Vec::new();
    reader.read_to_end(&mut image)?;
    StorageDecoder::decode_with_config(&image, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "device gone"))
        }
    }

    #[test]
    fn decodes_from_slice_reader() {
        // Bcs0008 { ENDEND1 }
        let image = hex::decode("4263733030303800 0a00 454e44454e443100 0000".replace(' ', ""))
            .unwrap();
        let root = decode_reader(image.as_slice()).unwrap();
        assert_eq!(root.lump.children()[0].name, "ENDEND1");
    }

    #[test]
    fn io_failure_surfaces_as_io() {
        let err = decode_reader(FailingReader).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("device gone"));
    }

    #[test]
    fn config_is_honoured() {
        let mut image =
            hex::decode("42637330303038000a00454e44454e4431000000").unwrap();
        image.push(0xFF);
        let strict = DecoderConfig {
            strict_trailing: true,
            ..DecoderConfig::default()
        };
        let err = decode_reader_with_config(image.as_slice(), &strict).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TrailingData);
    }
}
