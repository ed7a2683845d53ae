/// Implementation of `lump validate`.
///
/// Runs a full decode and reports either a series of `✓` lines or a single
/// `✗` diagnostic. Exit code 1 on failure comes from the dispatcher in
/// `main.rs`.
///
/// # Success output
///
/// ```text
/// ✓ Root: Bcs0008, 118 bytes
/// ✓ Lumps: 4 decoded, budgets balanced
/// ✓ Items: 3 in 1 decoders table
/// ! Deprecated: NetU002, DECS016
/// ✓ Trailing: 42 bytes of fill after root
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error [size mismatch]: size mismatch in lump DECS020: declared 40 bytes, contents account for 42
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use lump_decoder::{DecodeError, ErrorKind, StorageDecoder};
use tracing::debug;

use crate::ValidateArgs;

/// Run the `lump validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    debug!(file = %args.file.display(), len = bytes.len(), "read image");

    match StorageDecoder::decode_with_config(&bytes, &args.decode.config()) {
        Ok(root) => {
            println!("✓ Root: {}, {} bytes", root.lump.name, root.size());

            let lumps = root.lump.descendants().count();
            println!("✓ Lumps: {lumps} decoded, budgets balanced");

            let tables = root.decoders().count();
            let items: usize = root.decoders().map(|t| t.items().len()).sum();
            println!(
                "✓ Items: {items} in {tables} decoders table{}",
                if tables == 1 { "" } else { "s" }
            );

            let deprecated: Vec<_> = root
                .lump
                .descendants()
                .filter(|l| l.is_deprecated())
                .map(|l| l.name.as_str())
                .collect();
            if !deprecated.is_empty() {
                println!("! Deprecated: {}", deprecated.join(", "));
            }

            if root.trailing_bytes == 0 {
                println!("✓ Trailing: none");
            } else {
                println!(
                    "✓ Trailing: {} bytes of fill after root",
                    root.trailing_bytes
                );
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error [{}]: {e}", kind_label(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Short category label for a decode failure.
///
/// ```text
/// ┌──────────────────────┬──────────────────────┐
/// │ ErrorKind            │ Label                │
/// ├──────────────────────┼──────────────────────┤
/// │ UnexpectedEndOfData  │ truncated            │
/// │ UnknownLumpType      │ unknown lump         │
/// │ UnknownItemType      │ unknown item         │
/// │ SizeMismatch         │ size mismatch        │
/// │ InvalidHeader        │ invalid header       │
/// │ UnexpectedSize       │ wrong fixed size     │
/// │ TrailingData         │ trailing data        │
/// │ NestingTooDeep       │ nesting too deep     │
/// │ Io                   │ i/o                  │
/// └──────────────────────┴──────────────────────┘
/// ```
fn kind_label(e: &DecodeError) -> &'static str {
    match e.kind() {
        ErrorKind::UnexpectedEndOfData => "truncated",
        ErrorKind::UnknownLumpType => "unknown lump",
        ErrorKind::UnknownItemType => "unknown item",
        ErrorKind::SizeMismatch => "size mismatch",
        ErrorKind::InvalidHeader => "invalid header",
        ErrorKind::UnexpectedSize => "wrong fixed size",
        ErrorKind::TrailingData => "trailing data",
        ErrorKind::NestingTooDeep => "nesting too deep",
        ErrorKind::Io => "i/o",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_kind() {
        let e = DecodeError::TrailingData { extra_bytes: 3 };
        assert_eq!(kind_label(&e), "trailing data");
        let e = DecodeError::InvalidHeader {
            found: "ENDEND1".to_string(),
        };
        assert_eq!(kind_label(&e), "invalid header");
    }
}
