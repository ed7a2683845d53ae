/// Implementation of `lump inspect`.
///
/// Decodes an image and prints its lump tree to stdout. `--items` lists the
/// decoder items under each table; `--hex` appends a dump of the raw image.
///
/// # Output format
///
/// ```text
/// Image: 160 bytes, root 118 bytes, 42 trailing
/// Bcs0008 size=108 children=3
/// ├── NetU003 size=24 node="yard-east" mac=02:00:00:12:34:56 port=1883
/// ├── DECS020 size=50 guid=... items=3
/// │     slot 0  output          pin=4 flags=active
/// │     slot 1  servo-turnout   pin=12 flags=none power_pin=- ...
/// └── ENDEND1 size=0
/// ```
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use lump_decoder::StorageDecoder;
use lump_types::network::format_mac;
use lump_types::{Lump, LumpBody};
use tracing::debug;

use crate::InspectArgs;
use crate::fields;

/// Run the `lump inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    debug!(file = %args.file.display(), len = bytes.len(), "read image");

    let root = StorageDecoder::decode_with_config(&bytes, &args.decode.config())
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    println!(
        "Image: {} bytes, root {} bytes, {} trailing",
        bytes.len(),
        root.size(),
        root.trailing_bytes
    );

    let mut out = String::new();
    render_lump(&mut out, &root.lump, "", "", args.items);
    print!("{out}");

    if args.hex {
        println!("---");
        print!("{}", hex_dump(&bytes));
    }

    Ok(())
}

// ── Tree rendering ────────────────────────────────────────────────────────────

/// Append `lump` and its subtree to `out`.
///
/// `lead` prefixes the lump's own line, `indent` every line beneath it.
fn render_lump(out: &mut String, lump: &Lump, lead: &str, indent: &str, items: bool) {
    let deprecated = if lump.is_deprecated() {
        " (deprecated)"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "{lead}{} size={}{}{deprecated}",
        lump.name,
        lump.declared_size,
        lump_detail(&lump.body)
    );

    if items {
        for item in lump.items() {
            let deprecated = if item.is_deprecated() { " (deprecated)" } else { "" };
            let _ = writeln!(
                out,
                "{indent}      slot {:<3} {:<18} {}{deprecated}",
                item.slot,
                item.item_type().name(),
                fields::inline(&fields::item_fields(&item.decoder))
            );
        }
    }

    let children = lump.children();
    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == children.len();
        let (branch, next) = if last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        render_lump(
            out,
            child,
            &format!("{indent}{branch}"),
            &format!("{indent}{next}"),
            items,
        );
    }
}

/// Inline summary of a lump body, printed after its size.
fn lump_detail(body: &LumpBody) -> String {
    match body {
        LumpBody::Container(children) => format!(" children={}", children.len()),
        LumpBody::NetworkV2(n) => format!(
            " node={:?} mac={} server={}:{}",
            n.node_name,
            format_mac(&n.mac),
            n.server_ip,
            n.server_port
        ),
        LumpBody::NetworkV3(n) => format!(
            " node={:?} mac={} port={}",
            n.node_name,
            format_mac(&n.mac),
            n.server_port
        ),
        LumpBody::SessionV1(s) => format!(" server={}:{}", s.server_ip, s.server_port),
        LumpBody::SessionV2(s) => format!(
            " server={}:{} token={}",
            s.server_ip, s.server_port, s.config_token
        ),
        LumpBody::Decoders(table) => {
            format!(" guid={} items={}", table.guid, table.items.len())
        }
        LumpBody::EndMarker => String::new(),
    }
}

/// 16 bytes per line: offset, hex bytes, printable ASCII.
fn hex_dump(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks(16).enumerate() {
        let offset = i * 16;
        let hex: String = chunk
            .iter()
            .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                if !s.is_empty() {
                    s.push(' ');
                }
                let _ = write!(s, "{b:02x}");
                s
            });
        let ascii: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
            .collect();
        let _ = writeln!(out, "{offset:04x}  {hex:<48}  {ascii}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lump_types::LumpKind;

    fn leaf(kind: LumpKind, body: LumpBody, size: u16) -> Lump {
        Lump {
            name: kind.tag().to_string(),
            declared_size: size,
            kind,
            body,
        }
    }

    #[test]
    fn tree_uses_branch_glyphs() {
        let root = leaf(
            LumpKind::Root,
            LumpBody::Container(vec![
                leaf(LumpKind::EndMarker, LumpBody::EndMarker, 0),
                leaf(LumpKind::EndMarker, LumpBody::EndMarker, 0),
            ]),
            20,
        );
        let mut out = String::new();
        render_lump(&mut out, &root, "", "", false);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "Bcs0008 size=20 children=2");
        assert_eq!(lines[1], "├── ENDEND1 size=0");
        assert_eq!(lines[2], "└── ENDEND1 size=0");
    }

    #[test]
    fn hex_dump_folds_at_sixteen() {
        let bytes: Vec<u8> = (0x41..0x41 + 20).collect();
        let dump = hex_dump(&bytes);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0000  41 42 43"));
        assert!(lines[0].ends_with("ABCDEFGHIJKLMNOP"));
        assert!(lines[1].starts_with("0010  51 52 53 54"));
    }
}
