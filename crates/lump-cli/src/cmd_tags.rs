/// Implementation of `lump tags`.
///
/// Prints the lump registry followed by the item layout each decoders-table
/// version uses for every item family.
///
/// ```text
/// Lump tags:
///   Bcs0008  container
///   NetU002  28 bytes       deprecated
///   ...
/// Item layouts (bytes after slot, * deprecated):
///   version  output  sensor  servo-turnout  turntable-inverter  quad-inverter
///   DECS015  2       2*      -              -                   -
///   ...
/// ```
use std::fmt::Write as _;

use anyhow::Result;
use lump_types::{DecodersVersion, ItemType, LumpKind};

/// Run the `lump tags` command.
///
/// # Errors
///
/// Infallible in practice; returns `Result` to match the other commands.
pub fn run() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let mut out = String::from("Lump tags:\n");
    for kind in LumpKind::ALL {
        let payload = match kind.fixed_size() {
            Some(size) => format!("{size} bytes"),
            None if kind.is_container() => "container".to_string(),
            None => "variable".to_string(),
        };
        let deprecated = if kind.is_deprecated() { "deprecated" } else { "" };
        let _ = writeln!(out, "  {:<8} {payload:<14} {deprecated}", kind.tag());
        trim_line_end(&mut out);
    }

    out.push_str("Item layouts (bytes after slot, * deprecated):\n");
    let _ = write!(out, "  {:<8}", "version");
    for family in ItemType::ALL {
        let _ = write!(out, " {:<19}", family.name());
    }
    trim_line_end(&mut out);
    out.push('\n');

    for version in DecodersVersion::ALL {
        let _ = write!(out, "  {:<8}", version.tag());
        for family in ItemType::ALL {
            let cell = version.layout(family).map_or_else(
                || "-".to_string(),
                |kind| {
                    let mark = if kind.is_deprecated() { "*" } else { "" };
                    format!("{}{mark}", kind.size())
                },
            );
            let _ = write!(out, " {cell:<19}");
        }
        trim_line_end(&mut out);
        out.push('\n');
    }
    out
}

/// Drop the padding left after the last column of the current line.
fn trim_line_end(out: &mut String) {
    let had_newline = out.ends_with('\n');
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    if had_newline {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_listed() {
        let text = render();
        for kind in LumpKind::ALL {
            assert!(text.contains(kind.tag()), "missing {}", kind.tag());
        }
    }

    #[test]
    fn version_rows_show_layout_sizes() {
        let text = render();
        let (_, layouts) = text.split_once("Item layouts").unwrap();
        let row = layouts
            .lines()
            .find(|l| l.trim_start().starts_with("DECS015"))
            .unwrap();
        let cells: Vec<_> = row.split_whitespace().collect();
        assert_eq!(cells, ["DECS015", "2", "2*", "-", "-", "-"]);

        let row = layouts
            .lines()
            .find(|l| l.trim_start().starts_with("DECS020"))
            .unwrap();
        let cells: Vec<_> = row.split_whitespace().collect();
        assert_eq!(cells, ["DECS020", "2", "6", "7", "8", "8"]);
    }

    #[test]
    fn full_table() {
        insta::assert_snapshot!(render(), @r"
Lump tags:
  Bcs0008  container
  NetU002  28 bytes       deprecated
  NetU003  24 bytes
  Sson001  6 bytes        deprecated
  Sson002  22 bytes
  DECS015  variable       deprecated
  DECS016  variable       deprecated
  DECS017  variable       deprecated
  DECS018  variable       deprecated
  DECS019  variable       deprecated
  DECS020  variable
  ENDEND1  0 bytes
Item layouts (bytes after slot, * deprecated):
  version  output              sensor              servo-turnout       turntable-inverter  quad-inverter
  DECS015  2                   2*                  -                   -                   -
  DECS016  2                   4*                  7                   7*                  -
  DECS017  2                   7*                  7                   7*                  -
  DECS018  2                   7*                  7                   8                   -
  DECS019  2                   6                   7                   8                   7*
  DECS020  2                   6                   7                   8                   8
");
    }
}
