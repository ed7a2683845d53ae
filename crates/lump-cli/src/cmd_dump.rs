/// Implementation of `lump dump`.
///
/// Decodes an image and writes the whole tree as JSON, to stdout or to
/// `--output`.
///
/// ```json
/// {
///   "size": 30,
///   "trailing_bytes": 0,
///   "root": {
///     "tag": "Bcs0008", "size": 20, "deprecated": false,
///     "kind": "container",
///     "children": [
///       { "tag": "DECS020", "size": 20, "deprecated": false,
///         "kind": "decoders", "version": "DECS020", "guid": "...",
///         "items": [ { "slot": 0, "type": "output", "layout": "Output",
///                      "size": 2, "deprecated": false,
///                      "fields": { "pin": 4, "flags": ["active"] } } ] }
///     ]
///   }
/// }
/// ```
use std::fs;

use anyhow::{Context, Result};
use lump_decoder::{RootLump, StorageDecoder};
use lump_types::network::format_mac;
use lump_types::{Item, Lump, LumpBody};
use serde::Serialize;
use tracing::{debug, info};

use crate::DumpArgs;
use crate::fields;

/// Run the `lump dump` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not decode, or the
/// output file cannot be written.
pub fn run(args: &DumpArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;
    debug!(file = %args.file.display(), len = bytes.len(), "read image");

    let root = StorageDecoder::decode_with_config(&bytes, &args.decode.config())
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let json = render(&root, args.pretty)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("cannot write {}", path.display()))?;
            info!(path = %path.display(), "wrote JSON dump");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Serialize a decoded image to a JSON string.
fn render(root: &RootLump, pretty: bool) -> Result<String> {
    let view = ImageView {
        size: root.size(),
        trailing_bytes: root.trailing_bytes,
        root: LumpView::from(&root.lump),
    };
    let json = if pretty {
        serde_json::to_string_pretty(&view)
    } else {
        serde_json::to_string(&view)
    };
    json.context("cannot serialize image")
}

// ── JSON views ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ImageView<'a> {
    size: usize,
    trailing_bytes: usize,
    root: LumpView<'a>,
}

#[derive(Serialize)]
struct LumpView<'a> {
    tag: &'a str,
    size: u16,
    deprecated: bool,
    #[serde(flatten)]
    body: BodyView<'a>,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum BodyView<'a> {
    Container {
        children: Vec<LumpView<'a>>,
    },
    Network {
        node_name: &'a str,
        mac: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        server_ip: Option<String>,
        server_port: u16,
    },
    Session {
        server_ip: String,
        server_port: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        config_token: Option<String>,
    },
    Decoders {
        version: &'static str,
        guid: String,
        items: Vec<ItemView>,
    },
    EndMarker,
}

#[derive(Serialize)]
struct ItemView {
    slot: u8,
    #[serde(rename = "type")]
    item_type: &'static str,
    layout: String,
    size: usize,
    deprecated: bool,
    fields: serde_json::Value,
}

impl<'a> From<&'a Lump> for LumpView<'a> {
    fn from(lump: &'a Lump) -> Self {
        let body = match &lump.body {
            LumpBody::Container(children) => BodyView::Container {
                children: children.iter().map(LumpView::from).collect(),
            },
            LumpBody::NetworkV2(n) => BodyView::Network {
                node_name: &n.node_name,
                mac: format_mac(&n.mac),
                server_ip: Some(n.server_ip.to_string()),
                server_port: n.server_port,
            },
            LumpBody::NetworkV3(n) => BodyView::Network {
                node_name: &n.node_name,
                mac: format_mac(&n.mac),
                server_ip: None,
                server_port: n.server_port,
            },
            LumpBody::SessionV1(s) => BodyView::Session {
                server_ip: s.server_ip.to_string(),
                server_port: s.server_port,
                config_token: None,
            },
            LumpBody::SessionV2(s) => BodyView::Session {
                server_ip: s.server_ip.to_string(),
                server_port: s.server_port,
                config_token: Some(s.config_token.to_string()),
            },
            LumpBody::Decoders(table) => BodyView::Decoders {
                version: table.version.tag(),
                guid: table.guid.to_string(),
                items: table.items.iter().map(ItemView::from).collect(),
            },
            LumpBody::EndMarker => BodyView::EndMarker,
        };
        Self {
            tag: &lump.name,
            size: lump.declared_size,
            deprecated: lump.is_deprecated(),
            body,
        }
    }
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            slot: item.slot,
            item_type: item.item_type().name(),
            layout: format!("{:?}", item.decoder.kind()),
            size: item.size(),
            deprecated: item.is_deprecated(),
            fields: fields::item_fields(&item.decoder),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lump_types::LumpKind;

    #[test]
    fn container_and_marker_shape() {
        let root = RootLump {
            lump: Lump {
                name: "Bcs0008".to_string(),
                declared_size: 10,
                kind: LumpKind::Root,
                body: LumpBody::Container(vec![Lump {
                    name: "ENDEND1".to_string(),
                    declared_size: 0,
                    kind: LumpKind::EndMarker,
                    body: LumpBody::EndMarker,
                }]),
            },
            trailing_bytes: 4,
        };

        let json = render(&root, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"], 20);
        assert_eq!(value["trailing_bytes"], 4);
        assert_eq!(value["root"]["kind"], "container");
        assert_eq!(value["root"]["children"][0]["tag"], "ENDEND1");
        assert_eq!(value["root"]["children"][0]["kind"], "end_marker");
    }
}
