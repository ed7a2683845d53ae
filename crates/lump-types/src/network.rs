use std::fmt::Write as _;
use std::net::Ipv4Addr;

use lump_wire::ByteCursor;

use crate::error::TypeError;

/// Width of the NUL-padded node name field.
pub const NODE_NAME_LEN: usize = 16;

/// Format a MAC address as `aa:bb:cc:dd:ee:ff`.
#[must_use]
pub fn format_mac(mac: &[u8; 6]) -> String {
  mac.iter().fold(String::with_capacity(17), |mut s, b| {
    if !s.is_empty() {
      s.push(':');
    }
    let _ = write!(s, "{b:02x}");
    s
  })
}

/// Network identity, `NetU002` layout: the broker address was configured
/// by hand and stored on the device.
///
/// ```text
/// ┌────────┬──────┬─────────────┬──────────────────────────────┐
/// │ Offset │ Size │ Name        │ Description                  │
/// ├────────┼──────┼─────────────┼──────────────────────────────┤
/// │ 0      │ 16   │ node_name   │ ASCII, NUL-padded            │
/// │ 16     │ 6    │ mac         │ Ethernet MAC                 │
/// │ 22     │ 4    │ server_ip   │ Broker IPv4 address          │
/// │ 26     │ 2    │ server_port │ Broker UDP port (u16 LE)     │
/// └────────┴──────┴─────────────┴──────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInfoV2 {
  pub node_name: String,
  pub mac: [u8; 6],
  pub server_ip: Ipv4Addr,
  pub server_port: u16,
}

impl NetworkInfoV2 {
  pub const SIZE: u16 = 28;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-payload.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    Ok(Self {
      node_name: cursor.read_fixed_ascii(NODE_NAME_LEN)?,
      mac: cursor.read_array()?,
      server_ip: Ipv4Addr::from(cursor.read_array::<4>()?),
      server_port: cursor.read_u16_le()?,
    })
  }
}

/// Network identity, `NetU003` layout: the broker is found by broadcast
/// discovery, so only the port is stored.
///
/// ```text
/// node_name[16] │ mac[6] │ server_port (u16 LE)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkInfoV3 {
  pub node_name: String,
  pub mac: [u8; 6],
  pub server_port: u16,
}

impl NetworkInfoV3 {
  pub const SIZE: u16 = 24;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-payload.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    Ok(Self {
      node_name: cursor.read_fixed_ascii(NODE_NAME_LEN)?,
      mac: cursor.read_array()?,
      server_port: cursor.read_u16_le()?,
    })
  }
}
