use std::net::Ipv4Addr;

use lump_wire::{ByteCursor, Guid};

use crate::error::TypeError;

/// Last broker session, `Sson001` layout.
///
/// ```text
/// server_ip[4] │ server_port (u16 LE)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfoV1 {
  pub server_ip: Ipv4Addr,
  pub server_port: u16,
}

impl SessionInfoV1 {
  pub const SIZE: u16 = 6;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-payload.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    Ok(Self {
      server_ip: Ipv4Addr::from(cursor.read_array::<4>()?),
      server_port: cursor.read_u16_le()?,
    })
  }
}

/// Last broker session, `Sson002` layout.
///
/// Adds the configuration token the broker handed out, which lets the
/// device skip a full configuration download when the token still matches.
///
/// ```text
/// server_ip[4] │ server_port (u16 LE) │ config_token (16-byte GUID)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionInfoV2 {
  pub server_ip: Ipv4Addr,
  pub server_port: u16,
  pub config_token: Guid,
}

impl SessionInfoV2 {
  pub const SIZE: u16 = 22;

  /// # Errors
  ///
  /// [`TypeError::Wire`] if the image ends mid-payload.
  pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self, TypeError> {
    Ok(Self {
      server_ip: Ipv4Addr::from(cursor.read_array::<4>()?),
      server_port: cursor.read_u16_le()?,
      config_token: cursor.read_guid()?,
    })
  }
}
