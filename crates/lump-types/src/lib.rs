#![warn(clippy::pedantic)]

pub mod error;
pub mod flags;
pub mod pin;
pub mod output;
pub mod sensor;
pub mod servo_turnout;
pub mod turntable;
pub mod quad_inverter;
pub mod item_type;
pub mod item;
pub mod network;
pub mod session;
pub mod lump_type;
pub mod lump;

pub use error::TypeError;
pub use flags::DecoderFlags;
pub use item::{DecoderItem, Item};
pub use item_type::{DecodersVersion, ItemKind, ItemType};
pub use lump::{DecodersTable, Lump, LumpBody};
pub use lump_type::LumpKind;
