#![warn(clippy::pedantic)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod reader;

mod budget;
mod table;

pub use config::DecoderConfig;
pub use decoder::{RootLump, StorageDecoder};
pub use error::{DecodeError, ErrorKind};
pub use reader::{decode_reader, decode_reader_with_config};
