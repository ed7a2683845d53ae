#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod guid;
pub mod header;

pub use cursor::ByteCursor;
pub use error::WireError;
pub use guid::Guid;
pub use header::{HEADER_SIZE, LumpHeader, ROOT_TAG, TAG_LEN};
