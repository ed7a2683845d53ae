//! Byte-image builders for integration tests, CLI tests and benchmarks.
//!
//! The workspace has no encoder, so every image under test is assembled
//! here field by field, in the order the firmware writes them.

pub mod fixtures;
