//! Syntax layer tests
//!
//! - Serializer output and round-trip equality
//! - Reading from and writing to files and streams

pub mod tests_io;
pub mod tests_roundtrip;
