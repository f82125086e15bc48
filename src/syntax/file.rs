//! Reading and writing xorg.conf text.
//!
//! A path source is opened, read and closed here. Readers and writers are
//! borrowed; their lifetime belongs to the caller.

use std::fs::OpenOptions;
use std::io::{self, Read, Write};
use std::path::Path;

use tracing::debug;

/// How a path target is opened for writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Replace the file's contents
    #[default]
    Truncate,
    /// Append to the file (used by tests to collect several renders)
    Append,
}

/// Load file contents; invalid UTF-8 is replaced rather than rejected
pub fn load_file(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read xorg.conf");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read everything from an open reader
pub fn read_source(mut reader: impl Read) -> io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write text to a path, truncating or appending
pub fn write_file(path: &Path, text: &str, mode: WriteMode) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(mode == WriteMode::Append)
        .truncate(mode == WriteMode::Truncate)
        .open(path)?;
    file.write_all(text.as_bytes())?;
    debug!(path = %path.display(), ?mode, bytes = text.len(), "wrote xorg.conf");
    Ok(())
}

/// Write text to an open writer as UTF-8 bytes
pub fn write_stream(mut writer: impl Write, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}
