//! File and stream I/O tests.

use std::io::Cursor;

use tempfile::TempDir;
use xorgconf::{SectionType, WriteMode, XorgConfig, XorgError};

use crate::helpers::source_fixtures::*;

#[test]
fn test_read_and_write_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("xorg.conf");
    std::fs::write(&path, WORKSTATION).unwrap();

    let mut config = XorgConfig::from_path(&path).unwrap();
    config.remove_section(SectionType::Module, None, None).unwrap();
    config.write_to_path(&path, WriteMode::Truncate).unwrap();

    let reread = XorgConfig::from_path(&path).unwrap();
    assert_eq!(reread.section_count(SectionType::Module), 0);
    assert_eq!(reread.model(), config.model());
}

#[test]
fn test_append_mode_collects_renders() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.conf");
    let config = XorgConfig::parse(DEVICE_ONLY).unwrap();

    config.write_to_path(&path, WriteMode::Append).unwrap();
    config.write_to_path(&path, WriteMode::Append).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, config.to_text().repeat(2));
}

#[test]
fn test_reader_and_writer() {
    let config = XorgConfig::from_reader(Cursor::new(SCREEN_AND_DEVICE.as_bytes())).unwrap();
    let mut out = Vec::new();
    config.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), config.to_text());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = XorgConfig::from_path(dir.path().join("absent.conf")).unwrap_err();
    assert!(matches!(err, XorgError::Io(_)));
}
