//! Driver and device helper tests.

use xorgconf::{ParseOptions, SectionType, XorgConfig};

use crate::helpers::config_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_devices_follow_default_layout() {
    let config = &*WORKSTATION_CONFIG;
    assert_eq!(config.get_devices_in_server_layout(0).unwrap(), vec![0]);
    assert_eq!(config.get_devices_in_use(), vec![0]);
    assert!(config.is_driver_enabled("radeon"));
    assert!(!config.is_driver_enabled("intel"));
    assert!(config.section_has_driver("intel", None));
}

#[test]
fn test_devices_without_layout_use_first_screen() {
    let config = parse_ok(SCREEN_AND_DEVICE);
    assert_eq!(config.get_devices_in_use(), vec![0]);
}

#[test]
fn test_devices_without_screen_are_all_in_use() {
    let source = format!("{DEVICE_ONLY}\nSection \"Device\"\n\tIdentifier \"Card1\"\n\tDriver \"nv\"\nEndSection\n");
    let config = parse_ok(&source);
    assert_eq!(config.get_devices_in_use(), vec![0, 1]);
    assert!(config.is_driver_enabled("nv"));
}

#[test]
fn test_screen_device_relationships() {
    let source = r#"
Section "Device"
	Identifier "Shared"
EndSection

Section "Screen"
	Identifier "Left"
	Device "Shared"
EndSection

Section "Screen"
	Identifier "Right"
	Device "Shared"
EndSection
"#;
    let config = parse_ok(source);
    let relationships = config.get_screen_device_relationships();
    assert_eq!(relationships.len(), 1);
    assert_eq!(relationships[&0], vec![0, 1]);
}

#[test]
fn test_fix_broken_references_creates_stubs() {
    let mut config = XorgConfig::parse_with(SCREEN_WITH_BROKEN_DEVICE, ParseOptions::lenient()).unwrap();
    assert_eq!(config.fix_broken_references().unwrap(), 1);
    assert_eq!(config.get_position(SectionType::Device, "Device0").unwrap(), 1);
    assert_eq!(config.get_devices_in_use(), vec![1]);
    parse_ok(&config.to_text());
}

#[test]
fn test_set_driver_on_missing_section() {
    let mut config = parse_ok(DEVICE_ONLY);
    assert!(config.set_driver(SectionType::Device, "nv", 4).is_err());
    assert_eq!(config.get_driver(SectionType::Device, 0).unwrap(), "intel");
}
