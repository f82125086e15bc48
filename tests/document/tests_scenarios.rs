//! End-to-end scenarios over small documents.

use xorgconf::{OptionStyle, OptionValue, SectionType, XorgError};

use crate::helpers::config_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_screen_and_device() {
    let config = parse_ok(SCREEN_AND_DEVICE);
    assert_eq!(config.registry().identifier_at(SectionType::Screen, 0), Some("Screen0"));
    assert_eq!(config.registry().identifier_at(SectionType::Device, 0), Some("Device0"));
    assert_eq!(config.get_value(SectionType::Device, "Driver", 0).unwrap(), "nvidia");
    assert!(config.get_broken_references().is_empty());
}

#[test]
fn test_renamed_device_breaks_reference() {
    let config = parse_lenient(SCREEN_WITH_BROKEN_DEVICE);
    let broken = config.get_broken_references();
    assert!(broken[&SectionType::Device].contains("Device0"));
    assert!(matches!(
        xorgconf::XorgConfig::parse(SCREEN_WITH_BROKEN_DEVICE),
        Err(XorgError::Structural(_))
    ));
}

#[test]
fn test_duplicate_device_identifiers() {
    let err = xorgconf::XorgConfig::parse(DUPLICATE_DEVICES).unwrap_err();
    assert!(err.is_structural());
    assert!(err.to_string().contains("\"Dev\" (2 times)"));
}

#[test]
fn test_option_without_value() {
    let config = parse_ok(BOOLEAN_OPTION);
    assert_eq!(config.get_value(SectionType::Device, "Foo", 0).unwrap(), "True");
}

#[test]
fn test_added_option_survives_serialization() {
    let mut config = parse_ok(DEVICE_ONLY);
    config
        .add_option(SectionType::Device, "VideoRam", "16384", OptionStyle::Keyword, Some(0))
        .unwrap();
    let again = reparse(&config);
    assert_eq!(again.get_value(SectionType::Device, "VideoRam", 0).unwrap(), "16384");
}

#[test]
fn test_bare_word_rejected() {
    assert!(matches!(
        xorgconf::XorgConfig::parse(BARE_WORD),
        Err(XorgError::Structural(_))
    ));
}

#[test]
fn test_multiple_values() {
    let config = &*WORKSTATION_CONFIG;
    let loads = config.get_value(SectionType::Module, "Load", 0).unwrap();
    assert_eq!(loads, OptionValue::Multiple(vec!["glx".into(), "dri2".into()]));
    assert_eq!(
        config.get_subsection_value(SectionType::Screen, "Display", "Depth", 0).unwrap(),
        OptionValue::Multiple(vec!["24".into(), "16".into()])
    );
}

#[test]
fn test_workstation_queries() {
    let config = &*WORKSTATION_CONFIG;
    assert_eq!(config.get_position(SectionType::InputDevice, "Mouse0").unwrap(), 1);
    assert_eq!(config.get_identifier(SectionType::Monitor, 0).unwrap(), "Monitor0");
    assert_eq!(
        config.get_value(SectionType::Monitor, "HorizSync", 0).unwrap(),
        "28.0 - 64.0"
    );
    assert_eq!(
        config.get_reference_value(SectionType::ServerLayout, "Screen", 0).unwrap(),
        "Screen0"
    );
    assert_eq!(
        config.subsection_names(SectionType::Screen, 0).unwrap(),
        vec!["Display".to_string(), "Display".to_string()]
    );
    let duplicates = config.check_duplicate_options();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[&SectionType::Module][&0]["load"], 2);

    let refs = config.get_references(SectionType::Screen, 0, None).unwrap();
    assert!(refs[&SectionType::Device].contains("Card0"));
    assert!(refs[&SectionType::Monitor].contains("Monitor0"));
}
