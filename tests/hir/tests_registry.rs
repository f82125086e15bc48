//! Identifier registry tests.

use xorgconf::hir::IdentifierRegistry;
use xorgconf::syntax::parse_content;
use xorgconf::{ErrorCode, SectionType};

use crate::helpers::source_fixtures::*;

#[test]
fn test_registry_for_screen_and_device() {
    let model = parse_content(SCREEN_AND_DEVICE).unwrap();
    let registry = IdentifierRegistry::build(&model).unwrap();

    let screens: Vec<(&str, usize)> = registry
        .entries(SectionType::Screen)
        .iter()
        .map(|e| (e.identifier.as_str(), e.position))
        .collect();
    assert_eq!(screens, vec![("Screen0", 0)]);
    assert_eq!(registry.identifier_at(SectionType::Device, 0), Some("Device0"));
}

#[test]
fn test_registry_covers_every_identified_type() {
    let model = parse_content(WORKSTATION).unwrap();
    let registry = IdentifierRegistry::build(&model).unwrap();
    assert_eq!(registry.len(SectionType::InputDevice), 2);
    assert_eq!(registry.len(SectionType::Device), 2);
    assert_eq!(registry.len(SectionType::Monitor), 1);
    assert_eq!(registry.len(SectionType::ServerLayout), 1);
    assert_eq!(registry.position_of(SectionType::ServerLayout, "default layout"), Some(0));
    assert_eq!(registry.len(SectionType::ServerFlags), 0);
}

#[test]
fn test_missing_identifier_names_type_and_position() {
    let source = "Section \"Device\"\n\tIdentifier \"A\"\nEndSection\nSection \"Device\"\n\tDriver \"nv\"\nEndSection\n";
    let model = parse_content(source).unwrap();
    let err = IdentifierRegistry::build(&model).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0201);
    assert!(err.message.contains("Device"));
    assert!(err.message.contains("position 1"));
}
