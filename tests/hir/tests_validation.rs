//! Validation rule tests, run through document construction.

use rstest::rstest;
use xorgconf::{ErrorCode, ParseOptions, SectionType, XorgConfig};

use crate::helpers::config_helpers::*;
use crate::helpers::source_fixtures::*;

#[test]
fn test_workstation_passes_every_rule() {
    let config = &*WORKSTATION_CONFIG;
    assert!(config.get_broken_references().is_empty());
    assert!(config.get_duplicate_identifiers().is_empty());
    assert_eq!(
        config.get_default_server_layout().unwrap().as_deref(),
        Some("Default Layout")
    );
}

#[test]
fn test_duplicate_identifiers_are_fatal() {
    assert_eq!(rejection_code(DUPLICATE_DEVICES), ErrorCode::E0203);

    let unchecked = XorgConfig::parse_with(DUPLICATE_DEVICES, ParseOptions::unchecked()).unwrap();
    let duplicates = unchecked.get_duplicate_identifiers();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[&SectionType::Device]["Dev"], 2);
}

#[test]
fn test_broken_reference_is_fatal_and_queryable() {
    assert_eq!(rejection_code(SCREEN_WITH_BROKEN_DEVICE), ErrorCode::E0401);
    let config = parse_lenient(SCREEN_WITH_BROKEN_DEVICE);
    assert!(config.get_broken_references()[&SectionType::Device].contains("Device0"));
}

#[test]
fn test_bare_word_is_malformed() {
    assert_eq!(rejection_code(BARE_WORD), ErrorCode::E0301);
}

#[rstest]
#[case("Section \"Files\"\n\t/usr/share/fonts\nEndSection\n")]
#[case("Section \"Monitor\"\n\tIdentifier \"M\"\n\tEndMode\nEndSection\n")]
#[case("Section \"Device\"\n\tIdentifier \"\"\nEndSection\n")]
fn test_syntax_exemptions(#[case] source: &str) {
    parse_ok(source);
}

#[rstest]
#[case("Section \"Module\"\n\t-Load \"glx\"\nEndSection\n")]
#[case("Section \"Screen\"\n\tIdentifier \"S\"\n\tSubSection \"Display\"\n\t\tDepth\n\tEndSubSection\nEndSection\n")]
#[case("Section \"ServerFlags\"\n\t1Option \"x\"\nEndSection\n")]
fn test_syntax_violations(#[case] source: &str) {
    assert_eq!(rejection_code(source), ErrorCode::E0301);
}

#[test]
fn test_repeated_identifier_line() {
    let source = "Section \"Device\"\n\tIdentifier \"A\"\n\tIdentifier \"B\"\nEndSection\n";
    assert_eq!(rejection_code(source), ErrorCode::E0202);
}

#[test]
fn test_layout_rules() {
    let no_screen = "Section \"ServerLayout\"\n\tIdentifier \"L\"\nEndSection\n";
    assert_eq!(rejection_code(no_screen), ErrorCode::E0501);

    let unknown_default = WORKSTATION.replace(
        "Option \"DefaultServerLayout\" \"Default Layout\"",
        "Option \"DefaultServerLayout\" \"Elsewhere\"",
    );
    assert_eq!(rejection_code(&unknown_default), ErrorCode::E0503);

    let second_flags = format!(
        "{WORKSTATION}\nSection \"ServerFlags\"\n\tOption \"DefaultServerLayout\" \"Default Layout\"\nEndSection\n"
    );
    assert_eq!(rejection_code(&second_flags), ErrorCode::E0502);
}

#[test]
fn test_legacy_positional_reference_out_of_range_is_ignored() {
    let config = parse_ok(LEGACY_POSITIONAL);
    assert!(config.get_broken_references().is_empty());
    let value = config.get_reference_value(SectionType::Device, "Screen", 0).unwrap();
    assert_eq!(value, "Screen0");
    let dangling = config.get_reference_value(SectionType::Device, "Screen", 1).unwrap();
    assert_eq!(dangling, "1");
}

#[test]
fn test_empty_source_builds_empty_document() {
    let config = parse_ok("\n\n   \n");
    assert!(config.registry().is_empty());
    assert_eq!(config.section_count(SectionType::Device), 0);
}

#[test]
fn test_comment_only_source_is_valid() {
    let config = parse_ok("# nothing configured\n");
    assert_eq!(config.to_text(), "# nothing configured\n\n");
}
