//! Round-trip tests: parse, serialize, parse again.

use rstest::rstest;
use xorgconf::syntax::{FormatOptions, Snapshot, parse_content, render};

use crate::helpers::config_helpers::*;
use crate::helpers::source_fixtures::*;

#[rstest]
#[case(SCREEN_AND_DEVICE)]
#[case(BOOLEAN_OPTION)]
#[case(WORKSTATION)]
#[case(LEGACY_POSITIONAL)]
fn test_roundtrip_model_equality(#[case] source: &str) {
    let config = parse_ok(source);
    let again = reparse(&config);
    assert_eq!(config.model(), again.model());
}

#[test]
fn test_render_is_stable() {
    let first = WORKSTATION_CONFIG.to_text();
    let second = reparse(&WORKSTATION_CONFIG).to_text();
    assert_eq!(first, second);
}

#[test]
fn test_render_layout() {
    let text = parse_ok(SCREEN_AND_DEVICE).to_text();
    assert_eq!(
        text,
        "Section \"Screen\"\n\tIdentifier \"Screen0\"\n\tDevice \"Device0\"\nEndSection\n\n\
         Section \"Device\"\n\tIdentifier \"Device0\"\n\tDriver \"nvidia\"\nEndSection\n\n"
    );
}

#[test]
fn test_comments_survive_in_place() {
    let text = WORKSTATION_CONFIG.to_text();
    assert!(text.starts_with("# xorg.conf written by a configuration tool\n# keep the layout first\n\n"));
    assert!(text.contains("\tVertRefresh 43.0 - 60.0\n\t# tuned by hand\nEndSection\n"));
    assert!(text.contains("\t\tModes \"1920x1080\" \"1280x1024\"\n\t\t# fallback below\n\tEndSubSection\n"));
}

#[test]
fn test_space_indentation() {
    let model = parse_content(DEVICE_ONLY).unwrap();
    let options = FormatOptions {
        tab_size: 2,
        insert_spaces: true,
    };
    let text = render(&Snapshot::from(model), &options);
    assert!(text.contains("\n  Identifier \"Card0\"\n"));
}
