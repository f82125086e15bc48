//! Tokenizer and option-line tests.

use rstest::rstest;
use xorgconf::SectionType;
use xorgconf::parser::{OptionLine, Reference, tokenize, tokenize_with_empty};

fn texts(line: &str) -> Vec<String> {
    tokenize(line).into_iter().map(|t| t.text.to_string()).collect()
}

#[rstest]
#[case("Identifier \"Card0\"", &["Identifier", "Card0"])]
#[case("Option \"AccelMethod\" \"glamor\"", &["Option", "AccelMethod", "glamor"])]
#[case("Screen 0 \"Screen0\" 0 0", &["Screen", "0", "Screen0", "0", "0"])]
#[case("HorizSync 28.0 - 64.0", &["HorizSync", "28.0", "-", "64.0"])]
#[case("Identifier \"Default Layout\"", &["Identifier", "Default Layout"])]
#[case("Driver \"nv\" # legacy driver", &["Driver", "nv"])]
#[case("Modes \"1920x1080\"\t\"1280x1024\"", &["Modes", "1920x1080", "1280x1024"])]
fn test_tokenize(#[case] line: &str, #[case] expected: &[&str]) {
    assert_eq!(texts(line), expected);
}

#[test]
fn test_text_adjacent_to_quotes_joins_token() {
    assert_eq!(texts("Load pre\"fix post\"fix"), vec!["Load", "prefix postfix"]);
}

#[test]
fn test_empty_value_only_in_include_empty_variant() {
    assert_eq!(texts("Identifier \"\""), vec!["Identifier"]);
    let tokens = tokenize_with_empty("Identifier \"\"");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].quoted);
    assert_eq!(tokens[1].as_str(), "");
}

#[rstest]
#[case(SectionType::ServerLayout, "Screen 0 \"Screen0\" 0 0", Some((SectionType::Screen, Reference::ByIdentifier("Screen0".into()))))]
#[case(SectionType::ServerLayout, "InputDevice \"Mouse0\" \"CorePointer\"", Some((SectionType::InputDevice, Reference::ByIdentifier("Mouse0".into()))))]
#[case(SectionType::Screen, "Device \"Card0\"", Some((SectionType::Device, Reference::ByIdentifier("Card0".into()))))]
#[case(SectionType::Device, "Screen 1", Some((SectionType::Screen, Reference::ByPosition(1))))]
#[case(SectionType::Screen, "Option \"Device\" \"x\"", None)]
#[case(SectionType::Device, "Driver \"nv\"", None)]
fn test_references(#[case] section: SectionType, #[case] line: &str, #[case] expected: Option<(SectionType, Reference)>) {
    let parsed = OptionLine::parse(line).unwrap();
    assert_eq!(parsed.reference(section), expected);
}

#[test]
fn test_option_without_value_reads_true() {
    let line = OptionLine::parse("Option \"Emulate3Buttons\"").unwrap();
    assert!(line.is_option);
    assert_eq!(line.value(), "True");
}

#[test]
fn test_multi_token_value_joined_with_spaces() {
    let line = OptionLine::parse("VertRefresh 43.0 - 60.0").unwrap();
    assert_eq!(line.value(), "43.0 - 60.0");
}
