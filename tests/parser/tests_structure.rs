//! Structural parser tests: nesting, tags and comment placement.

use rstest::rstest;
use xorgconf::syntax::{CommentOwner, parse_content};
use xorgconf::{ErrorCode, SectionType};

#[rstest]
#[case("Section \"Bogus\"\nEndSection\n", ErrorCode::E0101)]
#[case("Section \"Device\"\nSection \"Screen\"\nEndSection\n", ErrorCode::E0102)]
#[case("Section \"Device\"\n\tIdentifier \"D\"\n", ErrorCode::E0103)]
#[case("EndSection\n", ErrorCode::E0104)]
#[case("Section \"Screen\"\nSubSection \"Display\"\nEndSection\n", ErrorCode::E0104)]
#[case("SubSection \"Display\"\n", ErrorCode::E0105)]
#[case("Section \"Screen\"\nSubSection \"A\"\nSubSection \"B\"\n", ErrorCode::E0105)]
#[case("Section \"Screen\"\nEndSubSection\n", ErrorCode::E0106)]
#[case("Section\n", ErrorCode::E0107)]
#[case("Identifier \"Card0\"\n", ErrorCode::E0108)]
fn test_nesting_errors(#[case] source: &str, #[case] code: ErrorCode) {
    let err = parse_content(source).unwrap_err();
    assert_eq!(err.code, code, "{source:?} gave {err}");
}

#[test]
fn test_error_carries_line_number() {
    let err = parse_content("# header\n\nSection \"Nope\"\nEndSection\n").unwrap_err();
    assert_eq!(err.line, Some(3));
    assert!(err.to_string().contains("line 3"));
}

#[test]
fn test_keywords_and_names_are_case_insensitive() {
    let model = parse_content("section \"device\"\n\tIdentifier \"D\"\nendsection\n").unwrap();
    assert_eq!(model.count(SectionType::Device), 1);
}

#[test]
fn test_comment_routing() {
    let source = "# top\nSection \"Screen\"\n\t# in section\n\tIdentifier \"S\"\n\tSubSection \"Display\"\n\t\t# in subsection\n\tEndSubSection\nEndSection\n";
    let model = parse_content(source).unwrap();
    assert_eq!(model.free_comments(), &["# top".to_string()]);

    let screen = model.handle_at(SectionType::Screen, 0).unwrap();
    assert_eq!(model.comments_for(CommentOwner::Section(screen)), &["# in section".to_string()]);
    let (display, _) = model.subsections_of(screen).next().unwrap();
    assert_eq!(
        model.comments_for(CommentOwner::SubSection(display)),
        &["# in subsection".to_string()]
    );
}

#[test]
fn test_sections_keep_parse_order_per_type() {
    let source = "Section \"Device\"\n\tIdentifier \"A\"\nEndSection\nSection \"Screen\"\n\tIdentifier \"S\"\nEndSection\nSection \"Device\"\n\tIdentifier \"B\"\nEndSection\n";
    let model = parse_content(source).unwrap();
    assert_eq!(model.lines(SectionType::Device, 1).unwrap(), &["Identifier \"B\"".to_string()]);
    assert_eq!(
        model.section_types().collect::<Vec<_>>(),
        vec![SectionType::Device, SectionType::Screen]
    );
}
