use indoc::indoc;
use palisade_core::{LimitsConfig, SourceAggregate};

use super::events::{EventRecorder, RecordedEvent};
use crate::{DocumentParser, ErrorKind};

#[test]
fn missing_value_reports_one_error_at_brace() {
    let src = SourceAggregate::one_liner("{ a: }").unwrap();
    let mut recorder = EventRecorder::new();
    let err = DocumentParser::default()
        .parse_with_listener(&src, &mut recorder)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.offending_text(), Some("}"));
    assert_eq!(
        err.message(),
        "Invalid syntax with offending token '}': expected a field name"
    );
    let span = err.span().unwrap();
    assert_eq!((span.line, span.column, span.offset), (1, 5, 5));
    assert_eq!(span.source_name, None);

    let anomalies = recorder
        .events()
        .iter()
        .filter(|e| matches!(e, RecordedEvent::SyntaxAnomaly { .. }))
        .count();
    assert_eq!(anomalies, 1);
}

#[test]
fn later_errors_are_never_seen() {
    // Three independent mistakes; only the first is reported.
    let err = DocumentParser::default()
        .parse_str("{ a(: ) b: : c }")
        .unwrap_err();
    assert_eq!(err.offending_text(), Some(":"));
    assert_eq!(err.span().unwrap().offset, 4);
}

#[test]
fn located_in_named_segment() {
    let mut src = SourceAggregate::new();
    src.add(Some("hero.graphql"), "query Hero {\n  hero { name }\n}\n").unwrap();
    src.add(
        Some("friends.graphql"),
        indoc! {"
        fragment Friends on Character {
          friends {
        }
        "},
    )
    .unwrap();

    let err = DocumentParser::default().parse(&src).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.offending_text(), Some("}"));

    let span = err.span().unwrap();
    assert_eq!(span.source_name.as_deref(), Some("friends.graphql"));
    assert_eq!((span.line, span.column), (3, 0));
    assert_eq!(span.to_string(), "friends.graphql:3:0");
}

#[test]
fn end_of_input_is_located() {
    let err = DocumentParser::default().parse_str("{\n  a {").unwrap_err();
    assert_eq!(err.offending_text(), Some("<EOF>"));
    let span = err.span().unwrap();
    assert_eq!((span.line, span.column, span.offset), (2, 5, 7));
}

#[test]
fn trust_mode_still_rejects_bad_syntax() {
    let err = DocumentParser::new(LimitsConfig::trusted())
        .parse_str("{ a: }")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
}
