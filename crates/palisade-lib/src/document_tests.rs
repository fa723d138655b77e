use palisade_core::{LimitsConfig, SourceAggregate};

use crate::{Document, DocumentParser, ErrorKind};

fn with_big_stack<T: Send>(f: impl FnOnce() -> T + Send) -> T {
    std::thread::scope(|s| {
        std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn_scoped(s, f)
            .unwrap()
            .join()
            .unwrap()
    })
}

fn nested_inline_fragments(depth: usize) -> String {
    format!("{{ {}a{} }}", "... { ".repeat(depth), " }".repeat(depth))
}

#[test]
fn simple_query_succeeds() {
    let doc = DocumentParser::default().parse_str("{ hero { name } }").unwrap();
    assert_eq!(doc.operation_count(), 1);
    assert_eq!(doc.text(), "{ hero { name } }");
}

#[test]
fn two_million_chars_exceed_the_default_ceiling() {
    let input = format!("{{{}}}", " a".repeat(1_000_000));
    assert_eq!(input.chars().count(), 2_000_002);

    let err = DocumentParser::default().parse_str(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CharacterLimitExceeded);
    assert_eq!(
        err.message(),
        "More than 1048576 characters have been presented. To prevent Denial Of Service attacks, parsing has been cancelled."
    );
}

#[test]
fn char_ceiling_is_exact() {
    let input = "{ abc }"; // 7 characters
    let at = |n: i32| DocumentParser::new(LimitsConfig::default().with_max_chars(n)).parse_str(input);

    assert!(at(8).is_ok());
    assert!(at(7).is_ok());
    assert_eq!(at(6).unwrap_err().kind(), ErrorKind::CharacterLimitExceeded);
}

#[test]
fn char_ceiling_counts_characters_not_bytes() {
    let input = r#"{ f(s: "ééé") }"#;
    let chars = input.chars().count() as i32;
    assert!(input.len() as i32 > chars);

    let parser = |n: i32| DocumentParser::new(LimitsConfig::default().with_max_chars(n));
    assert!(parser(chars).parse_str(input).is_ok());
    assert_eq!(
        parser(chars - 1).parse_str(input).unwrap_err().kind(),
        ErrorKind::CharacterLimitExceeded
    );
}

#[test]
fn char_ceiling_spans_segments() {
    let mut src = SourceAggregate::new();
    src.add(Some("a.graphql"), "{ a }\n").unwrap();
    src.add(Some("b.graphql"), "{ b }\n").unwrap();

    let parser = |n: i32| DocumentParser::new(LimitsConfig::default().with_max_chars(n));
    assert!(parser(12).parse(&src).is_ok());
    assert_eq!(
        parser(11).parse(&src).unwrap_err().kind(),
        ErrorKind::CharacterLimitExceeded
    );
}

#[test]
fn oversized_source_is_a_character_limit_error() {
    let err = crate::Error::from(palisade_core::ReadError::SourceTooLarge {
        len: u32::MAX as usize + 1,
    });
    assert_eq!(err.kind(), ErrorKind::CharacterLimitExceeded);
    assert_eq!(
        err.message(),
        "Source of 4294967296 bytes exceeds the 4 GiB offset range."
    );
}

#[test]
fn deep_nesting_exceeds_default_depth() {
    let input = nested_inline_fragments(501);
    let err = DocumentParser::default().parse_str(&input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RuleDepthExceeded);
    assert_eq!(
        err.message(),
        "More than 500 deep 'grammar' rules have been entered. To prevent Denial Of Service attacks, parsing has been cancelled."
    );
}

#[test]
fn deep_nesting_with_depth_disabled_succeeds() {
    let input = nested_inline_fragments(501);
    let parser = DocumentParser::new(LimitsConfig::default().with_max_depth(0));
    let doc = parser.parse_str(&input).unwrap();
    assert_eq!(doc.operation_count(), 1);
}

#[test]
fn parse_result_is_one_pointer_wide() {
    assert_eq!(
        std::mem::size_of::<crate::Result<()>>(),
        std::mem::size_of::<usize>()
    );
}

#[test]
fn stray_brace_is_trailing_input() {
    let err = DocumentParser::default().parse_str("{ a } }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TrailingInput);
    assert_eq!(err.span().unwrap().offset, 6);
}

#[test]
fn missing_value_is_one_syntax_error() {
    let err = DocumentParser::default().parse_str("{ a: }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SyntaxError);
    assert_eq!(err.offending_text(), Some("}"));
    assert_eq!(err.span().unwrap().offset, 5);
}

#[test]
fn trust_mode_admits_everything_well_formed() {
    let big = format!("{{{}}}", " a".repeat(1_000_000));
    let deep = nested_inline_fragments(600);
    let parser = DocumentParser::trusted();

    assert!(parser.parse_str(&big).is_ok());
    assert!(with_big_stack(|| parser.parse_str(&deep)).is_ok());
    assert_eq!(
        parser.parse_str("{ a } }").unwrap_err().kind(),
        ErrorKind::TrailingInput
    );
}

#[test]
fn disabled_char_check_keeps_others() {
    let big = format!("{{{}}}", " a".repeat(1_000_000));
    let parser = DocumentParser::new(LimitsConfig::default().with_max_chars(0));
    assert_eq!(
        parser.parse_str(&big).unwrap_err().kind(),
        ErrorKind::TokenCountExceeded
    );
}

#[test]
fn concurrent_parses_share_one_parser() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DocumentParser>();
    assert_send_sync::<Document>();

    let parser = DocumentParser::new(LimitsConfig::default().with_max_tokens(10));
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                s.spawn(move || {
                    let fields = if i % 2 == 0 { 2 } else { 20 };
                    let input = format!("{{ {} }}", "f ".repeat(fields));
                    parser.parse_str(&input).map(|d| d.operation_count())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, result) in results.into_iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(result.unwrap(), 1);
        } else {
            assert_eq!(result.unwrap_err().kind(), ErrorKind::TokenCountExceeded);
        }
    }
}

#[test]
fn error_serializes() {
    let err = DocumentParser::default().parse_str("{ a } }").unwrap_err();
    insta::assert_yaml_snapshot!(err, @r#"
    kind: TrailingInput
    span:
      source_name: ~
      line: 1
      column: 6
      offset: 6
    message: "Invalid syntax encountered. There are extra tokens in the text that have not been consumed. Offending token '}'"
    offending_text: "}"
    "#);
}
