use indoc::indoc;
use palisade_core::LimitsConfig;

use super::{ValidationErrorKind, ValidationErrors, Validator, validate};
use crate::DocumentParser;

fn findings(input: &str) -> String {
    let doc = DocumentParser::default().parse_str(input).unwrap();
    render(validate(&doc, &LimitsConfig::default()).unwrap())
}

fn render(errors: ValidationErrors) -> String {
    errors
        .into_iter()
        .map(|e| {
            let r = e.range();
            format!(
                "{:?} {}..{}: {}\n",
                e.kind(),
                u32::from(r.start()),
                u32::from(r.end()),
                e.message()
            )
        })
        .collect()
}

#[test]
fn valid_document_has_no_findings() {
    let input = indoc! {r#"
    query Hero($ep: Episode, $withFriends: Boolean!) {
      hero(episode: $ep) {
        ...Name
        friends @include(if: $withFriends) { ...Name }
      }
    }
    fragment Name on Character { name }
    "#};
    assert_eq!(findings(input), "");
}

#[test]
fn lone_anonymous_operation() {
    insta::assert_snapshot!(findings("{ a } query B { b } { c }"), @r"
    LoneAnonymousOperation 0..1: an anonymous operation must be the only defined operation
    LoneAnonymousOperation 20..21: an anonymous operation must be the only defined operation
    ");
}

#[test]
fn single_anonymous_operation_is_fine() {
    assert_eq!(findings("query { a }"), "");
}

#[test]
fn duplicate_operation_name() {
    insta::assert_snapshot!(findings("query A { a } mutation A { b }"), @r"
    DuplicateOperationName 23..24: there can be only one operation named 'A'
    ");
}

#[test]
fn undefined_and_unused_fragments() {
    let input = indoc! {r#"
    { ...Missing ...Used }
    fragment Used on T { a }
    fragment Orphan on T { b }
    "#};
    insta::assert_snapshot!(findings(input), @r"
    UndefinedFragment 5..12: undefined fragment 'Missing'
    UnusedFragment 57..63: fragment 'Orphan' is never used
    ");
}

#[test]
fn fragment_only_used_by_unused_fragment() {
    let input = indoc! {r#"
    { a }
    fragment A on T { ...B }
    fragment B on T { b }
    "#};
    insta::assert_snapshot!(findings(input), @r"
    UnusedFragment 15..16: fragment 'A' is never used
    UnusedFragment 40..41: fragment 'B' is never used
    ");
}

#[test]
fn fragment_cycles() {
    let input = indoc! {r#"
    { ...A ...S }
    fragment A on T { ...B }
    fragment B on T { ...A }
    fragment S on T { ...S }
    "#};
    insta::assert_snapshot!(findings(input), @r"
    FragmentCycle 60..61: cannot spread fragment 'A' within itself via 'B'
    FragmentCycle 85..86: cannot spread fragment 'S' within itself
    ");
}

#[test]
fn undefined_and_unused_variables() {
    let input = indoc! {r#"
    query Q($used: Int, $idle: Int) {
      a(x: $used, y: [$missing], z: {w: $missing})
    }
    "#};
    insta::assert_snapshot!(findings(input), @r"
    UnusedVariable 20..25: variable '$idle' is never used by operation 'Q'
    UndefinedVariable 52..60: variable '$missing' is not defined by operation 'Q'
    UndefinedVariable 70..78: variable '$missing' is not defined by operation 'Q'
    ");
}

#[test]
fn variables_follow_fragments_through_cycles() {
    let input = indoc! {r#"
    query Q($a: Int) { ...A }
    query R { ...B }
    fragment A on T { f(x: $a) ...B }
    fragment B on T { g(y: $b) ...A }
    "#};
    insta::assert_snapshot!(findings(input), @r"
    UndefinedVariable 66..68: variable '$a' is not defined by operation 'R'
    UndefinedVariable 100..102: variable '$b' is not defined by operation 'Q'
    UndefinedVariable 100..102: variable '$b' is not defined by operation 'R'
    FragmentCycle 107..108: cannot spread fragment 'A' within itself via 'B'
    ");
}

#[test]
fn collector_is_capped() {
    let spreads: String = (0..5).map(|i| format!("...F{} ", i)).collect();
    let doc = DocumentParser::default()
        .parse_str(&format!("{{ {} }}", spreads))
        .unwrap();

    let errors = Validator::new(&LimitsConfig::default())
        .with_max_errors(3)
        .run(&doc)
        .unwrap();
    assert_eq!(errors.len(), 4);
    assert!(errors.is_full());
    let kinds: Vec<_> = errors.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        [
            ValidationErrorKind::UndefinedFragment,
            ValidationErrorKind::UndefinedFragment,
            ValidationErrorKind::UndefinedFragment,
            ValidationErrorKind::MaxValidationErrorsReached,
        ]
    );
}

#[test]
fn custom_rule_set() {
    let doc = DocumentParser::default()
        .parse_str("query A { ...X } query A { b }")
        .unwrap();
    let errors = Validator::new(&LimitsConfig::default())
        .with_rules(vec![Box::new(super::rules::OperationNames::default())])
        .run(&doc)
        .unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.iter().next().unwrap().kind(),
        ValidationErrorKind::DuplicateOperationName
    );
}
