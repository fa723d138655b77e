use palisade_core::LimitsConfig;

use super::{NodeCountGuard, Validator, validate};
use crate::{DocumentParser, ErrorKind};

fn fields(n: usize) -> String {
    // An undefined fragment keeps an ordinary finding in the collector.
    format!("{{ {} ...Missing }}", "f ".repeat(n))
}

fn parse(input: &str) -> crate::Document {
    DocumentParser::trusted().parse_str(input).unwrap()
}

#[test]
fn at_ceiling_is_admitted() {
    let doc = parse(&fields(500));
    let errors = validate(&doc, &LimitsConfig::default()).unwrap();
    assert_eq!(errors.len(), 1);
}

#[test]
fn past_ceiling_aborts_instead_of_collecting() {
    let doc = parse(&fields(501));
    let err = validate(&doc, &LimitsConfig::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NodeCountExceeded);
    assert_eq!(err.message(), "Validation aborted: too many nodes (max is 500)");
    assert_eq!(err.offending_text(), Some("f"));
}

#[test]
fn nested_and_fragment_fields_count() {
    let input = "{ a { b { c } } ...F } fragment F on T { d e }";
    let doc = parse(input);

    let limits = LimitsConfig::default().with_max_nodes(5);
    assert!(validate(&doc, &limits).unwrap().is_empty());

    let limits = LimitsConfig::default().with_max_nodes(4);
    let err = validate(&doc, &limits).unwrap_err();
    assert_eq!(err.offending_text(), Some("e"));
}

#[test]
fn disabled_or_trusted_never_aborts() {
    let doc = parse(&fields(2_000));
    assert!(validate(&doc, &LimitsConfig::default().with_max_nodes(0)).is_ok());
    assert!(validate(&doc, &LimitsConfig::trusted()).is_ok());
}

#[test]
fn guard_not_created_when_disabled() {
    assert!(NodeCountGuard::new(&LimitsConfig::default().with_max_nodes(-5)).is_none());
    assert!(NodeCountGuard::new(&LimitsConfig::trusted()).is_none());
    assert!(NodeCountGuard::new(&LimitsConfig::default()).is_some());
}

#[test]
fn abort_stops_the_traversal_early() {
    // Without the guard the duplicate names would be reported.
    let input = "query A { a b c } query A { d }";
    let doc = parse(input);

    let limits = LimitsConfig::default().with_max_nodes(2);
    let err = Validator::new(&limits).run(&doc).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NodeCountExceeded);
    assert_eq!(err.offending_text(), Some("c"));

    let limits = LimitsConfig::default().with_max_nodes(10);
    assert_eq!(Validator::new(&limits).run(&doc).unwrap().len(), 1);
}
