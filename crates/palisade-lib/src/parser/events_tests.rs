use palisade_core::{LimitsConfig, SourceAggregate};

use super::events::{EventRecorder, RecordedEvent};
use crate::{DocumentParser, ErrorKind};

fn record(limits: LimitsConfig, input: &str) -> (Vec<RecordedEvent>, crate::Result<crate::Document>) {
    let src = SourceAggregate::one_liner(input).unwrap();
    let mut recorder = EventRecorder::new();
    let result = DocumentParser::new(limits).parse_with_listener(&src, &mut recorder);
    (recorder.into_events(), result)
}

fn render(events: &[RecordedEvent]) -> String {
    events
        .iter()
        .map(|e| format!("{}\n", e))
        .collect()
}

#[test]
fn events_in_document_order() {
    let (events, result) = record(LimitsConfig::default(), "{ a }");
    assert!(result.is_ok());
    insta::assert_snapshot!(render(&events), @r#"
    enter Document 0..1 "{"
    enter OperationDefinition 0..1 "{"
    enter SelectionSet 0..1 "{"
    terminal BraceOpen 0..1 "{"
    enter Field 2..3 "a"
    terminal Name 2..3 "a"
    exit Field
    terminal BraceClose 4..5 "}"
    exit SelectionSet
    exit OperationDefinition
    exit Document
    "#);
}

#[test]
fn trivia_is_never_reported() {
    let (events, result) = record(LimitsConfig::default(), "{ a, # c\n b }");
    assert!(result.is_ok());
    let terminals = events
        .iter()
        .filter(|e| matches!(e, RecordedEvent::Terminal { .. }))
        .count();
    assert_eq!(terminals, 4);
}

#[test]
fn anomaly_is_the_last_event() {
    let (events, result) = record(LimitsConfig::default(), "{ a: }");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::SyntaxError);
    insta::assert_snapshot!(render(&events), @r#"
    enter Document 0..1 "{"
    enter OperationDefinition 0..1 "{"
    enter SelectionSet 0..1 "{"
    terminal BraceOpen 0..1 "{"
    enter Field 2..3 "a"
    enter Alias 2..3 "a"
    terminal Name 2..3 "a"
    terminal Colon 3..4 ":"
    exit Alias
    anomaly 5..6 "}": expected a field name
    "#);
}

#[test]
fn vetoed_event_is_not_passed_on() {
    let limits = LimitsConfig::default().with_max_tokens(1);
    let (events, result) = record(limits, "{ a }");
    assert_eq!(result.unwrap_err().kind(), ErrorKind::TokenCountExceeded);

    // The guard runs first; `a` never reaches the recorder.
    let last = events.last().unwrap();
    assert_eq!(last.to_string(), r#"enter Field 2..3 "a""#);
}

#[test]
fn end_of_input_start() {
    let (events, result) = record(LimitsConfig::default(), "  ");
    assert!(result.is_err());
    insta::assert_snapshot!(render(&events), @r#"
    enter Document 2..2 "<EOF>"
    anomaly 2..2 "<EOF>": expected a definition
    "#);
}
