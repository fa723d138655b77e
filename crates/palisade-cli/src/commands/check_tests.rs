use palisade_core::{LimitsConfig, SourceAggregate};

use super::*;
use crate::commands::InputArgs;

fn args(limits: LimitsConfig, validate: bool) -> CheckArgs {
    CheckArgs {
        input: InputArgs {
            files: Vec::new(),
            query_text: None,
            limits,
            color: false,
        },
        json: true,
        validate,
    }
}

fn report(text: &str, args: &CheckArgs) -> String {
    let source = SourceAggregate::one_liner(text).unwrap();
    let outcome = check(args, &source);
    json_report(&outcome, &source).unwrap()
}

#[test]
fn findings_carry_locations() {
    let args = args(LimitsConfig::default(), true);
    insta::assert_snapshot!(report("query A { a } fragment F on T { b } { ...F }", &args), @r#"
    {
      "valid": false,
      "operations": 2,
      "fragments": 1,
      "findings": [
        {
          "kind": "LoneAnonymousOperation",
          "message": "an anonymous operation must be the only defined operation",
          "location": {
            "source_name": null,
            "line": 1,
            "column": 36,
            "offset": 36
          }
        }
      ]
    }
    "#);
}

#[test]
fn clean_document_is_valid() {
    let args = args(LimitsConfig::default(), true);
    insta::assert_snapshot!(report("{ hero { name } }", &args), @r#"
    {
      "valid": true,
      "operations": 1,
      "fragments": 0,
      "findings": []
    }
    "#);
}

#[test]
fn parse_error_is_reported_alone() {
    let args = args(LimitsConfig::default(), true);
    insta::assert_snapshot!(report("{ a } }", &args), @r#"
    {
      "valid": false,
      "error": {
        "kind": "TrailingInput",
        "span": {
          "source_name": null,
          "line": 1,
          "column": 6,
          "offset": 6
        },
        "message": "Invalid syntax encountered. There are extra tokens in the text that have not been consumed. Offending token '}'",
        "offending_text": "}"
      },
      "findings": []
    }
    "#);
}

#[test]
fn validation_can_be_skipped() {
    let args = args(LimitsConfig::default().with_max_nodes(1), false);
    let source = SourceAggregate::one_liner("{ ...Missing a b }").unwrap();
    assert!(check(&args, &source).is_valid());
}

#[test]
fn node_ceiling_aborts_validation() {
    let args = args(LimitsConfig::default().with_max_nodes(1), true);
    let source = SourceAggregate::one_liner("{ a b }").unwrap();
    match check(&args, &source) {
        Outcome::Rejected(err) => {
            assert_eq!(err.kind(), palisade_lib::ErrorKind::NodeCountExceeded)
        }
        Outcome::Checked(..) => panic!("expected the node ceiling to abort validation"),
    }
}
