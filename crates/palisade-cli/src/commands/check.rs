use palisade_core::{SourceAggregate, SourceSpan};
use palisade_lib::diagnostics::DiagnosticsPrinter;
use palisade_lib::{Document, DocumentParser, Error, ValidationError, ValidationErrors, validate};
use serde::Serialize;
use tracing::info;

use super::InputArgs;

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;

pub struct CheckArgs {
    pub input: InputArgs,
    pub json: bool,
    pub validate: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    operations: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fragments: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a Error>,
    findings: Vec<Finding<'a>>,
}

#[derive(Serialize)]
struct Finding<'a> {
    #[serde(flatten)]
    finding: &'a ValidationError,
    location: Option<SourceSpan>,
}

/// Outcome of one check, before it is printed.
enum Outcome {
    Rejected(Error),
    Checked(Document, ValidationErrors),
}

impl Outcome {
    fn is_valid(&self) -> bool {
        matches!(self, Outcome::Checked(_, findings) if findings.is_empty())
    }
}

pub fn run(args: CheckArgs) -> i32 {
    let Some(source) = args.input.load() else {
        return 1;
    };

    let outcome = check(&args, &source);
    if args.json {
        print_json(&outcome, &source);
    } else {
        print_text(&outcome, &source, args.input.color);
    }

    if outcome.is_valid() { 0 } else { 1 }
}

fn check(args: &CheckArgs, source: &SourceAggregate) -> Outcome {
    let limits = args.input.limits;
    let doc = match DocumentParser::new(limits).parse(source) {
        Ok(doc) => doc,
        Err(err) => return Outcome::Rejected(err),
    };
    info!(
        operations = doc.operation_count(),
        fragments = doc.fragment_count(),
        "document parsed"
    );

    if !args.validate {
        return Outcome::Checked(doc, ValidationErrors::default());
    }
    match validate(&doc, &limits) {
        Ok(findings) => Outcome::Checked(doc, findings),
        Err(err) => Outcome::Rejected(err),
    }
}

fn print_text(outcome: &Outcome, source: &SourceAggregate, color: bool) {
    let printer = DiagnosticsPrinter::new(source).colored(color);
    match outcome {
        Outcome::Rejected(err) => eprint!("{}", printer.render_error(err)),
        Outcome::Checked(_, findings) if !findings.is_empty() => {
            eprint!("{}", printer.render_findings(findings));
        }
        // Silent on success.
        Outcome::Checked(..) => {}
    }
}

fn print_json(outcome: &Outcome, source: &SourceAggregate) {
    match json_report(outcome, source) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("error: failed to serialize report: {}", e),
    }
}

fn json_report(outcome: &Outcome, source: &SourceAggregate) -> serde_json::Result<String> {
    let report = match outcome {
        Outcome::Rejected(err) => Report {
            valid: false,
            operations: None,
            fragments: None,
            error: Some(err),
            findings: Vec::new(),
        },
        Outcome::Checked(doc, findings) => Report {
            valid: outcome.is_valid(),
            operations: Some(doc.operation_count()),
            fragments: Some(doc.fragment_count()),
            error: None,
            findings: findings
                .iter()
                .map(|finding| Finding {
                    finding,
                    location: finding.locate(source),
                })
                .collect(),
        },
    };
    serde_json::to_string_pretty(&report)
}
