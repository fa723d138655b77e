//! Command builders for the CLI.
//!
//! Every command reads its document the same way and accepts the same limit
//! flags; they differ only in what they print.

use clap::Command;

use super::args::*;

fn with_input_args(cmd: Command) -> Command {
    cmd.arg(files_arg())
        .arg(query_text_arg())
        .arg(trusted_arg())
        .arg(max_chars_arg())
        .arg(max_depth_arg())
        .arg(max_tokens_arg())
        .arg(max_nodes_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("palisade")
        .about("Guarded parser and validator for GraphQL documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(cst_command())
        .subcommand(events_command())
}

/// Parse and validate a document.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Parse and validate a document")
        .override_usage(
            "\
  palisade check [FILES]...
  palisade check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  palisade check query.graphql                # parse and validate
  palisade check schema/ops/                  # every .graphql file, as one document
  palisade check -q '{ hero { name } }'       # inline document
  palisade check big.graphql --max-tokens 0   # disable the token ceiling
  cat q.graphql | palisade check --format json

LIMITS:
  Defaults come from PALISADE_MAX_CHARS, PALISADE_MAX_DEPTH,
  PALISADE_MAX_TOKENS and PALISADE_MAX_NODES; flags override them."#,
        )
        .arg(format_arg())
        .arg(no_validate_arg());

    with_input_args(cmd)
}

/// Print the concrete syntax tree.
pub fn cst_command() -> Command {
    let cmd = Command::new("cst")
        .about("Print the concrete syntax tree of a document")
        .after_help(
            r#"EXAMPLES:
  palisade cst query.graphql
  palisade cst -q '{ a }' --trivia --spans"#,
        )
        .arg(trivia_arg())
        .arg(spans_arg());

    with_input_args(cmd)
}

/// Print the parse event stream.
pub fn events_command() -> Command {
    let cmd = Command::new("events")
        .about("Print the rule and token events of a parse")
        .after_help(
            r#"EXAMPLES:
  palisade events -q 'query Q { a }'
  palisade events deep.graphql --max-depth 10"#,
        );

    with_input_args(cmd)
}
