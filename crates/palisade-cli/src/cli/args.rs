//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every command declares the same
//! input and limit flags the same way.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Document files or directories (positional, repeatable).
pub fn files_arg() -> Arg {
    Arg::new("files")
        .value_name("FILES")
        .num_args(0..)
        .value_parser(value_parser!(PathBuf))
        .help("Document files or directories, read as one document (stdin if none)")
}

/// Inline document text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .conflicts_with("files")
        .help("Inline document text")
}

/// Disable every limit (--trusted).
pub fn trusted_arg() -> Arg {
    Arg::new("trusted")
        .long("trusted")
        .action(ArgAction::SetTrue)
        .help("Disable every limit; only for input you control")
}

fn limit_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .value_name("N")
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i32))
        .help(help)
}

/// Character ceiling (--max-chars).
pub fn max_chars_arg() -> Arg {
    limit_arg("max_chars", "max-chars", "Maximum characters read (<= 0 disables)")
}

/// Rule depth ceiling (--max-depth).
pub fn max_depth_arg() -> Arg {
    limit_arg("max_depth", "max-depth", "Maximum grammar rule depth (<= 0 disables)")
}

/// Significant token ceiling (--max-tokens).
pub fn max_tokens_arg() -> Arg {
    limit_arg("max_tokens", "max-tokens", "Maximum significant tokens (<= 0 disables)")
}

/// Field selection ceiling during validation (--max-nodes).
pub fn max_nodes_arg() -> Arg {
    limit_arg("max_nodes", "max-nodes", "Maximum field selections validated (<= 0 disables)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Report format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Report format")
}

/// Skip validation (--no-validate).
pub fn no_validate_arg() -> Arg {
    Arg::new("no_validate")
        .long("no-validate")
        .action(ArgAction::SetTrue)
        .help("Only parse, do not validate")
}

/// Include whitespace, commas and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace, commas and comments")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}
