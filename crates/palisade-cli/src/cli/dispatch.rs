//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch and the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use palisade_core::LimitsConfig;

use super::{ColorChoice, OutputFormat};
use crate::commands::InputArgs;
use crate::commands::check::CheckArgs;
use crate::commands::cst::CstArgs;
use crate::commands::events::EventsArgs;

/// Limit flags as given; `None` keeps the environment value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LimitFlags {
    pub trusted: bool,
    pub max_chars: Option<i32>,
    pub max_depth: Option<i32>,
    pub max_tokens: Option<i32>,
    pub max_nodes: Option<i32>,
}

impl LimitFlags {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            trusted: m.get_flag("trusted"),
            max_chars: m.get_one::<i32>("max_chars").copied(),
            max_depth: m.get_one::<i32>("max_depth").copied(),
            max_tokens: m.get_one::<i32>("max_tokens").copied(),
            max_nodes: m.get_one::<i32>("max_nodes").copied(),
        }
    }

    /// Layers the flags over `base`.
    pub fn apply(self, mut base: LimitsConfig) -> LimitsConfig {
        if let Some(v) = self.max_chars {
            base = base.with_max_chars(v);
        }
        if let Some(v) = self.max_depth {
            base = base.with_max_depth(v);
        }
        if let Some(v) = self.max_tokens {
            base = base.with_max_tokens(v);
        }
        if let Some(v) = self.max_nodes {
            base = base.with_max_nodes(v);
        }
        base.with_trust_mode(self.trusted)
    }
}

pub struct InputParams {
    pub files: Vec<PathBuf>,
    pub query_text: Option<String>,
    pub limits: LimitFlags,
    pub color: ColorChoice,
}

impl InputParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            files: m
                .get_many::<PathBuf>("files")
                .map(|v| v.cloned().collect())
                .unwrap_or_default(),
            query_text: m.get_one::<String>("query_text").cloned(),
            limits: LimitFlags::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            files: p.files,
            query_text: p.query_text,
            limits: p.limits.apply(LimitsConfig::from_env()),
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub format: OutputFormat,
    pub no_validate: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            format: parse_format(m),
            no_validate: m.get_flag("no_validate"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            json: p.format == OutputFormat::Json,
            validate: !p.no_validate,
        }
    }
}

pub struct CstParams {
    pub input: InputParams,
    pub trivia: bool,
    pub spans: bool,
}

impl CstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<CstParams> for CstArgs {
    fn from(p: CstParams) -> Self {
        Self {
            input: p.input.into(),
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

pub struct EventsParams {
    pub input: InputParams,
}

impl EventsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<EventsParams> for EventsArgs {
    fn from(p: EventsParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_format(m: &ArgMatches) -> OutputFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => OutputFormat::Json,
        _ => OutputFormat::Text,
    }
}
