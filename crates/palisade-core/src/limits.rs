//! Resource ceilings for a parser instance.
//!
//! Each ceiling is an `i32`; a value `<= 0` disables that one check. Trust
//! mode disables every check regardless of the numeric values and is meant
//! for input that never comes from outside the process.
//!
//! Limits are resolved once (defaults, then environment overrides) and copied
//! into each parser. They never change afterwards.

use serde::Serialize;
use tracing::{trace, warn};

pub const DEFAULT_MAX_CHARS: i32 = 1024 * 1024;
pub const DEFAULT_MAX_DEPTH: i32 = 500;
pub const DEFAULT_MAX_TOKENS: i32 = 15_000;
pub const DEFAULT_MAX_NODES: i32 = 500;

pub const ENV_MAX_CHARS: &str = "PALISADE_MAX_CHARS";
pub const ENV_MAX_DEPTH: &str = "PALISADE_MAX_DEPTH";
pub const ENV_MAX_TOKENS: &str = "PALISADE_MAX_TOKENS";
pub const ENV_MAX_NODES: &str = "PALISADE_MAX_NODES";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LimitsConfig {
    max_chars: i32,
    max_depth: i32,
    max_tokens: i32,
    max_nodes: i32,
    trust_mode: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            max_depth: DEFAULT_MAX_DEPTH,
            max_tokens: DEFAULT_MAX_TOKENS,
            max_nodes: DEFAULT_MAX_NODES,
            trust_mode: false,
        }
    }
}

impl LimitsConfig {
    /// Built-in defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Built-in defaults with overrides from `lookup`.
    ///
    /// A value that does not parse as an integer is logged and the default is
    /// kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let limits = Self {
            max_chars: resolve(&lookup, ENV_MAX_CHARS, DEFAULT_MAX_CHARS),
            max_depth: resolve(&lookup, ENV_MAX_DEPTH, DEFAULT_MAX_DEPTH),
            max_tokens: resolve(&lookup, ENV_MAX_TOKENS, DEFAULT_MAX_TOKENS),
            max_nodes: resolve(&lookup, ENV_MAX_NODES, DEFAULT_MAX_NODES),
            trust_mode: false,
        };
        trace!(?limits, "resolved parser limits");
        limits
    }

    /// Every check disabled.
    pub fn trusted() -> Self {
        Self::default().with_trust_mode(true)
    }

    pub fn with_max_chars(mut self, value: i32) -> Self {
        self.max_chars = value;
        self
    }

    pub fn with_max_depth(mut self, value: i32) -> Self {
        self.max_depth = value;
        self
    }

    pub fn with_max_tokens(mut self, value: i32) -> Self {
        self.max_tokens = value;
        self
    }

    pub fn with_max_nodes(mut self, value: i32) -> Self {
        self.max_nodes = value;
        self
    }

    pub fn with_trust_mode(mut self, value: bool) -> Self {
        self.trust_mode = value;
        self
    }

    pub fn max_chars(&self) -> i32 {
        self.max_chars
    }

    pub fn max_depth(&self) -> i32 {
        self.max_depth
    }

    pub fn max_tokens(&self) -> i32 {
        self.max_tokens
    }

    pub fn max_nodes(&self) -> i32 {
        self.max_nodes
    }

    pub fn trust_mode(&self) -> bool {
        self.trust_mode
    }

    /// `None` when the character check is off.
    pub fn char_ceiling(&self) -> Option<u32> {
        self.ceiling(self.max_chars)
    }

    /// `None` when the rule-depth check is off.
    pub fn depth_ceiling(&self) -> Option<u32> {
        self.ceiling(self.max_depth)
    }

    /// `None` when the token-count check is off.
    pub fn token_ceiling(&self) -> Option<u32> {
        self.ceiling(self.max_tokens)
    }

    /// `None` when the node-count check is off.
    pub fn node_ceiling(&self) -> Option<u32> {
        self.ceiling(self.max_nodes)
    }

    fn ceiling(&self, value: i32) -> Option<u32> {
        if self.trust_mode || value <= 0 {
            return None;
        }
        Some(value as u32)
    }
}

fn resolve(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: i32) -> i32 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<i32>() {
        Ok(value) => value,
        Err(err) => {
            warn!(key, value = %raw, default, %err, "ignoring malformed limit override");
            default
        }
    }
}
