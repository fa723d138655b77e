use std::collections::HashMap;

use crate::limits::{
    DEFAULT_MAX_CHARS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_NODES, DEFAULT_MAX_TOKENS, ENV_MAX_CHARS,
    ENV_MAX_DEPTH, ENV_MAX_NODES, ENV_MAX_TOKENS, LimitsConfig,
};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let limits = LimitsConfig::default();
    assert_eq!(limits.max_chars(), 1_048_576);
    assert_eq!(limits.max_depth(), 500);
    assert_eq!(limits.max_tokens(), 15_000);
    assert_eq!(limits.max_nodes(), 500);
    assert!(!limits.trust_mode());
    assert_eq!(limits.char_ceiling(), Some(1_048_576));
}

#[test]
fn no_overrides_gives_defaults() {
    assert_eq!(LimitsConfig::from_lookup(lookup(&[])), LimitsConfig::default());
}

#[test]
fn overrides_apply_per_key() {
    let limits = LimitsConfig::from_lookup(lookup(&[
        (ENV_MAX_CHARS, "10"),
        (ENV_MAX_DEPTH, " 20 "),
        (ENV_MAX_TOKENS, "30"),
        (ENV_MAX_NODES, "40"),
    ]));
    assert_eq!(limits.max_chars(), 10);
    assert_eq!(limits.max_depth(), 20);
    assert_eq!(limits.max_tokens(), 30);
    assert_eq!(limits.max_nodes(), 40);
}

#[test]
fn malformed_override_keeps_default() {
    let limits = LimitsConfig::from_lookup(lookup(&[
        (ENV_MAX_CHARS, "lots"),
        (ENV_MAX_DEPTH, "1.5"),
        (ENV_MAX_TOKENS, ""),
        (ENV_MAX_NODES, "99999999999"),
    ]));
    assert_eq!(limits.max_chars(), DEFAULT_MAX_CHARS);
    assert_eq!(limits.max_depth(), DEFAULT_MAX_DEPTH);
    assert_eq!(limits.max_tokens(), DEFAULT_MAX_TOKENS);
    assert_eq!(limits.max_nodes(), DEFAULT_MAX_NODES);
}

#[test]
fn non_positive_disables_single_check() {
    let limits = LimitsConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "0"), (ENV_MAX_TOKENS, "-1")]));
    assert_eq!(limits.depth_ceiling(), None);
    assert_eq!(limits.token_ceiling(), None);
    assert_eq!(limits.char_ceiling(), Some(DEFAULT_MAX_CHARS as u32));
    assert_eq!(limits.node_ceiling(), Some(DEFAULT_MAX_NODES as u32));
}

#[test]
fn trust_mode_disables_everything() {
    let limits = LimitsConfig::default()
        .with_max_chars(1)
        .with_max_depth(1)
        .with_trust_mode(true);
    assert_eq!(limits.max_chars(), 1);
    assert_eq!(limits.char_ceiling(), None);
    assert_eq!(limits.depth_ceiling(), None);
    assert_eq!(limits.token_ceiling(), None);
    assert_eq!(limits.node_ceiling(), None);
    assert_eq!(LimitsConfig::trusted().char_ceiling(), None);
}

#[test]
fn limits_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<LimitsConfig>();
}
