use crate::policy::{
    CheckPolicy, DEFAULT_HEADER_MAX_LENGTH, DEFAULT_TYPES, EffectiveConfig, FailOn, PolicyVariant,
};
use commitguard_types::{Severity, ids};
use std::collections::BTreeMap;

fn checks(blank_line: Severity) -> BTreeMap<String, CheckPolicy> {
    let mut m = BTreeMap::new();
    for id in [ids::CHECK_BODY_LEADING_BLANK, ids::CHECK_FOOTER_LEADING_BLANK] {
        m.insert(id.to_string(), CheckPolicy::enabled(blank_line));
    }
    for id in [
        ids::CHECK_HEADER_MAX_LENGTH,
        ids::CHECK_SUBJECT_CASE,
        ids::CHECK_SUBJECT_FULL_STOP,
        ids::CHECK_TYPE_CASE,
        ids::CHECK_TYPE_ENUM,
        ids::CHECK_SCOPE_ISSUE_ID,
    ] {
        m.insert(id.to_string(), CheckPolicy::enabled(Severity::Error));
    }
    m
}

pub fn config(variant: PolicyVariant, blank_line: Severity) -> EffectiveConfig {
    EffectiveConfig {
        profile: variant.as_str().to_string(),
        variant,
        fail_on: FailOn::Error,
        header_max_length: DEFAULT_HEADER_MAX_LENGTH,
        types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
        default_ignores: true,
        ignores: Vec::new(),
        checks: checks(blank_line),
    }
}

pub fn flexible_config() -> EffectiveConfig {
    config(PolicyVariant::Flexible, Severity::Error)
}

pub fn strict_config() -> EffectiveConfig {
    config(PolicyVariant::Strict, Severity::Warning)
}

/// Config with a single enabled check.
pub fn config_with_check(check_id: &str, severity: Severity) -> EffectiveConfig {
    let mut cfg = flexible_config();
    cfg.checks.clear();
    cfg.checks
        .insert(check_id.to_string(), CheckPolicy::enabled(severity));
    cfg
}
