use commitguard_domain::policy::{
    CheckPolicy, DEFAULT_HEADER_MAX_LENGTH, DEFAULT_TYPES, EffectiveConfig, FailOn, PolicyVariant,
};
use commitguard_types::Severity;
use std::collections::BTreeMap;

pub const DEFAULT_PROFILE: &str = "flexible";

/// Known profile names.
pub const PROFILES: &[&str] = &["flexible", "strict"];

/// Preset profiles are opinionated defaults.
///
/// Returns `None` for unknown names; callers decide whether that is an error.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "flexible" => Some(flexible_profile()),
        "strict" => Some(strict_profile()),
        _ => None,
    }
}

fn flexible_profile() -> EffectiveConfig {
    base("flexible", PolicyVariant::Flexible, Severity::Error)
}

fn strict_profile() -> EffectiveConfig {
    // Blank-line rules only warn here: the strict header grammar is the point of this profile.
    base("strict", PolicyVariant::Strict, Severity::Warning)
}

fn base(profile: &str, variant: PolicyVariant, blank_line: Severity) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        variant,
        fail_on: FailOn::Error,
        header_max_length: DEFAULT_HEADER_MAX_LENGTH,
        types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
        default_ignores: true,
        ignores: Vec::new(),
        checks: default_checks(blank_line),
    }
}

fn default_checks(blank_line: Severity) -> BTreeMap<String, CheckPolicy> {
    use commitguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_BODY_LEADING_BLANK.to_string(),
        CheckPolicy::enabled(blank_line),
    );
    m.insert(
        CHECK_FOOTER_LEADING_BLANK.to_string(),
        CheckPolicy::enabled(blank_line),
    );
    m.insert(
        CHECK_HEADER_MAX_LENGTH.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_SUBJECT_CASE.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_SUBJECT_FULL_STOP.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_TYPE_CASE.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_TYPE_ENUM.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );
    m.insert(
        CHECK_SCOPE_ISSUE_ID.to_string(),
        CheckPolicy::enabled(Severity::Error),
    );

    m
}
