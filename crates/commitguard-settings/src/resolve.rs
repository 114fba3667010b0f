use crate::{model::CommitguardConfigV1, presets};
use anyhow::Context;
use commitguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, PolicyVariant};
use commitguard_types::{Severity, explain::all_check_ids};
use regex::Regex;

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub variant: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: CommitguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| presets::DEFAULT_PROFILE.to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    if let Some(variant_s) = overrides.variant.as_deref().or(cfg.variant.as_deref()) {
        effective.variant = parse_variant(variant_s)?;
    }

    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    if let Some(max) = cfg.header_max_length {
        anyhow::ensure!(max > 0, "header_max_length must be greater than zero");
        effective.header_max_length = max;
    }

    if let Some(types) = cfg.types {
        anyhow::ensure!(!types.is_empty(), "types must list at least one commit type");
        effective.types = types;
    }

    if let Some(default_ignores) = cfg.default_ignores {
        effective.default_ignores = default_ignores;
    }

    effective.ignores = compile_ignores(&cfg.ignores)?;

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        anyhow::ensure!(
            all_check_ids().contains(&check_id.as_str()),
            "unknown check id in [checks]: {check_id}"
        );

        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    Ok(ResolvedConfig { effective })
}

fn compile_ignores(patterns: &[String]) -> anyhow::Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).with_context(|| format!("invalid ignore pattern: {pattern}"))
        })
        .collect()
}

fn parse_variant(v: &str) -> anyhow::Result<PolicyVariant> {
    match v {
        "flexible" => Ok(PolicyVariant::Flexible),
        "strict" => Ok(PolicyVariant::Strict),
        other => anyhow::bail!("unknown variant: {other} (expected flexible|strict)"),
    }
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
