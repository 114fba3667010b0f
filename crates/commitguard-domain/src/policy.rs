use crate::header::Grammar;
use commitguard_types::Severity;
use regex::Regex;
use std::collections::BTreeMap;

/// Scope policy variant: selects both the header grammar and the scope decision procedure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolicyVariant {
    Flexible,
    Strict,
}

impl PolicyVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            PolicyVariant::Flexible => "flexible",
            PolicyVariant::Strict => "strict",
        }
    }

    pub fn grammar(self) -> Grammar {
        match self {
            PolicyVariant::Flexible => Grammar::AnyScope,
            PolicyVariant::Strict => Grammar::IssueScope,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

/// Default `type.enum` values.
pub const DEFAULT_TYPES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "revert", "style", "test",
];

pub const DEFAULT_HEADER_MAX_LENGTH: usize = 72;

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub variant: PolicyVariant,
    pub fail_on: FailOn,
    pub header_max_length: usize,
    /// Allowed commit types, in display order.
    pub types: Vec<String>,
    /// Skip merge commits, git-generated reverts and autosquash headers.
    pub default_ignores: bool,
    /// Extra ignore patterns matched against the header, compiled once at resolution.
    pub ignores: Vec<Regex>,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
