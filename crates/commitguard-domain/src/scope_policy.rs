//! Scope policy: decides whether a parsed header carries an acceptable issue scope.
//!
//! Each variant is an ordered decision procedure. The first matching arm wins, and the
//! order is observable: a header that satisfies several arms always gets the diagnostic of
//! the earliest one.

use crate::header::{HeaderShape, ParsedHeader, REVERT, RevertHeader, contains_issue_id};
use crate::policy::PolicyVariant;
use commitguard_types::ids;

/// Why a header failed the scope policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeReason {
    ScopeNotUppercase,
    RevertMissingFullHeader,
    ScopeRequired,
    RevertMissingId,
    SubjectRequired,
    ScopeNotIssueId,
}

impl ScopeReason {
    pub const ALL: [ScopeReason; 6] = [
        ScopeReason::ScopeNotUppercase,
        ScopeReason::RevertMissingFullHeader,
        ScopeReason::ScopeRequired,
        ScopeReason::RevertMissingId,
        ScopeReason::SubjectRequired,
        ScopeReason::ScopeNotIssueId,
    ];

    /// Finding code emitted for this reason.
    pub fn code(self) -> &'static str {
        match self {
            ScopeReason::ScopeNotUppercase => ids::CODE_SCOPE_NOT_UPPERCASE,
            ScopeReason::RevertMissingFullHeader => ids::CODE_REVERT_MISSING_FULL_HEADER,
            ScopeReason::ScopeRequired => ids::CODE_SCOPE_REQUIRED,
            ScopeReason::RevertMissingId => ids::CODE_REVERT_MISSING_ID,
            ScopeReason::SubjectRequired => ids::CODE_SUBJECT_REQUIRED,
            ScopeReason::ScopeNotIssueId => ids::CODE_SCOPE_NOT_ISSUE_ID,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|reason| reason.code() == code)
    }

    /// Variants whose decision procedure can produce this reason.
    pub fn variants(self) -> &'static [PolicyVariant] {
        match self {
            ScopeReason::ScopeRequired | ScopeReason::ScopeNotIssueId => {
                &[PolicyVariant::Flexible, PolicyVariant::Strict]
            }
            _ => &[PolicyVariant::Flexible],
        }
    }

    /// User-facing message. These strings are part of the output contract.
    pub fn message(self) -> &'static str {
        match self {
            ScopeReason::ScopeNotUppercase => "scope must be upper-case",
            ScopeReason::RevertMissingFullHeader => {
                "revert commits should have the full commit name that is being reverted"
            }
            ScopeReason::ScopeRequired => "a scope must be set",
            ScopeReason::RevertMissingId => {
                "revert commits should have the associated JIRA ID includes in the revert scope"
            }
            ScopeReason::SubjectRequired => "a subject must be set",
            ScopeReason::ScopeNotIssueId => "scope must be a JIRA issue ID",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeVerdict {
    Pass,
    Fail(ScopeReason),
}

impl ScopeVerdict {
    pub fn is_pass(self) -> bool {
        matches!(self, ScopeVerdict::Pass)
    }

    pub fn reason(self) -> Option<ScopeReason> {
        match self {
            ScopeVerdict::Pass => None,
            ScopeVerdict::Fail(reason) => Some(reason),
        }
    }
}

pub trait PolicyEvaluator: Send + Sync {
    fn variant(&self) -> PolicyVariant;

    /// Total and pure: every header maps to exactly one verdict.
    fn evaluate(&self, parsed: &ParsedHeader) -> ScopeVerdict;
}

pub fn evaluator_for(variant: PolicyVariant) -> &'static dyn PolicyEvaluator {
    match variant {
        PolicyVariant::Flexible => &FlexiblePolicy,
        PolicyVariant::Strict => &StrictPolicy,
    }
}

/// How the parsed scope relates to the issue-identifier convention.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScopeClass {
    Absent,
    NotUppercase,
    IssueId,
    /// Upper-case, but no identifier inside.
    Other,
}

impl ScopeClass {
    fn of(scope: Option<&str>) -> Self {
        match scope {
            None => ScopeClass::Absent,
            Some(s) if s.to_uppercase() != s => ScopeClass::NotUppercase,
            Some(s) if contains_issue_id(s) => ScopeClass::IssueId,
            Some(_) => ScopeClass::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FlexiblePolicy;

impl PolicyEvaluator for FlexiblePolicy {
    fn variant(&self) -> PolicyVariant {
        PolicyVariant::Flexible
    }

    fn evaluate(&self, parsed: &ParsedHeader) -> ScopeVerdict {
        use ScopeReason::*;

        let scope = ScopeClass::of(parsed.scope.as_deref());
        let shape = HeaderShape::of(&parsed.raw);

        match (scope, shape) {
            // A lower-case scope is only acceptable when the greedy scope capture swallowed
            // a wrapped revert payload: `revert(ID): type(ID): subject`.
            (ScopeClass::NotUppercase, _) if !parsed.raw.starts_with(REVERT) => {
                ScopeVerdict::Fail(ScopeNotUppercase)
            }
            (ScopeClass::NotUppercase, _) => match RevertHeader::split(&parsed.raw) {
                Some(revert) if revert.wraps_full_header() => ScopeVerdict::Pass,
                _ => ScopeVerdict::Fail(ScopeNotUppercase),
            },
            (ScopeClass::IssueId, _) if parsed.is_revert() => {
                ScopeVerdict::Fail(RevertMissingFullHeader)
            }
            (ScopeClass::IssueId, _) => ScopeVerdict::Pass,
            // Believed unreachable: the any-scope grammar captures every identifier scope.
            (_, HeaderShape::IssueScoped) => ScopeVerdict::Pass,
            (_, HeaderShape::Conventional) if parsed.is_revert() => {
                ScopeVerdict::Fail(RevertMissingId)
            }
            (_, HeaderShape::Conventional) => ScopeVerdict::Fail(ScopeRequired),
            _ if parsed.subject.is_none() => ScopeVerdict::Fail(SubjectRequired),
            _ => ScopeVerdict::Fail(ScopeNotIssueId),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StrictPolicy;

impl PolicyEvaluator for StrictPolicy {
    fn variant(&self) -> PolicyVariant {
        PolicyVariant::Strict
    }

    fn evaluate(&self, parsed: &ParsedHeader) -> ScopeVerdict {
        let has_issue_scope = parsed.scope.as_deref().is_some_and(contains_issue_id);

        match HeaderShape::of(&parsed.raw) {
            _ if has_issue_scope => ScopeVerdict::Pass,
            HeaderShape::IssueScoped => ScopeVerdict::Pass,
            HeaderShape::Conventional => ScopeVerdict::Fail(ScopeReason::ScopeRequired),
            HeaderShape::Unstructured => ScopeVerdict::Fail(ScopeReason::ScopeNotIssueId),
        }
    }
}
