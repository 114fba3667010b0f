//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Header parsing totality and idempotence
//! - Scope policy determinism and branch precedence
//! - Revert handling with breaking markers

use crate::engine::lint;
use crate::header::{Grammar, HeaderParser, HeaderShape};
use crate::policy::PolicyVariant;
use crate::scope_policy::{FlexiblePolicy, PolicyEvaluator, ScopeReason, ScopeVerdict, StrictPolicy};
use crate::test_support::{flexible_config, strict_config};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

fn arb_type() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("feat".to_string()),
        Just("fix".to_string()),
        Just("test".to_string()),
        Just("chore".to_string()),
        prop::string::string_regex("[a-z]{1,8}").unwrap(),
    ]
    .prop_filter("revert has dedicated strategies", |t| t != "revert")
}

fn arb_issue_id() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{1,5}-[0-9]{1,5}").unwrap()
}

/// Upper-case scopes that contain no issue identifier.
fn arb_upper_non_issue_scope() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{1,8}").unwrap()
}

/// Scopes with at least one lower-case letter.
fn arb_lower_scope() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9-]{0,10}").unwrap()
}

fn arb_subject() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z ]{0,30}[a-z]").unwrap()
}

fn arb_bang() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just("!")]
}

fn arb_variant() -> impl Strategy<Value = PolicyVariant> {
    prop_oneof![Just(PolicyVariant::Flexible), Just(PolicyVariant::Strict)]
}

fn evaluate(variant: PolicyVariant, line: &str) -> ScopeVerdict {
    let parsed = HeaderParser::new(variant.grammar()).parse(line);
    match variant {
        PolicyVariant::Flexible => FlexiblePolicy.evaluate(&parsed),
        PolicyVariant::Strict => StrictPolicy.evaluate(&parsed),
    }
}

fn flexible(line: &str) -> ScopeVerdict {
    evaluate(PolicyVariant::Flexible, line)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    // ------------------------------------------------------------------------
    // Parser
    // ------------------------------------------------------------------------

    #[test]
    fn parse_is_total_and_keeps_raw(line in any::<String>(), variant in arb_variant()) {
        let parsed = HeaderParser::new(variant.grammar()).parse(&line);
        prop_assert_eq!(parsed.raw, line);
    }

    #[test]
    fn reparsing_raw_is_idempotent(line in any::<String>(), variant in arb_variant()) {
        let parser = HeaderParser::new(variant.grammar());
        let once = parser.parse(&line);
        let twice = parser.parse(&once.raw);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn issue_grammar_never_captures_non_issue_scope(
        t in arb_type(),
        scope in arb_lower_scope(),
        subject in arb_subject(),
    ) {
        let line = format!("{t}({scope}): {subject}");
        let parsed = HeaderParser::new(Grammar::IssueScope).parse(&line);
        prop_assert!(parsed.scope.is_none());
    }

    #[test]
    fn scope_implies_structure(line in any::<String>(), variant in arb_variant()) {
        let parsed = HeaderParser::new(variant.grammar()).parse(&line);
        if let (Some(scope), Some(t)) = (&parsed.scope, &parsed.commit_type) {
            let prefix = format!("{t}({scope})");
            prop_assert!(parsed.raw.starts_with(&prefix));
        }
    }

    // ------------------------------------------------------------------------
    // Policy: totality and determinism
    // ------------------------------------------------------------------------

    #[test]
    fn evaluate_is_deterministic(line in any::<String>(), variant in arb_variant()) {
        prop_assert_eq!(evaluate(variant, &line), evaluate(variant, &line));
    }

    #[test]
    fn lint_is_total_on_arbitrary_messages(text in any::<String>()) {
        let a = lint(&text, &flexible_config());
        let b = lint(&text, &strict_config());
        prop_assert_eq!(a.findings.len() as u32, a.counts.info + a.counts.warning + a.counts.error);
        prop_assert_eq!(b.findings.len() as u32, b.counts.info + b.counts.warning + b.counts.error);
    }

    // ------------------------------------------------------------------------
    // Policy: branch precedence (flexible)
    // ------------------------------------------------------------------------

    #[test]
    fn lower_case_scope_outside_revert_wins_over_everything(
        t in arb_type(),
        scope in arb_lower_scope(),
        bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("{t}({scope}){bang}: {subject}");
        prop_assert_eq!(flexible(&line), ScopeVerdict::Fail(ScopeReason::ScopeNotUppercase));
    }

    #[test]
    fn issue_scope_passes_for_non_revert(
        t in arb_type(),
        id in arb_issue_id(),
        bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("{t}({id}){bang}: {subject}");
        prop_assert_eq!(flexible(&line), ScopeVerdict::Pass);
        prop_assert_eq!(evaluate(PolicyVariant::Strict, &line), ScopeVerdict::Pass);
    }

    #[test]
    fn issue_scope_on_revert_without_payload_fails(
        id in arb_issue_id(),
        bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("revert({id}){bang}: {subject}");
        prop_assert_eq!(
            flexible(&line),
            ScopeVerdict::Fail(ScopeReason::RevertMissingFullHeader)
        );
    }

    #[test]
    fn missing_scope_gets_revert_specific_wording(
        t in arb_type(),
        bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let plain = format!("{t}{bang}: {subject}");
        let revert = format!("revert{bang}: {subject}");
        prop_assert_eq!(flexible(&plain), ScopeVerdict::Fail(ScopeReason::ScopeRequired));
        prop_assert_eq!(flexible(&revert), ScopeVerdict::Fail(ScopeReason::RevertMissingId));
        prop_assert_eq!(
            evaluate(PolicyVariant::Strict, &plain),
            ScopeVerdict::Fail(ScopeReason::ScopeRequired)
        );
    }

    #[test]
    fn upper_case_non_issue_scope_is_not_an_issue_id(
        t in arb_type(),
        scope in arb_upper_non_issue_scope(),
        subject in arb_subject(),
    ) {
        let line = format!("{t}({scope}): {subject}");
        prop_assert_eq!(flexible(&line), ScopeVerdict::Fail(ScopeReason::ScopeNotIssueId));
        prop_assert_eq!(
            evaluate(PolicyVariant::Strict, &line),
            ScopeVerdict::Fail(ScopeReason::ScopeNotIssueId)
        );
    }

    #[test]
    fn unstructured_without_subject_is_subject_required(
        t in arb_type(),
        id in arb_issue_id(),
        tail in prop_oneof![Just(String::new()), arb_subject().prop_map(|s| format!(" {s}"))],
    ) {
        let line = format!("{t}({id}){tail}");
        prop_assert_eq!(HeaderShape::of(&line), HeaderShape::Unstructured);
        prop_assert_eq!(flexible(&line), ScopeVerdict::Fail(ScopeReason::SubjectRequired));
    }

    // ------------------------------------------------------------------------
    // Policy: revert symmetry
    // ------------------------------------------------------------------------

    #[test]
    fn revert_of_issue_header_passes_with_any_breaking_markers(
        outer in arb_issue_id(),
        inner in arb_issue_id(),
        t in arb_type(),
        outer_bang in arb_bang(),
        inner_bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("revert({outer}){outer_bang}: {t}({inner}){inner_bang}: {subject}");
        prop_assert_eq!(flexible(&line), ScopeVerdict::Pass);
    }

    #[test]
    fn revert_of_revert_passes_with_any_breaking_markers(
        outer in arb_issue_id(),
        middle in arb_issue_id(),
        inner in arb_issue_id(),
        t in arb_type(),
        bangs in (arb_bang(), arb_bang(), arb_bang()),
        subject in arb_subject(),
    ) {
        let (outer_bang, middle_bang, inner_bang) = bangs;
        let line = format!(
            "revert({outer}){outer_bang}: revert({middle}){middle_bang}: {t}({inner}){inner_bang}: {subject}"
        );
        prop_assert_eq!(flexible(&line), ScopeVerdict::Pass);
    }

    #[test]
    fn revert_with_non_issue_inner_scope_fails(
        outer in arb_issue_id(),
        inner in arb_lower_scope(),
        t in arb_type(),
        outer_bang in arb_bang(),
        inner_bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("revert({outer}){outer_bang}: {t}({inner}){inner_bang}: {subject}");
        prop_assert!(!flexible(&line).is_pass());
    }

    #[test]
    fn revert_with_lower_case_outer_scope_fails(
        outer in arb_lower_scope(),
        inner in arb_issue_id(),
        t in arb_type(),
        outer_bang in arb_bang(),
        inner_bang in arb_bang(),
        subject in arb_subject(),
    ) {
        let line = format!("revert({outer}){outer_bang}: {t}({inner}){inner_bang}: {subject}");
        prop_assert_eq!(flexible(&line), ScopeVerdict::Fail(ScopeReason::ScopeNotUppercase));
    }
}
