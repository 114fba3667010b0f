use super::{
    body_leading_blank, footer_leading_blank, header_max_length, scope_issue_id, subject_case,
    subject_full_stop, type_case, type_enum,
};
use crate::header::HeaderParser;
use crate::message::CommitMessage;
use crate::policy::{EffectiveConfig, PolicyVariant};
use crate::test_support::config_with_check;
use commitguard_types::{Finding, Severity, ids};

type Check = fn(&CommitMessage, &EffectiveConfig, &mut Vec<Finding>);

fn run_check(check: Check, check_id: &str, text: &str) -> Vec<Finding> {
    let cfg = config_with_check(check_id, Severity::Error);
    let message = CommitMessage::parse(text, &HeaderParser::new(cfg.variant.grammar()));
    let mut out = Vec::new();
    check(&message, &cfg, &mut out);
    out
}

#[test]
fn body_leading_blank_requires_empty_second_line() {
    let ok = run_check(
        body_leading_blank::run,
        ids::CHECK_BODY_LEADING_BLANK,
        "test(RCD-1): a valid angular commit with a scope\n\n     Some content in the body",
    );
    assert!(ok.is_empty());

    let bad = run_check(
        body_leading_blank::run,
        ids::CHECK_BODY_LEADING_BLANK,
        "test(RCD-1): a valid angular commit with a scope\n     Some content in the body",
    );
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].message, "body must have leading blank line");
    assert_eq!(bad[0].location.as_ref().and_then(|l| l.line), Some(2));
}

#[test]
fn body_leading_blank_ignores_header_only_messages() {
    let out = run_check(
        body_leading_blank::run,
        ids::CHECK_BODY_LEADING_BLANK,
        "feat(RCD-1): a valid commit message",
    );
    assert!(out.is_empty());
}

#[test]
fn footer_leading_blank_requires_empty_line_before_footer() {
    let ok = run_check(
        footer_leading_blank::run,
        ids::CHECK_FOOTER_LEADING_BLANK,
        "feat(RCD-1): drop v1\n\nbody\n\nBREAKING CHANGE: v1 is gone",
    );
    assert!(ok.is_empty());

    let bad = run_check(
        footer_leading_blank::run,
        ids::CHECK_FOOTER_LEADING_BLANK,
        "feat(RCD-1): drop v1\n\nbody\nBREAKING CHANGE: v1 is gone",
    );
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].code, ids::CODE_FOOTER_MISSING_LEADING_BLANK);
    assert_eq!(bad[0].location.as_ref().and_then(|l| l.line), Some(4));
}

#[test]
fn footer_leading_blank_ignores_messages_without_footer() {
    let out = run_check(
        footer_leading_blank::run,
        ids::CHECK_FOOTER_LEADING_BLANK,
        "feat(RCD-1): x\n\njust a body",
    );
    assert!(out.is_empty());
}

#[test]
fn header_max_length_reports_lengths() {
    let out = run_check(
        header_max_length::run,
        ids::CHECK_HEADER_MAX_LENGTH,
        "test(RCD-1): that its an error when there is ia realllllllllllllllllllllly long header",
    );
    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].message,
        "header must not be longer than 72 characters, current length is 86"
    );
    assert_eq!(out[0].data["length"], 86);
    assert_eq!(out[0].data["max_length"], 72);
}

#[test]
fn header_max_length_counts_characters() {
    let header = format!("feat(RCD-1): {}", "é".repeat(59));
    assert_eq!(header.chars().count(), 72);
    let out = run_check(header_max_length::run, ids::CHECK_HEADER_MAX_LENGTH, &header);
    assert!(out.is_empty());
}

#[test]
fn subject_case_rejects_capitalized_subjects() {
    for subject in ["Add export", "Add Export", "AddExport", "ADD EXPORT"] {
        let out = run_check(
            subject_case::run,
            ids::CHECK_SUBJECT_CASE,
            &format!("feat(RCD-1): {subject}"),
        );
        assert_eq!(out.len(), 1, "{subject}");
        assert_eq!(
            out[0].message,
            "subject must not be sentence-case, start-case, pascal-case, upper-case"
        );
    }
}

#[test]
fn subject_case_accepts_lower_case_and_non_letter_starts() {
    for subject in ["add export", "add `Export` helper", "`Export` helper", "1st pass"] {
        let out = run_check(
            subject_case::run,
            ids::CHECK_SUBJECT_CASE,
            &format!("feat(RCD-1): {subject}"),
        );
        assert!(out.is_empty(), "{subject}");
    }
}

#[test]
fn subject_case_records_matched_cases() {
    let out = run_check(
        subject_case::run,
        ids::CHECK_SUBJECT_CASE,
        "feat(RCD-1): ADD EXPORT",
    );
    let matched = out[0].data["matched_cases"].as_array().unwrap();
    assert!(matched.iter().any(|c| c == "upper-case"));
    assert!(matched.iter().any(|c| c == "sentence-case"));
}

#[test]
fn subject_full_stop_is_rejected() {
    let out = run_check(
        subject_full_stop::run,
        ids::CHECK_SUBJECT_FULL_STOP,
        "docs(RCD-5): explain retry settings.",
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "subject may not end with full stop");

    let out = run_check(
        subject_full_stop::run,
        ids::CHECK_SUBJECT_FULL_STOP,
        "docs(RCD-5): explain retry settings",
    );
    assert!(out.is_empty());
}

#[test]
fn type_case_requires_lower_case() {
    let out = run_check(type_case::run, ids::CHECK_TYPE_CASE, "FEAT(RCD-1): x");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "type must be lower-case");

    let out = run_check(type_case::run, ids::CHECK_TYPE_CASE, "feat(RCD-1): x");
    assert!(out.is_empty());
}

#[test]
fn type_enum_lists_allowed_types() {
    let out = run_check(
        type_enum::run,
        ids::CHECK_TYPE_ENUM,
        "no: no is not not an invalid commit type",
    );
    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].message,
        "type must be one of [build, chore, ci, docs, feat, fix, perf, refactor, revert, style, test]"
    );
}

#[test]
fn type_checks_skip_unstructured_headers() {
    for (check, id) in [
        (type_case::run as Check, ids::CHECK_TYPE_CASE),
        (type_enum::run as Check, ids::CHECK_TYPE_ENUM),
        (subject_case::run as Check, ids::CHECK_SUBJECT_CASE),
        (subject_full_stop::run as Check, ids::CHECK_SUBJECT_FULL_STOP),
    ] {
        assert!(run_check(check, id, "just some words.").is_empty(), "{id}");
    }
}

#[test]
fn scope_issue_id_reports_reason_code_and_variant() {
    let out = run_check(scope_issue_id::run, ids::CHECK_SCOPE_ISSUE_ID, "feat: no scope");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].code, ids::CODE_SCOPE_REQUIRED);
    assert_eq!(out[0].message, "a scope must be set");
    assert_eq!(out[0].data["variant"], "flexible");
    assert!(out[0].fingerprint.is_some());
}

#[test]
fn scope_issue_id_uses_configured_variant() {
    let mut cfg = config_with_check(ids::CHECK_SCOPE_ISSUE_ID, Severity::Error);
    cfg.variant = PolicyVariant::Strict;
    let message = CommitMessage::parse(
        "revert(RCD-1): a valid commit message",
        &HeaderParser::new(cfg.variant.grammar()),
    );
    let mut out = Vec::new();
    scope_issue_id::run(&message, &cfg, &mut out);
    assert!(out.is_empty());
}

#[test]
fn findings_carry_commit_location() {
    let cfg = config_with_check(ids::CHECK_TYPE_CASE, Severity::Warning);
    let message = CommitMessage::parse(
        "FEAT(RCD-1): x",
        &HeaderParser::new(cfg.variant.grammar()),
    )
    .with_commit("abc123");
    let mut out = Vec::new();
    type_case::run(&message, &cfg, &mut out);
    assert_eq!(out[0].severity, Severity::Warning);
    assert_eq!(
        out[0].location.as_ref().and_then(|l| l.commit.as_deref()),
        Some("abc123")
    );
}
