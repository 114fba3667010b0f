//! The `check` use case: lint commit messages and produce a report.

use anyhow::Context;
use commitguard_domain::header::HeaderParser;
use commitguard_domain::message::{Cleanup, CommitMessage};
use commitguard_domain::report::{DomainReport, SeverityCounts};
use commitguard_settings::{Overrides, ResolvedConfig};
use commitguard_types::{
    CommitguardData, CommitguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
use rayon::prelude::*;
use time::OffsetDateTime;

/// One commit message to lint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageInput {
    /// Commit id, when the message was read from git history.
    pub commit: Option<String>,
    pub text: String,
    pub cleanup: Cleanup,
}

impl MessageInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            commit: None,
            text: text.into(),
            cleanup: Cleanup::Strip,
        }
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    pub fn with_cleanup(mut self, cleanup: Cleanup) -> Self {
        self.cleanup = cleanup;
        self
    }
}

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Messages in report order.
    pub messages: Vec<MessageInput>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CommitguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, lint every message, produce the report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        commitguard_settings::CommitguardConfigV1::default()
    } else {
        commitguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = commitguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    tracing::debug!(
        profile = %effective.profile,
        variant = effective.variant.as_str(),
        messages = input.messages.len(),
        "resolved config"
    );

    let parser = HeaderParser::new(effective.variant.grammar());
    let results: Vec<DomainReport> = input
        .messages
        .par_iter()
        .map(|m| {
            let mut message = CommitMessage::parse_with(&m.text, m.cleanup, &parser);
            if let Some(commit) = &m.commit {
                message = message.with_commit(commit.clone());
            }
            commitguard_domain::evaluate(&message, effective)
        })
        .collect();

    let mut findings = Vec::new();
    let mut ignored = 0u32;
    for (input_message, result) in input.messages.iter().zip(results) {
        tracing::debug!(
            commit = input_message.commit.as_deref().unwrap_or("-"),
            verdict = ?result.verdict,
            findings = result.findings.len(),
            "linted message"
        );
        if result.ignored {
            ignored += 1;
        }
        findings.extend(result.findings);
    }

    let checked = input.messages.len() as u32 - ignored;
    let verdict = if checked == 0 {
        Verdict::Skip
    } else {
        commitguard_domain::compute_verdict(&findings, effective.fail_on)
    };
    let counts = SeverityCounts::from_findings(&findings);

    let data = CommitguardData {
        profile: effective.profile.clone(),
        variant: effective.variant.as_str().to_string(),
        messages_checked: checked,
        messages_ignored: ignored,
        errors: counts.error,
        warnings: counts.warning,
    };

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "commitguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict,
        findings,
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn/skip, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Skip => 0,
        Verdict::Fail => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commitguard_types::ids;

    fn check(config_text: &str, messages: Vec<MessageInput>) -> CheckOutput {
        run_check(CheckInput {
            messages,
            config_text,
            overrides: Overrides::default(),
        })
        .expect("run_check")
    }

    fn lint(text: &str) -> CommitguardReport {
        check("", vec![MessageInput::new(text)]).report
    }

    fn assert_valid(text: &str) {
        let report = lint(text);
        assert_eq!(report.verdict, Verdict::Pass, "{text}");
        assert!(report.findings.is_empty(), "{text}: {:?}", report.findings);
    }

    fn assert_first_error(text: &str, expected: &str) {
        let report = lint(text);
        assert_eq!(report.verdict, Verdict::Fail, "{text}");
        assert_eq!(report.data.warnings, 0, "{text}");
        let first = report
            .findings
            .iter()
            .find(|f| f.severity == commitguard_types::Severity::Error)
            .map(|f| f.message.as_str());
        assert_eq!(first, Some(expected), "{text}");
    }

    #[test]
    fn a_valid_commit_message() {
        assert_valid("feat(RCD-1): a valid commit message");
    }

    #[test]
    fn a_valid_multi_line_commit() {
        assert_valid(
            "test(RCD-1): a valid angular commit with a scope\n\n     Some content in the body",
        );
    }

    #[test]
    fn a_leading_blank_line_after_header() {
        assert_first_error(
            "test(RCD-1): a valid angular commit with a scope\n     Some content in the body",
            "body must have leading blank line",
        );
    }

    #[test]
    fn an_unknown_type() {
        assert_first_error(
            "no: no is not not an invalid commit type",
            "type must be one of [build, chore, ci, docs, feat, fix, perf, refactor, revert, style, test]",
        );
    }

    #[test]
    fn no_scope() {
        assert_first_error(
            "feat: no is not not an invalid commit type",
            "a scope must be set",
        );
    }

    #[test]
    fn a_lower_case_scope() {
        assert_first_error(
            "feat(heya): no is not not an invalid commit type",
            "scope must be upper-case",
        );
    }

    #[test]
    fn an_invalid_issue_id() {
        assert_first_error(
            "feat(HEYA): no is not not an invalid commit type",
            "scope must be a JIRA issue ID",
        );
    }

    #[test]
    fn a_long_header() {
        assert_first_error(
            "test(RCD-1): that its an error when there is ia realllllllllllllllllllllly long header",
            "header must not be longer than 72 characters, current length is 86",
        );
    }

    #[test]
    fn breaking_marker_without_scope() {
        assert_first_error(
            "test!: with a breaking change in the type",
            "a scope must be set",
        );
    }

    #[test]
    fn breaking_marker_with_scope() {
        assert_valid("test(RCD-1)!: with a breaking change in the type");
    }

    #[test]
    fn a_subject_must_be_set() {
        assert_first_error("test(RCD-1):", "a subject must be set");
    }

    #[test]
    fn a_colon_must_be_set() {
        assert_first_error("test(RCD-1) dwadwadwa", "a subject must be set");
    }

    #[test]
    fn issue_key_must_be_upper_case() {
        assert_first_error(
            "test(rcd-1): a valid commit message",
            "scope must be upper-case",
        );
    }

    #[test]
    fn reverts_are_allowed() {
        assert_valid("revert(RCD-2): feat(RCD-1): a valid commit message");
    }

    #[test]
    fn reverts_need_the_full_reverted_header() {
        assert_first_error(
            "revert(RCD-1): a valid commit message",
            "revert commits should have the full commit name that is being reverted",
        );
    }

    #[test]
    fn reverts_need_an_issue_scope() {
        assert_first_error(
            "revert: test(RCD-1): a valid commit message",
            "revert commits should have the associated JIRA ID includes in the revert scope",
        );
    }

    #[test]
    fn breaking_reverts_are_allowed() {
        assert_valid("revert(RCD-2)!: feat(RCD-1): a valid commit message");
        assert_valid("revert(RCD-2)!: feat(RCD-1)!: a valid commit message");
    }

    #[test]
    fn leading_whitespace_is_trimmed() {
        assert_valid("\n   feat(RCD-1): a valid commit message\n\n");
    }

    #[test]
    fn report_envelope_and_summary() {
        let out = check(
            "",
            vec![
                MessageInput::new("feat(RCD-1): ok").with_commit("aaa"),
                MessageInput::new("Merge branch 'main' into feature").with_commit("bbb"),
                MessageInput::new("feat: no scope").with_commit("ccc"),
            ],
        );
        let report = out.report;
        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.tool.name, "commitguard");
        assert!(report.finished_at >= report.started_at);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.profile, "flexible");
        assert_eq!(report.data.variant, "flexible");
        assert_eq!(report.data.messages_checked, 2);
        assert_eq!(report.data.messages_ignored, 1);
        assert_eq!(report.data.errors, 1);
        assert_eq!(report.findings[0].code, ids::CODE_SCOPE_REQUIRED);
        assert_eq!(
            report.findings[0]
                .location
                .as_ref()
                .and_then(|l| l.commit.as_deref()),
            Some("ccc")
        );
    }

    #[test]
    fn findings_keep_input_order() {
        let messages: Vec<MessageInput> = (0..32)
            .map(|i| MessageInput::new("feat: no scope").with_commit(format!("c{i:02}")))
            .collect();
        let report = check("", messages).report;
        let commits: Vec<String> = report
            .findings
            .iter()
            .filter_map(|f| f.location.as_ref().and_then(|l| l.commit.clone()))
            .collect();
        let expected: Vec<String> = (0..32).map(|i| format!("c{i:02}")).collect();
        assert_eq!(commits, expected);
    }

    #[test]
    fn all_ignored_is_skip() {
        let report = check(
            "",
            vec![MessageInput::new("Merge pull request #1 from org/branch")],
        )
        .report;
        assert_eq!(report.verdict, Verdict::Skip);
        assert_eq!(report.data.messages_checked, 0);

        let empty = check("", Vec::new()).report;
        assert_eq!(empty.verdict, Verdict::Skip);
    }

    #[test]
    fn configured_ignores_skip_matching_messages() {
        let report = check(
            "ignores = [\"^WIP\", \"^tmp\"]",
            vec![
                MessageInput::new("WIP: halfway there"),
                MessageInput::new("tmp commit"),
                MessageInput::new("feat(RCD-1): done"),
            ],
        )
        .report;
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.messages_ignored, 2);
        assert_eq!(report.data.messages_checked, 1);
    }

    #[test]
    fn hash_lines_are_comments_only_in_editor_messages() {
        let text = "feat(RCD-1): add export\n# Notes";

        let edited = check("", vec![MessageInput::new(text)]).report;
        assert_eq!(edited.verdict, Verdict::Pass);

        let history = check(
            "",
            vec![MessageInput::new(text).with_cleanup(Cleanup::Whitespace)],
        )
        .report;
        assert_eq!(history.verdict, Verdict::Fail);
        assert_eq!(history.findings[0].code, ids::CODE_BODY_MISSING_LEADING_BLANK);
    }

    #[test]
    fn strict_profile_warns_on_blank_lines() {
        let out = check(
            "profile = \"strict\"",
            vec![MessageInput::new("feat(RCD-1): subject\nbody")],
        );
        assert_eq!(out.resolved_config.effective.profile, "strict");
        assert_eq!(out.report.verdict, Verdict::Warn);
        assert_eq!(out.report.data.warnings, 1);
        assert_eq!(out.report.data.variant, "strict");
    }

    #[test]
    fn invalid_config_is_an_error() {
        let err = run_check(CheckInput {
            messages: vec![MessageInput::new("feat(RCD-1): ok")],
            config_text: "variant = \"loose\"",
            overrides: Overrides::default(),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("resolve config"));
    }

    #[test]
    fn verdict_exit_codes() {
        assert_eq!(verdict_exit_code(Verdict::Pass), 0);
        assert_eq!(verdict_exit_code(Verdict::Warn), 0);
        assert_eq!(verdict_exit_code(Verdict::Skip), 0);
        assert_eq!(verdict_exit_code(Verdict::Fail), 2);
    }
}
