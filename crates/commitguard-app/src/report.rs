use anyhow::Context;
use commitguard_render::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
use commitguard_types::{
    CommitguardData, CommitguardReport, Finding, SCHEMA_REPORT_V1, Severity, ToolMeta, Verdict,
    ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<CommitguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse commitguard v1 report")
}

pub fn serialize_report(report: &CommitguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

pub fn to_renderable(report: &CommitguardReport) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdictStatus::Pass,
            Verdict::Warn => RenderableVerdictStatus::Warn,
            Verdict::Fail => RenderableVerdictStatus::Fail,
            Verdict::Skip => RenderableVerdictStatus::Skip,
        },
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            variant: report.data.variant.clone(),
            messages_checked: report.data.messages_checked,
            messages_ignored: report.data.messages_ignored,
            errors: report.data.errors,
            warnings: report.data.warnings,
        },
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        check_id: Some(f.check_id.clone()),
        code: f.code.clone(),
        message: f.message.clone(),
        header: f
            .data
            .get("header")
            .and_then(|h| h.as_str())
            .map(str::to_string),
        location: f.location.as_ref().map(|loc| RenderableLocation {
            commit: loc.commit.clone(),
            line: loc.line,
        }),
        help: f.help.clone(),
        url: f.url.clone(),
    }
}

/// Report written when the tool itself failed, so CI still gets a receipt.
pub fn runtime_error_report(profile: &str, message: &str) -> CommitguardReport {
    let now = OffsetDateTime::now_utc();

    CommitguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "commitguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            severity: Severity::Error,
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            location: None,
            help: Some("Fix the tool error and re-run commitguard.".to_string()),
            url: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: CommitguardData {
            profile: profile.to_string(),
            variant: "unknown".to_string(),
            errors: 1,
            ..CommitguardData::default()
        },
    }
}
