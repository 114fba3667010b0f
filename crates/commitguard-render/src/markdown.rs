use crate::{RenderableLocation, RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Commitguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
        RenderableVerdictStatus::Skip => "SKIP",
    };
    let data = &report.data;
    out.push_str(&format!("- Verdict: **{verdict}**\n"));
    out.push_str(&format!(
        "- Profile: `{}` (variant `{}`)\n",
        data.profile, data.variant
    ));
    out.push_str(&format!(
        "- Messages: {} checked / {} ignored\n",
        data.messages_checked, data.messages_ignored
    ));
    out.push_str(&format!(
        "- Findings: {} error(s), {} warning(s)\n\n",
        data.errors, data.warnings
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        out.push_str(&format!(
            "- [{}] `{}` / `{}`: {}",
            sev,
            f.check_id.as_deref().unwrap_or(""),
            f.code,
            f.message
        ));
        if let Some(loc) = f.location.as_ref().and_then(describe_location) {
            out.push_str(&format!(" ({loc})"));
        }
        out.push('\n');

        if let Some(header) = &f.header {
            out.push_str(&format!("  - header: `{header}`\n"));
        }
        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {help}\n"));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {url}\n"));
        }
    }

    out
}

fn describe_location(loc: &RenderableLocation) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(commit) = &loc.commit {
        parts.push(format!("commit `{commit}`"));
    }
    if let Some(line) = loc.line {
        parts.push(format!("line {line}"));
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}
