use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

const INPUT: &str = "⧗";
const ERROR: &str = "✖";
const WARNING: &str = "⚠";
const INFO: &str = "ⓘ";
const OK: &str = "✔";

/// Terminal report in the familiar commitlint layout.
///
/// Findings are grouped by the message they belong to; each group starts with an input
/// line showing the header (and the commit, when linting history).
pub fn render_text(report: &RenderableReport) -> String {
    let mut out = String::new();
    let mut current: Option<(Option<&str>, Option<&str>)> = None;

    for f in &report.findings {
        let commit = f.location.as_ref().and_then(|l| l.commit.as_deref());
        let key = (commit, f.header.as_deref());
        if current != Some(key) {
            if current.is_some() {
                out.push('\n');
            }
            match key {
                (Some(commit), Some(header)) => {
                    out.push_str(&format!("{INPUT}   {commit}: {header}\n"))
                }
                (None, Some(header)) => out.push_str(&format!("{INPUT}   input: {header}\n")),
                (Some(commit), None) => out.push_str(&format!("{INPUT}   {commit}\n")),
                (None, None) => {}
            }
            current = Some(key);
        }

        let symbol = match f.severity {
            RenderableSeverity::Error => ERROR,
            RenderableSeverity::Warning => WARNING,
            RenderableSeverity::Info => INFO,
        };
        match &f.check_id {
            Some(check_id) => out.push_str(&format!("{symbol}   {} [{check_id}]\n", f.message)),
            None => out.push_str(&format!("{symbol}   {}\n", f.message)),
        }
    }

    if !report.findings.is_empty() {
        out.push('\n');
    }

    let data = &report.data;
    let symbol = match report.verdict {
        RenderableVerdictStatus::Fail => ERROR,
        RenderableVerdictStatus::Warn => WARNING,
        RenderableVerdictStatus::Pass | RenderableVerdictStatus::Skip => OK,
    };
    out.push_str(&format!(
        "{symbol}   found {} problems, {} warnings\n",
        data.errors, data.warnings
    ));
    out.push_str(&format!(
        "{INFO}   checked {} message(s), ignored {} (profile {}, variant {})\n",
        data.messages_checked, data.messages_ignored, data.profile, data.variant
    ));

    out
}
