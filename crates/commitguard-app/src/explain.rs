//! The `explain` use case.
//!
//! Registry text is joined with what the built-in profiles do with the check: its
//! severity per profile and, for the scope policy, the fixed wording of each reason and
//! the variants that can report it.

use commitguard_domain::scope_policy::ScopeReason;
use commitguard_types::explain::{self, Explanation};

/// Everything `commitguard explain <id>` prints for a known identifier.
#[derive(Clone, Debug)]
pub struct ExplainTopic {
    pub identifier: String,
    pub explanation: Explanation,
    /// The check itself, or the check that emits the requested code.
    pub check_id: &'static str,
    /// Codes covered by this topic: all codes of a check, or just the requested one.
    pub codes: Vec<&'static str>,
    /// Severity in each built-in profile; `None` when the profile disables the check.
    pub profiles: Vec<(&'static str, Option<&'static str>)>,
    pub scope_reasons: Vec<ReasonSummary>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonSummary {
    pub code: &'static str,
    pub message: &'static str,
    pub variants: Vec<&'static str>,
}

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Box<ExplainTopic>),
    NotFound { identifier: String },
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let Some(explanation) = explain::lookup_explanation(identifier) else {
        return ExplainOutput::NotFound {
            identifier: identifier.to_string(),
        };
    };

    let (check_id, codes): (&'static str, Vec<&'static str>) =
        match explain::check_for_code(identifier) {
            Some(check_id) => {
                let code = explain::codes_for_check(check_id)
                    .iter()
                    .copied()
                    .find(|code| *code == identifier);
                (check_id, code.into_iter().collect())
            }
            None => {
                let Some(check_id) = explain::all_check_ids()
                    .iter()
                    .copied()
                    .find(|id| *id == identifier)
                else {
                    return ExplainOutput::NotFound {
                        identifier: identifier.to_string(),
                    };
                };
                (check_id, explain::codes_for_check(check_id).to_vec())
            }
        };

    let profiles = commitguard_settings::PROFILES
        .iter()
        .map(|&profile| {
            let severity = commitguard_settings::preset(profile)
                .and_then(|cfg| cfg.check_policy(check_id).map(|p| p.severity.as_str()));
            (profile, severity)
        })
        .collect();

    let scope_reasons = codes
        .iter()
        .filter_map(|code| ScopeReason::from_code(code))
        .map(|reason| ReasonSummary {
            code: reason.code(),
            message: reason.message(),
            variants: reason.variants().iter().map(|v| v.as_str()).collect(),
        })
        .collect();

    ExplainOutput::Found(Box::new(ExplainTopic {
        identifier: identifier.to_string(),
        explanation,
        check_id,
        codes,
        profiles,
        scope_reasons,
    }))
}

/// Format an explanation for terminal display.
pub fn format_explanation(topic: &ExplainTopic) -> String {
    let exp = &topic.explanation;
    let mut out = String::new();

    out.push_str(&format!("{}\n{}\n\n", exp.title, "=".repeat(exp.title.chars().count())));
    out.push_str(&format!("check: {}\n", topic.check_id));
    out.push_str(&format!("codes: {}\n", topic.codes.join(", ")));
    let profiles: Vec<String> = topic
        .profiles
        .iter()
        .map(|(profile, severity)| format!("{profile}={}", severity.unwrap_or("off")))
        .collect();
    out.push_str(&format!("profiles: {}\n\n", profiles.join(", ")));

    out.push_str(exp.description);
    out.push_str("\n\n");

    if !topic.scope_reasons.is_empty() {
        out.push_str("Messages\n--------\n");
        for reason in &topic.scope_reasons {
            out.push_str(&format!(
                "{}: \"{}\" ({})\n",
                reason.code,
                reason.message,
                reason.variants.join(", ")
            ));
        }
        out.push('\n');
    }

    out.push_str("Remediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str(&format!(
        "Before (violation):\n```text\n{}\n```\n\nAfter (fixed):\n```text\n{}\n```\n",
        exp.examples.before, exp.examples.after
    ));

    out
}

/// Unknown identifier: list every check with the codes it emits.
pub fn format_not_found(identifier: &str) -> String {
    let mut out = format!("Unknown check_id or code: {identifier}\n\nKnown checks and codes:\n");
    for check_id in explain::all_check_ids() {
        out.push_str(&format!("  {check_id}\n"));
        for code in explain::codes_for_check(check_id) {
            out.push_str(&format!("    - {code}\n"));
        }
    }
    out
}
