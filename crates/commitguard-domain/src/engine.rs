use crate::checks;
use crate::header::HeaderParser;
use crate::ignore;
use crate::message::CommitMessage;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use commitguard_types::{Finding, Severity, Verdict};

/// Parse `text` with the grammar of the configured variant and evaluate it.
pub fn lint(text: &str, cfg: &EffectiveConfig) -> DomainReport {
    let parser = HeaderParser::new(cfg.variant.grammar());
    evaluate(&CommitMessage::parse(text, &parser), cfg)
}

/// Evaluate an already parsed message.
///
/// `message.header` must have been parsed with `cfg.variant.grammar()`.
pub fn evaluate(message: &CommitMessage, cfg: &EffectiveConfig) -> DomainReport {
    if ignore::is_ignored(&message.header.raw, cfg) {
        return DomainReport {
            verdict: Verdict::Skip,
            findings: Vec::new(),
            counts: SeverityCounts::default(),
            ignored: true,
        };
    }

    let mut findings: Vec<Finding> = Vec::new();
    checks::run_all(message, cfg, &mut findings);

    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    DomainReport {
        verdict,
        findings,
        counts,
        ignored: false,
    }
}

pub fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
