use commitguard_types::{Finding, Severity, Verdict};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub error: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Error => counts.error += 1,
            }
        }
        counts
    }
}

/// Outcome of linting one message.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Findings in registry order.
    pub findings: Vec<Finding>,
    pub counts: SeverityCounts,
    /// The message matched an ignore rule and was not linted.
    pub ignored: bool,
}

impl DomainReport {
    /// No error-severity findings.
    pub fn is_valid(&self) -> bool {
        self.counts.error == 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }
}
