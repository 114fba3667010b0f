use super::utils::{finding, header_data};
use crate::message::CommitMessage;
use crate::policy::EffectiveConfig;
use commitguard_types::{Finding, ids};
use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"`.*?`|".*?"|'.*?'"#).expect("quoted segment"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubjectCase {
    Sentence,
    Start,
    Pascal,
    Upper,
}

/// Cases a subject must never be written in.
pub const FORBIDDEN: [SubjectCase; 4] = [
    SubjectCase::Sentence,
    SubjectCase::Start,
    SubjectCase::Pascal,
    SubjectCase::Upper,
];

impl SubjectCase {
    pub fn as_str(self) -> &'static str {
        match self {
            SubjectCase::Sentence => "sentence-case",
            SubjectCase::Start => "start-case",
            SubjectCase::Pascal => "pascal-case",
            SubjectCase::Upper => "upper-case",
        }
    }

    fn transform(self, input: &str) -> String {
        match self {
            SubjectCase::Sentence => upper_first(input),
            SubjectCase::Start => words(input)
                .iter()
                .map(|w| upper_first(w))
                .collect::<Vec<_>>()
                .join(" "),
            SubjectCase::Pascal => words(input)
                .iter()
                .map(|w| upper_first(&w.to_lowercase()))
                .collect(),
            SubjectCase::Upper => input.to_uppercase(),
        }
    }

    /// `input` already is in this case.
    pub fn matches(self, input: &str) -> bool {
        let transformed = self.transform(input);
        if transformed.is_empty() || transformed.starts_with(|c: char| c.is_ascii_digit()) {
            return false;
        }
        transformed == input
    }
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Split on non-alphanumerics and on lower-to-upper transitions (`fooBar` -> `foo`, `Bar`).
fn words(input: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in input.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            out.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

pub fn run(message: &CommitMessage, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_SUBJECT_CASE) else {
        return;
    };
    let Some(subject) = message.header.subject.as_deref() else {
        return;
    };
    if !subject.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return;
    }

    let stripped = QUOTED.replace_all(subject, "");
    let input = stripped.trim();
    let matched: Vec<&str> = FORBIDDEN
        .iter()
        .filter(|case| case.matches(input))
        .map(|case| case.as_str())
        .collect();

    if matched.is_empty() {
        return;
    }

    let forbidden: Vec<&str> = FORBIDDEN.iter().map(|c| c.as_str()).collect();
    let mut data = header_data(message);
    data["matched_cases"] = matched.into();

    out.push(finding(
        message,
        policy,
        ids::CHECK_SUBJECT_CASE,
        ids::CODE_SUBJECT_FORBIDDEN_CASE,
        format!("subject must not be {}", forbidden.join(", ")),
        1,
        "Start the subject with a lower-case word.",
        data,
    ));
}
