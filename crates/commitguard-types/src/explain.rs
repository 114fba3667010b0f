//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after commit message examples.
    pub examples: ExamplePair,
}

/// Before and after commit message examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Message that would trigger a finding.
    pub before: &'static str,
    /// Message that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_BODY_LEADING_BLANK => Some(explain_body_leading_blank()),
        ids::CHECK_FOOTER_LEADING_BLANK => Some(explain_footer_leading_blank()),
        ids::CHECK_HEADER_MAX_LENGTH => Some(explain_header_max_length()),
        ids::CHECK_SUBJECT_CASE => Some(explain_subject_case()),
        ids::CHECK_SUBJECT_FULL_STOP => Some(explain_subject_full_stop()),
        ids::CHECK_TYPE_CASE => Some(explain_type_case()),
        ids::CHECK_TYPE_ENUM => Some(explain_type_enum()),
        ids::CHECK_SCOPE_ISSUE_ID => Some(explain_scope_issue_id()),

        // Codes
        ids::CODE_BODY_MISSING_LEADING_BLANK => Some(explain_body_leading_blank()),
        ids::CODE_FOOTER_MISSING_LEADING_BLANK => Some(explain_footer_leading_blank()),
        ids::CODE_HEADER_TOO_LONG => Some(explain_header_max_length()),
        ids::CODE_SUBJECT_FORBIDDEN_CASE => Some(explain_subject_case()),
        ids::CODE_SUBJECT_FULL_STOP => Some(explain_subject_full_stop()),
        ids::CODE_TYPE_NOT_LOWER_CASE => Some(explain_type_case()),
        ids::CODE_TYPE_NOT_ALLOWED => Some(explain_type_enum()),
        ids::CODE_SCOPE_NOT_UPPERCASE => Some(explain_scope_not_uppercase()),
        ids::CODE_REVERT_MISSING_FULL_HEADER => Some(explain_revert_missing_full_header()),
        ids::CODE_SCOPE_REQUIRED => Some(explain_scope_required()),
        ids::CODE_REVERT_MISSING_ID => Some(explain_revert_missing_id()),
        ids::CODE_SUBJECT_REQUIRED => Some(explain_subject_required()),
        ids::CODE_SCOPE_NOT_ISSUE_ID => Some(explain_scope_not_issue_id()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_BODY_LEADING_BLANK,
        ids::CHECK_FOOTER_LEADING_BLANK,
        ids::CHECK_HEADER_MAX_LENGTH,
        ids::CHECK_SUBJECT_CASE,
        ids::CHECK_SUBJECT_FULL_STOP,
        ids::CHECK_TYPE_CASE,
        ids::CHECK_TYPE_ENUM,
        ids::CHECK_SCOPE_ISSUE_ID,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_BODY_MISSING_LEADING_BLANK,
        ids::CODE_FOOTER_MISSING_LEADING_BLANK,
        ids::CODE_HEADER_TOO_LONG,
        ids::CODE_SUBJECT_FORBIDDEN_CASE,
        ids::CODE_SUBJECT_FULL_STOP,
        ids::CODE_TYPE_NOT_LOWER_CASE,
        ids::CODE_TYPE_NOT_ALLOWED,
        ids::CODE_SCOPE_NOT_UPPERCASE,
        ids::CODE_REVERT_MISSING_FULL_HEADER,
        ids::CODE_SCOPE_REQUIRED,
        ids::CODE_REVERT_MISSING_ID,
        ids::CODE_SUBJECT_REQUIRED,
        ids::CODE_SCOPE_NOT_ISSUE_ID,
    ]
}

/// Codes a check can emit. Empty for unknown check ids.
pub fn codes_for_check(check_id: &str) -> &'static [&'static str] {
    match check_id {
        ids::CHECK_BODY_LEADING_BLANK => &[ids::CODE_BODY_MISSING_LEADING_BLANK],
        ids::CHECK_FOOTER_LEADING_BLANK => &[ids::CODE_FOOTER_MISSING_LEADING_BLANK],
        ids::CHECK_HEADER_MAX_LENGTH => &[ids::CODE_HEADER_TOO_LONG],
        ids::CHECK_SUBJECT_CASE => &[ids::CODE_SUBJECT_FORBIDDEN_CASE],
        ids::CHECK_SUBJECT_FULL_STOP => &[ids::CODE_SUBJECT_FULL_STOP],
        ids::CHECK_TYPE_CASE => &[ids::CODE_TYPE_NOT_LOWER_CASE],
        ids::CHECK_TYPE_ENUM => &[ids::CODE_TYPE_NOT_ALLOWED],
        ids::CHECK_SCOPE_ISSUE_ID => &[
            ids::CODE_SCOPE_NOT_UPPERCASE,
            ids::CODE_REVERT_MISSING_FULL_HEADER,
            ids::CODE_SCOPE_REQUIRED,
            ids::CODE_REVERT_MISSING_ID,
            ids::CODE_SUBJECT_REQUIRED,
            ids::CODE_SCOPE_NOT_ISSUE_ID,
        ],
        _ => &[],
    }
}

/// The check that emits `code`.
pub fn check_for_code(code: &str) -> Option<&'static str> {
    all_check_ids()
        .iter()
        .copied()
        .find(|check_id| codes_for_check(check_id).contains(&code))
}

// --- Check-level explanations ---

fn explain_body_leading_blank() -> Explanation {
    Explanation {
        title: "Body Leading Blank Line",
        description: "\
Requires an empty line between the header and the body of a commit message.

Git and most tooling treat the first paragraph of a message as its summary.
Without the blank line the body is folded into the header by `git log --oneline`,
`git shortlog` and patch-based workflows.",
        remediation: "\
Insert an empty line after the header before writing the body.",
        examples: ExamplePair {
            before: "feat(RCD-1): add export endpoint\nThe endpoint streams CSV rows.",
            after: "feat(RCD-1): add export endpoint\n\nThe endpoint streams CSV rows.",
        },
    }
}

fn explain_footer_leading_blank() -> Explanation {
    Explanation {
        title: "Footer Leading Blank Line",
        description: "\
Requires an empty line before the footer of a commit message.

The footer starts at the first `BREAKING CHANGE:` note or issue reference
(`Closes #12`, `Fixes RCD-4`). Changelog generators only recognize the footer
when it is its own paragraph.",
        remediation: "\
Insert an empty line before the first footer line.",
        examples: ExamplePair {
            before: "feat(RCD-1): drop v1 routes\n\nRoutes were deprecated.\nBREAKING CHANGE: v1 is gone",
            after: "feat(RCD-1): drop v1 routes\n\nRoutes were deprecated.\n\nBREAKING CHANGE: v1 is gone",
        },
    }
}

fn explain_header_max_length() -> Explanation {
    Explanation {
        title: "Header Maximum Length",
        description: "\
Limits the header line to 72 characters (configurable with `header_max_length`).

Long headers are truncated in `git log`, pull request titles and terminal UIs.",
        remediation: "\
Shorten the subject and move details into the body.",
        examples: ExamplePair {
            before: "test(RCD-1): that its an error when there is ia realllllllllllllllllllllly long header",
            after: "test(RCD-1): reject overlong headers\n\nThe lint now reports headers over 72 characters.",
        },
    }
}

fn explain_subject_case() -> Explanation {
    Explanation {
        title: "Subject Case",
        description: "\
Forbids sentence-case, start-case, pascal-case and upper-case subjects.

Subjects read as a continuation of the type (`feat: add ...`), so they start
lower-case. Quoted and back-ticked segments are ignored, and subjects that do not
start with a letter are not checked.",
        remediation: "\
Start the subject with a lower-case word.",
        examples: ExamplePair {
            before: "fix(RCD-3): Handle empty payloads",
            after: "fix(RCD-3): handle empty payloads",
        },
    }
}

fn explain_subject_full_stop() -> Explanation {
    Explanation {
        title: "Subject Full Stop",
        description: "\
Forbids a trailing `.` at the end of the subject.

The header is a title, not a sentence.",
        remediation: "\
Remove the trailing full stop.",
        examples: ExamplePair {
            before: "docs(RCD-5): explain retry settings.",
            after: "docs(RCD-5): explain retry settings",
        },
    }
}

fn explain_type_case() -> Explanation {
    Explanation {
        title: "Type Case",
        description: "\
Requires the commit type to be lower-case.",
        remediation: "\
Write the type in lower-case letters.",
        examples: ExamplePair {
            before: "FEAT(RCD-1): add export endpoint",
            after: "feat(RCD-1): add export endpoint",
        },
    }
}

fn explain_type_enum() -> Explanation {
    Explanation {
        title: "Type Enumeration",
        description: "\
Requires the commit type to be one of the configured types.

Default types: build, chore, ci, docs, feat, fix, perf, refactor, revert, style,
test. Release tooling derives version bumps and changelog sections from the type.",
        remediation: "\
Pick the type that best describes the change, or extend `types` in
`commitguard.toml` if your team agreed on a new one.",
        examples: ExamplePair {
            before: "no: no is not not an invalid commit type",
            after: "chore(RCD-9): bump toolchain",
        },
    }
}

fn explain_scope_issue_id() -> Explanation {
    Explanation {
        title: "Scope Is An Issue ID",
        description: "\
Requires every header to carry an issue tracker identifier as its scope, such as
`feat(RCD-1): ...`. An identifier is one or more upper-case letters, a hyphen and
one or more digits.

Revert commits must name the issue in their own scope and wrap the complete header
of the reverted commit: `revert(RCD-2): feat(RCD-1): add export endpoint`. Breaking
markers (`!`) are allowed on both the revert and the wrapped header.

Two variants exist. `flexible` accepts any parenthesized scope at parse time and
reports precise diagnostics (upper-case, missing scope, revert shape). `strict`
only recognizes identifier-shaped scopes and reports fewer, coarser diagnostics.",
        remediation: "\
Put the issue identifier in parentheses after the type. For reverts, keep the
original header intact after `revert(<ID>): `.",
        examples: ExamplePair {
            before: "feat: add export endpoint",
            after: "feat(RCD-1): add export endpoint",
        },
    }
}

// --- Code-level explanations ---

fn explain_scope_not_uppercase() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Scope Must Be Upper-Case";
    exp.examples = ExamplePair {
        before: "test(rcd-1): a valid commit message",
        after: "test(RCD-1): a valid commit message",
    };
    exp
}

fn explain_revert_missing_full_header() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Revert Must Wrap The Full Header";
    exp.examples = ExamplePair {
        before: "revert(RCD-1): a valid commit message",
        after: "revert(RCD-2): feat(RCD-1): a valid commit message",
    };
    exp
}

fn explain_scope_required() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Scope Required";
    exp
}

fn explain_revert_missing_id() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Revert Scope Must Be An Issue ID";
    exp.examples = ExamplePair {
        before: "revert: test(RCD-1): a valid commit message",
        after: "revert(RCD-2): test(RCD-1): a valid commit message",
    };
    exp
}

fn explain_subject_required() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Subject Required";
    exp.examples = ExamplePair {
        before: "test(RCD-1):",
        after: "test(RCD-1): cover the empty payload case",
    };
    exp
}

fn explain_scope_not_issue_id() -> Explanation {
    let mut exp = explain_scope_issue_id();
    exp.title = "Scope Is Not An Issue ID";
    exp.examples = ExamplePair {
        before: "feat(HEYA): add export endpoint",
        after: "feat(HEYA-12): add export endpoint",
    };
    exp
}
