//! Commit message model: header, body and footer split.

use crate::header::{HeaderParser, ParsedHeader};
use regex::Regex;
use std::sync::LazyLock;

/// Lines starting with this character are git editor comments.
pub const COMMENT_CHAR: char = '#';

static FOOTER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:BREAKING CHANGE: |BREAKING-CHANGE: |(?i:close[sd]?|fix(?:e[sd])?|resolve[sd]?)\s+(?:#[0-9]+|[A-Z]+-[0-9]+))",
    )
    .expect("footer line")
});

/// How raw message text is cleaned before linting, after git's `--cleanup` modes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cleanup {
    /// Editor buffer: drop `#` comment lines, then trim.
    #[default]
    Strip,
    /// Already cleaned by git (history): only trim.
    Whitespace,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommitMessage {
    /// Commit id when the message came from git history.
    pub commit: Option<String>,
    /// Normalized message text.
    pub raw: String,
    pub lines: Vec<String>,
    pub header: ParsedHeader,
    pub body: Option<String>,
    pub footer: Option<String>,
    /// Index into `lines` of the first footer line.
    pub footer_start: Option<usize>,
}

impl CommitMessage {
    pub fn parse(text: &str, parser: &HeaderParser) -> Self {
        Self::parse_with(text, Cleanup::Strip, parser)
    }

    pub fn parse_with(text: &str, cleanup: Cleanup, parser: &HeaderParser) -> Self {
        let raw = normalize(text, cleanup);
        let lines: Vec<String> = raw.lines().map(str::to_string).collect();

        let header_line = lines.first().map(String::as_str).unwrap_or_default();
        let header = parser.parse(header_line);

        let footer_start = lines
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, line)| FOOTER_LINE.is_match(line))
            .map(|(idx, _)| idx);

        let body_end = footer_start.unwrap_or(lines.len());
        let body = paragraph(lines.get(1..body_end).unwrap_or_default());
        let footer = footer_start.and_then(|start| paragraph(&lines[start..]));

        Self {
            commit: None,
            raw,
            lines,
            header,
            body,
            footer,
            footer_start,
        }
    }

    pub fn with_commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    /// The line right after the header, if the message has more than one line.
    pub fn line_after_header(&self) -> Option<&str> {
        self.lines.get(1).map(String::as_str)
    }
}

pub fn normalize(text: &str, cleanup: Cleanup) -> String {
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| cleanup == Cleanup::Whitespace || !line.starts_with(COMMENT_CHAR))
        .collect();
    kept.join("\n").trim().to_string()
}

fn paragraph(lines: &[String]) -> Option<String> {
    let text = lines.join("\n");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
