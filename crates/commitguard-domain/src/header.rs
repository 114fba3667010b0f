//! Header grammar: `type(scope)!: subject`.
//!
//! Two grammars exist. [`Grammar::AnyScope`] captures whatever sits between the
//! parentheses, [`Grammar::IssueScope`] only captures issue-identifier scopes
//! (`RCD-1`). Parsing is total: a line that does not match yields a header with every
//! structured field absent.

use regex::Regex;
use std::sync::LazyLock;

/// Issue tracker identifier: upper-case key, hyphen, number.
pub const ISSUE_ID_PATTERN: &str = "[A-Z]+-[0-9]+";

/// Literal token that starts a revert header.
pub const REVERT: &str = "revert";

static ANY_SCOPE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z0-9_]*)(?:\((?P<scope>.*)\))?(?P<breaking>!)?: (?P<subject>.*)$")
        .expect("any-scope header grammar")
});

static ISSUE_SCOPE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[A-Za-z0-9_]*)(?:\((?P<scope>[A-Z]+-[0-9]+)\))?(?P<breaking>!)?: (?P<subject>.*)$",
    )
    .expect("issue-scope header grammar")
});

static ISSUE_SCOPED_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]*\([A-Z]+-[0-9]+\)!?: .*$").expect("issue-scoped header shape")
});

static REVERT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^revert\((?P<scope>[A-Z]+-[0-9]+)\)(?P<breaking>!)?: (?P<inner>.*)$")
        .expect("revert prefix")
});

static ISSUE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ISSUE_ID_PATTERN).expect("issue id"));

/// Returns true if `text` contains an issue identifier anywhere.
pub fn contains_issue_id(text: &str) -> bool {
    ISSUE_ID.is_match(text)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grammar {
    /// Any parenthesis content is a scope; its format is a policy concern.
    AnyScope,
    /// Only issue-identifier scopes are recognized.
    IssueScope,
}

impl Grammar {
    fn regex(self) -> &'static Regex {
        match self {
            Grammar::AnyScope => &ANY_SCOPE_HEADER,
            Grammar::IssueScope => &ISSUE_SCOPE_HEADER,
        }
    }
}

/// Structured view of one header line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedHeader {
    /// The header line exactly as given.
    pub raw: String,
    pub commit_type: Option<String>,
    /// Parenthesis content, case preserved.
    pub scope: Option<String>,
    pub breaking: bool,
    pub subject: Option<String>,
}

impl ParsedHeader {
    pub fn is_revert(&self) -> bool {
        self.commit_type.as_deref() == Some(REVERT)
    }

    /// False when the grammar did not match the line at all.
    pub fn is_structured(&self) -> bool {
        self.commit_type.is_some()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct HeaderParser {
    grammar: Grammar,
}

impl HeaderParser {
    pub fn new(grammar: Grammar) -> Self {
        Self { grammar }
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn parse(&self, line: &str) -> ParsedHeader {
        let Some(caps) = self.grammar.regex().captures(line) else {
            return ParsedHeader {
                raw: line.to_string(),
                ..ParsedHeader::default()
            };
        };

        let non_empty = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        ParsedHeader {
            raw: line.to_string(),
            commit_type: non_empty("type"),
            scope: caps.name("scope").map(|m| m.as_str().to_string()),
            breaking: caps.name("breaking").is_some(),
            subject: non_empty("subject"),
        }
    }
}

/// Which header shape the raw line matches, from most to least specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderShape {
    /// `type(ID)!?: subject`
    IssueScoped,
    /// `type(ID)?!?: subject` without the scope group.
    Conventional,
    /// Neither; the line has no recognizable `type: subject` structure.
    Unstructured,
}

impl HeaderShape {
    pub fn of(raw: &str) -> Self {
        if ISSUE_SCOPED_HEADER.is_match(raw) {
            HeaderShape::IssueScoped
        } else if ISSUE_SCOPE_HEADER.is_match(raw) {
            HeaderShape::Conventional
        } else {
            HeaderShape::Unstructured
        }
    }
}

/// A `revert(ID)!?: <header>` line split into its outer scope and the wrapped header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevertHeader {
    pub issue: String,
    pub breaking: bool,
    /// The reverted header, parsed with [`Grammar::IssueScope`].
    pub reverted: ParsedHeader,
}

impl RevertHeader {
    pub fn split(raw: &str) -> Option<Self> {
        let caps = REVERT_PREFIX.captures(raw)?;
        let reverted = HeaderParser::new(Grammar::IssueScope).parse(&caps["inner"]);
        Some(Self {
            issue: caps["scope"].to_string(),
            breaking: caps.name("breaking").is_some(),
            reverted,
        })
    }

    /// The wrapped header carries its own issue scope.
    pub fn wraps_full_header(&self) -> bool {
        self.reverted.scope.is_some()
    }
}
