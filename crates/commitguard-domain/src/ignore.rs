//! Messages that are not linted at all.
//!
//! Git writes some headers itself (merges, `git revert`, autosquash). They never follow
//! the team convention and are skipped by default.

use crate::policy::EffectiveConfig;
use regex::Regex;
use std::sync::LazyLock;

static DEFAULT_IGNORES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^Merge pull request #\d+",
        r"^Merge (?:remote-tracking )?branch ",
        r"^Merge tag ",
        r"^Merged \S+ in(?:to)? ",
        r#"^Revert ".*""#,
        r"^(?:fixup|squash|amend)! ",
        r"^Automatic merge",
        r"^Auto-merged .* into ",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("default ignore pattern"))
    .collect()
});

/// Returns true when the header matches a default or configured ignore pattern.
pub fn is_ignored(header: &str, cfg: &EffectiveConfig) -> bool {
    if cfg.default_ignores && DEFAULT_IGNORES.iter().any(|re| re.is_match(header)) {
        return true;
    }

    cfg.ignores.iter().any(|re| re.is_match(header))
}
