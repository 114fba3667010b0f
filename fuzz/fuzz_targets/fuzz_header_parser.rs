//! Fuzz target for header parsing and message linting.
//!
//! Goal: parsing and policy evaluation are total. Every input yields a verdict and
//! nothing panics.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_header_parser
//! ```

#![no_main]

use commitguard_domain::header::{Grammar, HeaderParser, HeaderShape, RevertHeader};
use commitguard_domain::policy::PolicyVariant;
use commitguard_domain::scope_policy::evaluator_for;
use commitguard_settings::{CommitguardConfigV1, Overrides, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    for grammar in [Grammar::AnyScope, Grammar::IssueScope] {
        let parsed = HeaderParser::new(grammar).parse(text);
        assert_eq!(parsed.raw, text);
    }
    let _ = HeaderShape::of(text);
    let _ = RevertHeader::split(text);

    for variant in [PolicyVariant::Flexible, PolicyVariant::Strict] {
        let parsed = HeaderParser::new(variant.grammar()).parse(text);
        let first = evaluator_for(variant).evaluate(&parsed);
        assert_eq!(first, evaluator_for(variant).evaluate(&parsed));
    }

    for profile in ["flexible", "strict"] {
        let overrides = Overrides {
            profile: Some(profile.to_string()),
            ..Overrides::default()
        };
        if let Ok(resolved) = resolve_config(CommitguardConfigV1::default(), overrides) {
            let report = commitguard_domain::lint(text, &resolved.effective);
            assert_eq!(report.is_valid(), report.errors().next().is_none());
        }
    }
});
