//! Fuzz target for `commitguard.toml` parsing and resolution.
//!
//! Goal: bad configs are errors, never panics. A config that resolves must produce a
//! usable engine config.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config
//! ```

#![no_main]

use commitguard_settings::{Overrides, parse_config_toml, resolve_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(cfg) = parse_config_toml(text) else {
        return;
    };
    if let Ok(resolved) = resolve_config(cfg, Overrides::default()) {
        let _ = commitguard_domain::lint("feat(RCD-1): fuzzed config", &resolved.effective);
    }
});
