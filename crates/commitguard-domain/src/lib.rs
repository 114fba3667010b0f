//! Pure commit message policy evaluation (no IO).
//!
//! Input: commit message text and an effective config constructed elsewhere.
//! Output: findings + verdict + counts.

#![forbid(unsafe_code)]

pub mod checks;
pub mod fingerprint;
pub mod header;
pub mod ignore;
pub mod message;
pub mod policy;
pub mod report;
pub mod scope_policy;

mod engine;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_support;

pub use engine::{compute_verdict, evaluate, lint};
