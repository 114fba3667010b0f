//! Use case orchestration for commitguard.
//!
//! This crate provides the application layer: use cases that coordinate the settings, domain
//! and render layers. It stays thin and delegates the heavy lifting.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;

pub use commitguard_domain::message::Cleanup;
pub use check::{CheckInput, CheckOutput, MessageInput, run_check, verdict_exit_code};
pub use explain::{
    ExplainOutput, ExplainTopic, ReasonSummary, format_explanation, format_not_found, run_explain,
};
pub use render::{render_annotations, render_markdown, render_text};
pub use report::{parse_report_json, runtime_error_report, serialize_report, to_renderable};
