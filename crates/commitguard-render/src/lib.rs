//! Rendering utilities for terminals and CI surfaces (text, Markdown, GitHub annotations).
//!
//! Renderers work on a small view model so this crate does not depend on the report DTOs.

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use text::render_text;

#[cfg(test)]
mod fixtures;
