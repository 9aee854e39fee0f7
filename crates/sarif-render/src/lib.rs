//! Rendering utilities for CI surfaces (plain text, GitHub annotations, Markdown).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod text;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use text::{level_or_default, render_text};
