// src/render/mod.rs

//! Rendering collaborators: the minijinja engine, markdown conversion and
//! HTML minification.
//!
//! Everything here is invoked per file by the pipeline; none of it knows
//! about output paths or the watch loop.

pub mod engine;
pub mod markdown;
pub mod minify;

pub use engine::Renderer;
pub use markdown::markdown_to_html;
pub use minify::minify_html;

use std::path::Path;

/// Extensions the generator picks up and renders. Anything else is passed
/// over, both at discovery time and when deciding what an added file means
/// for the watch loop.
pub const RENDERABLE_EXTENSIONS: &[&str] = &["njk", "html", "md", "mdown", "markdown"];

const MARKDOWN_EXTENSIONS: &[&str] = &["md", "mdown", "markdown"];

pub fn is_renderable(path: &Path) -> bool {
    has_extension(path, RENDERABLE_EXTENSIONS)
}

pub fn is_markdown(path: &Path) -> bool {
    has_extension(path, MARKDOWN_EXTENSIONS)
}

fn has_extension(path: &Path, set: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| set.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}
