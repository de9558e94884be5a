// src/render/markdown.rs

use pulldown_cmark::{Options, Parser, html};

/// Convert markdown text to an HTML fragment.
///
/// Runs before template rendering, so jinja tags inside the markdown survive
/// into the rendered output.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
