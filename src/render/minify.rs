// src/render/minify.rs

//! HTML minification with a pinned option record.
//!
//! The option set is deliberate output normalization, not a default: closing
//! slashes, the doctype and attribute spacing are kept intact so the
//! minified tree stays semantically identical to the unminified one and
//! byte-deterministic from run to run.

use minify_html::Cfg;

fn cfg() -> Cfg {
    Cfg {
        do_not_minify_doctype: true,
        ensure_spec_compliant_unquoted_attribute_values: true,
        keep_closing_tags: true,
        keep_html_and_head_opening_tags: true,
        keep_spaces_between_attributes: true,
        ..Cfg::default()
    }
}

/// Minify a rendered HTML document.
pub fn minify_html(html: &str) -> String {
    let out = minify_html::minify(html.as_bytes(), &cfg());
    String::from_utf8(out)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
