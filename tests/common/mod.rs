use std::path::Path;

use mjk::options::BuildOptions;
use mjk::paths::LayoutPolicy;

/// Baseline options for a throwaway project rooted at `root`: flatten
/// layout, no minification, `src/` and `dist/` under the root.
pub fn options(root: &Path, inputs: Vec<String>, templates: Vec<String>) -> BuildOptions {
    BuildOptions {
        inputs,
        template_patterns: templates,
        data_source: None,
        layout: LayoutPolicy::Flatten,
        clean: false,
        block: false,
        minify: false,
        watch: false,
        change_incremental: false,
        src_base: root.join("src"),
        out_base: root.join("dist"),
    }
}
