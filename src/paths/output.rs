// src/paths/output.rs

use std::path::{Path, PathBuf};

use crate::errors::BuildError;
use crate::paths::RootSet;

/// How source paths map into the output tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// Mirror the path relative to the single configured source base.
    KeepTree,
    /// Mirror the path relative to the nearest containing root, determined
    /// per file.
    Flatten,
}

/// Compute the output path for a rendered source file.
///
/// The extension always normalizes to `.html` regardless of source type.
/// With clean urls a page `name` becomes `name/index.html`; an `index` stem
/// is left as `index.html` so directory urls keep working.
///
/// Pure and idempotent. The mapped path is guaranteed to stay under
/// `out_base`: a file outside `src_base` under [`LayoutPolicy::KeepTree`] is
/// refused as a path escape, and a file with no containing root under
/// [`LayoutPolicy::Flatten`] is refused rather than dropped at the output
/// root, where unrelated files sharing a basename would collide.
pub fn map_output(
    file: &Path,
    policy: LayoutPolicy,
    roots: &RootSet,
    src_base: &Path,
    out_base: &Path,
    is_clean: bool,
) -> Result<PathBuf, BuildError> {
    let parent = file.parent().unwrap_or_else(|| Path::new(""));

    let rel = match policy {
        LayoutPolicy::KeepTree => {
            parent.strip_prefix(src_base).map_err(|_| BuildError::PathEscape {
                path: file.to_path_buf(),
                out_base: out_base.to_path_buf(),
            })?
        }
        LayoutPolicy::Flatten => {
            let root = roots
                .containing(file)
                .ok_or_else(|| BuildError::NoContainingRoot(file.to_path_buf()))?;
            parent
                .strip_prefix(root)
                .map_err(|_| BuildError::NoContainingRoot(file.to_path_buf()))?
        }
    };

    let dir = out_base.join(rel);
    let stem = file.file_stem().and_then(|s| s.to_str()).unwrap_or("index");

    let dest = if is_clean && stem != "index" {
        dir.join(stem).join("index.html")
    } else {
        dir.join(format!("{stem}.html"))
    };

    if !dest.starts_with(out_base) {
        return Err(BuildError::PathEscape {
            path: dest,
            out_base: out_base.to_path_buf(),
        });
    }

    Ok(dest)
}
