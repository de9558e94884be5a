// src/paths/classify.rs

use std::path::{Path, PathBuf};

/// Find the root directory that contains `file`.
///
/// Among all roots that are ancestors of (or equal to) the file's directory,
/// the one with the longest path wins; a tie goes to the root that appears
/// earlier in `roots`. This makes the answer independent of root ordering,
/// which a naive first-match scan is not.
///
/// Returns `None` when no root contains the file. That is a valid outcome,
/// not an error: callers decide whether absence matters.
pub fn classify<'a>(file: &Path, roots: &'a [PathBuf]) -> Option<&'a Path> {
    let mut best: Option<&'a Path> = None;

    for root in roots {
        if !file.starts_with(root) {
            continue;
        }
        match best {
            Some(current) if root.as_os_str().len() <= current.as_os_str().len() => {}
            _ => best = Some(root),
        }
    }

    best
}
