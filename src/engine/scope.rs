// src/engine/scope.rs

use std::path::{Path, PathBuf};

use crate::engine::WatchKind;
use crate::paths::RootSet;
use crate::render;

/// How much of the project a filesystem event invalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebuildScope {
    /// Re-resolve everything and re-render all discovered sources.
    Full,
    /// Re-render just this file.
    Single(PathBuf),
}

impl RebuildScope {
    /// Merge a newly requested scope into an already pending one. Full
    /// absorbs single; two singles for different files widen to full.
    pub fn merge(self, other: RebuildScope) -> RebuildScope {
        match (self, other) {
            (RebuildScope::Single(a), RebuildScope::Single(b)) if a == b => {
                RebuildScope::Single(a)
            }
            _ => RebuildScope::Full,
        }
    }
}

/// Decide the rebuild scope for one watch event, or `None` to ignore it.
///
/// - An added template can affect any page, so it rebuilds everything.
/// - An added renderable source only needs itself rendered.
/// - Anything else added is ignored.
/// - A change rebuilds the full batch by default: changed shared data or a
///   changed partial cannot be told apart from the event alone. The
///   single-file alternative is opt-in via `change_incremental`.
pub fn decide(
    path: &Path,
    kind: WatchKind,
    template_roots: &RootSet,
    change_incremental: bool,
) -> Option<RebuildScope> {
    let in_templates = template_roots.containing(path).is_some();

    match kind {
        WatchKind::Add => {
            if in_templates {
                Some(RebuildScope::Full)
            } else if render::is_renderable(path) {
                Some(RebuildScope::Single(path.to_path_buf()))
            } else {
                None
            }
        }
        WatchKind::Change => {
            if change_incremental && !in_templates && render::is_renderable(path) {
                Some(RebuildScope::Single(path.to_path_buf()))
            } else {
                Some(RebuildScope::Full)
            }
        }
    }
}
