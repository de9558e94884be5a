// src/paths/roots.rs

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::paths::classify;

/// Whether a set of roots holds source documents or templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    Source,
    Template,
}

impl RootKind {
    pub fn describe(self) -> &'static str {
        match self {
            RootKind::Source => "sources",
            RootKind::Template => "templates",
        }
    }
}

/// Ordered, de-duplicated set of absolute directories of one kind.
///
/// Rebuilt from the CLI patterns on every watch-triggered rebuild, since new
/// files can introduce roots that did not exist at startup.
#[derive(Debug, Clone)]
pub struct RootSet {
    kind: RootKind,
    dirs: Vec<PathBuf>,
}

impl RootSet {
    /// Build a set from the given directories, preserving order and dropping
    /// duplicates.
    pub fn new(kind: RootKind, dirs: Vec<PathBuf>) -> Self {
        let mut unique: Vec<PathBuf> = Vec::with_capacity(dirs.len());
        for dir in dirs {
            if !unique.contains(&dir) {
                unique.push(dir);
            }
        }
        Self { kind, dirs: unique }
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// The root containing `file`, by the longest-prefix rule.
    pub fn containing(&self, file: &Path) -> Option<&Path> {
        classify(file, &self.dirs)
    }
}

/// Expand CLI file/dir/glob arguments into a `RootSet`.
///
/// Each match that is a directory is kept as-is; a file contributes its
/// parent directory. Paths that no longer exist are silently filtered by the
/// glob walk itself (stale matches are tolerated, not fatal). Zero matches
/// fall back to the current working directory with a warning: an empty root
/// set would make the rest of the pipeline degenerate, so resolution always
/// produces at least one root.
pub fn resolve_roots(patterns: &[String], kind: RootKind) -> RootSet {
    let mut dirs: Vec<PathBuf> = Vec::new();

    for path in expand_matches(patterns) {
        let dir = if path.is_dir() {
            path
        } else {
            match path.parent() {
                Some(parent) => parent.to_path_buf(),
                None => continue,
            }
        };
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }

    if dirs.is_empty() {
        warn!("no matching paths; using current directory for {}", kind.describe());
        // current_dir can fail on a deleted working directory; "." still
        // names it, and the set must never come out empty.
        dirs.push(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    }

    RootSet::new(kind, dirs)
}

/// Expand glob patterns into de-duplicated absolute paths of existing files
/// and directories.
///
/// Invalid patterns and unreadable matches are skipped with a warning rather
/// than failing the whole expansion.
pub fn expand_matches(patterns: &[String]) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let paths = match glob::glob(pattern) {
            Ok(paths) => paths,
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "skipping invalid glob pattern");
                continue;
            }
        };

        for entry in paths {
            match entry {
                Ok(path) => match absolutize(&path) {
                    Ok(path) => {
                        if !out.contains(&path) {
                            out.push(path);
                        }
                    }
                    Err(err) => {
                        debug!(path = ?path, error = %err, "dropping unresolvable match");
                    }
                },
                Err(err) => {
                    warn!(pattern = %pattern, error = %err, "skipping unreadable glob match");
                }
            }
        }
    }

    out
}

/// Absolute form of `path`: canonicalized when it exists, lexically anchored
/// to the current directory otherwise.
pub fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    std::fs::canonicalize(path).or_else(|_| std::path::absolute(path))
}
