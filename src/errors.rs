// src/errors.rs

//! Crate-wide error types.
//!
//! Startup orchestration uses `anyhow` with context, like everything else in
//! the crate. `BuildError` exists for the per-file failure kinds: a build
//! pass reports these with path context and moves on to the next file
//! instead of tearing down the batch or the watch loop.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("no root directory contains {0:?}; cannot flatten its output path")]
    NoContainingRoot(PathBuf),

    #[error("refusing to write {path:?} outside the output directory {out_base:?}")]
    PathEscape { path: PathBuf, out_base: PathBuf },

    #[error("template error in {path:?}: {source}")]
    Render {
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BuildError>;
