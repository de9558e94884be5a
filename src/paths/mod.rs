// src/paths/mod.rs

//! Source and template path handling.
//!
//! This module owns the path logic of the generator:
//! - `classify`: which root directory contains a given file.
//! - `roots`: CLI file/dir/glob arguments -> an ordered `RootSet`.
//! - `output`: source path + layout policy -> output path.
//!
//! Everything here is pure path computation; the only filesystem access is
//! during glob expansion in `roots`.

pub mod classify;
pub mod output;
pub mod roots;

pub use classify::classify;
pub use output::{LayoutPolicy, map_output};
pub use roots::{RootKind, RootSet, absolutize, expand_matches, resolve_roots};
