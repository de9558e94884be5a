// src/engine/mod.rs

//! The rebuild controller.
//!
//! Two states, `Idle` and `Rebuilding`:
//! - watch events are turned into a rebuild scope (one file or the whole
//!   project) by `scope::decide`,
//! - at most one rebuild pass runs at a time,
//! - scopes arriving while a pass is in flight coalesce into a single
//!   pending rebuild that starts once the pass settles.

pub mod runtime;
pub mod scope;

pub use runtime::{Runtime, RuntimeEvent, WatchKind};
pub use scope::{RebuildScope, decide};
