// src/watch/mod.rs

//! Filesystem watching.
//!
//! Bridges blocking `notify` callbacks into the async runtime and reduces
//! raw events to the add/change pairs the rebuild controller understands.
//! Dotfile paths are dropped here. This module knows nothing about rebuild
//! scopes; that decision lives in `engine`.

pub mod watcher;

pub use watcher::{WatcherHandle, is_hidden, spawn_watcher};
