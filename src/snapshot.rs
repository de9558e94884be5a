// src/snapshot.rs

//! Immutable per-pass resolution state.
//!
//! Roots and the data context are re-resolved into a fresh `Snapshot` before
//! every build pass and handed to it by value; nothing mutates a snapshot a
//! running pass is reading. This is what keeps overlapping watch events from
//! observing a half-updated root list.

use anyhow::Result;
use serde_json::Value;

use crate::data::load_data;
use crate::options::BuildOptions;
use crate::paths::{RootKind, RootSet, resolve_roots};

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub source_roots: RootSet,
    pub template_roots: RootSet,
    pub data: Value,
}

impl Snapshot {
    /// Resolve a fresh snapshot from the CLI patterns and data source.
    ///
    /// Root resolution never fails (it falls back to the current directory);
    /// a data failure is fatal to the caller.
    pub fn resolve(opts: &BuildOptions) -> Result<Self> {
        let source_roots = resolve_roots(&opts.inputs, RootKind::Source);
        let template_roots = resolve_roots(&opts.template_patterns, RootKind::Template);
        let data = load_data(opts.data_source.as_deref())?;

        Ok(Self {
            source_roots,
            template_roots,
            data,
        })
    }
}
