// src/options.rs

//! The build configuration record.
//!
//! Derived once from the CLI at startup and fixed for the whole run. The
//! roots and data context are deliberately *not* in here: those are
//! re-resolved per build pass (see `snapshot`), while everything in
//! `BuildOptions` stays constant.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::CliArgs;
use crate::paths::{LayoutPolicy, absolutize};

#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Original source file/dir/glob arguments, kept for re-expansion on
    /// full rebuilds.
    pub inputs: Vec<String>,
    /// Template dir/glob arguments, re-resolved per pass.
    pub template_patterns: Vec<String>,
    /// `--data` argument, re-loaded per pass.
    pub data_source: Option<String>,
    pub layout: LayoutPolicy,
    pub clean: bool,
    pub block: bool,
    pub minify: bool,
    pub watch: bool,
    pub change_incremental: bool,
    pub src_base: PathBuf,
    pub out_base: PathBuf,
}

impl BuildOptions {
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let src_base = absolutize(Path::new(&args.src))
            .with_context(|| format!("resolving --src {:?}", args.src))?;
        let out_base = absolutize(Path::new(&args.out))
            .with_context(|| format!("resolving --out {:?}", args.out))?;

        Ok(Self {
            inputs: args.inputs.clone(),
            template_patterns: args.template.clone(),
            data_source: args.data.clone(),
            layout: if args.keep_tree {
                LayoutPolicy::KeepTree
            } else {
                LayoutPolicy::Flatten
            },
            clean: args.clean,
            block: args.block,
            // Watch mode skips minification: rebuild latency matters more
            // than output size during development.
            minify: !args.watch,
            watch: args.watch,
            change_incremental: args.change_incremental,
            src_base,
            out_base,
        })
    }
}
