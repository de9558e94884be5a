// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `mjk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mjk",
    version,
    about = "Render minijinja, markdown and HTML sources into a static site.",
    long_about = None
)]
pub struct CliArgs {
    /// Files, directories or glob patterns naming the source documents.
    #[arg(value_name = "FILES|DIRS|GLOBS", required = true)]
    pub inputs: Vec<String>,

    /// Source base directory used by --keep-tree.
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub src: String,

    /// Template directories (loader search paths), comma separated.
    #[arg(short, long, value_name = "DIRS", value_delimiter = ',')]
    pub template: Vec<String>,

    /// JSON data file, or a directory of JSON/YAML files to merge.
    #[arg(short, long, value_name = "FILE|DIR")]
    pub data: Option<String>,

    /// Output directory.
    #[arg(short, long, value_name = "DIR", default_value = "dist")]
    pub out: String,

    /// Keep the source folder structure in the output directory.
    #[arg(short, long)]
    pub keep_tree: bool,

    /// Use clean urls (`name/index.html`) for output files.
    #[arg(short, long)]
    pub clean: bool,

    /// Wrap page content in a `{% block content %}` block before rendering.
    #[arg(short, long)]
    pub block: bool,

    /// Watch for file changes and rebuild. Disables minification.
    #[arg(short, long)]
    pub watch: bool,

    /// Re-render only the changed file on a change event, instead of the
    /// whole batch.
    #[arg(long)]
    pub change_incremental: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MJK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
