// src/pipeline.rs

//! The render-write pipeline: one source document in, one `.html` file out.
//!
//! Per file: read, convert markdown if needed, render through minijinja,
//! minify when enabled, map the output path and write it atomically. A batch
//! runs every file to completion; individual failures are logged with their
//! path and skipped, they never abort the rest of the batch.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, error, info};

use crate::errors::BuildError;
use crate::options::BuildOptions;
use crate::paths::{self, map_output};
use crate::render::{self, Renderer};
use crate::snapshot::Snapshot;

/// A discovered source document.
///
/// Lives for one render pass: discovered by glob expansion, rendered once,
/// discarded after the write.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub is_clean: bool,
    pub content: Option<String>,
}

impl SourceFile {
    /// An `index` stem never renders clean: `index/index.html` would break
    /// the directory url it is supposed to serve.
    pub fn new(path: PathBuf, clean: bool) -> Self {
        let is_clean =
            clean && path.file_stem().and_then(|s| s.to_str()) != Some("index");
        Self {
            path,
            is_clean,
            content: None,
        }
    }
}

/// Expand the original CLI arguments into the current set of renderable
/// source files. Directory matches are walked recursively.
pub fn discover_sources(patterns: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();

    for path in paths::expand_matches(patterns) {
        if path.is_dir() {
            let nested = path.join("**/*").to_string_lossy().into_owned();
            for sub in paths::expand_matches(&[nested]) {
                push_if_source(&mut files, sub);
            }
        } else {
            push_if_source(&mut files, path);
        }
    }

    files
}

fn push_if_source(files: &mut Vec<PathBuf>, path: PathBuf) {
    if path.is_file() && render::is_renderable(&path) && !files.contains(&path) {
        files.push(path);
    }
}

/// Render a batch of files against one snapshot.
///
/// Returns `(written, failed)` once every file has settled.
pub fn run_pass(files: &[PathBuf], snapshot: &Snapshot, opts: &BuildOptions) -> (usize, usize) {
    let started = Instant::now();
    let renderer = Renderer::new(
        snapshot.template_roots.dirs().to_vec(),
        &snapshot.data,
        opts.block,
    );

    let mut written = 0;
    let mut failed = 0;

    for path in files {
        let mut file = SourceFile::new(path.clone(), opts.clean);
        match render_and_write(&mut file, &renderer, snapshot, opts) {
            Ok(dest) => {
                debug!(source = ?path, dest = ?dest, "wrote output");
                written += 1;
            }
            Err(err) => {
                error!(source = ?path, error = %err, "skipping file");
                failed += 1;
            }
        }
    }

    info!(written, failed, elapsed = ?started.elapsed(), "build pass finished");
    (written, failed)
}

/// Render one file and write it to its mapped output path.
pub fn render_and_write(
    file: &mut SourceFile,
    renderer: &Renderer,
    snapshot: &Snapshot,
    opts: &BuildOptions,
) -> Result<PathBuf, BuildError> {
    let text = fs::read_to_string(&file.path)?;
    let text = if render::is_markdown(&file.path) {
        render::markdown_to_html(&text)
    } else {
        text
    };

    let mut rendered = renderer.render(&file.path, &text)?;
    if opts.minify && !rendered.is_empty() {
        rendered = render::minify_html(&rendered);
    }
    file.content = Some(rendered);

    let dest = map_output(
        &file.path,
        opts.layout,
        &snapshot.source_roots,
        &opts.src_base,
        &opts.out_base,
        file.is_clean,
    )?;

    write_atomic(&dest, file.content.as_deref().unwrap_or(""))?;
    Ok(dest)
}

/// Write `content` to `dest` without a truncated file ever being visible
/// under the final name: the bytes go to a temp file in the destination
/// directory first, then rename over the target.
fn write_atomic(dest: &Path, content: &str) -> Result<(), BuildError> {
    let dir = dest.parent().ok_or_else(|| {
        BuildError::Io(std::io::Error::other("output path has no parent directory"))
    })?;
    fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.persist(dest).map_err(|err| BuildError::Io(err.error))?;
    Ok(())
}
