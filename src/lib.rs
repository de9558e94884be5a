// src/lib.rs

pub mod cli;
pub mod data;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod options;
pub mod paths;
pub mod pipeline;
pub mod render;
pub mod snapshot;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::info;

use crate::cli::CliArgs;
use crate::engine::{Runtime, RuntimeEvent};
use crate::options::BuildOptions;
use crate::snapshot::Snapshot;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - option resolution and the first roots/data snapshot
/// - the initial build pass
/// - (optional) file watcher and rebuild runtime
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let opts = BuildOptions::from_cli(&args)?;

    // A broken data source is fatal here, before anything is written.
    let snapshot = Snapshot::resolve(&opts)?;

    let files = pipeline::discover_sources(&opts.inputs);
    info!(count = files.len(), "rendering discovered sources");
    {
        let snapshot = snapshot.clone();
        let opts = opts.clone();
        tokio::task::spawn_blocking(move || pipeline::run_pass(&files, &snapshot, &opts))
            .await?;
    }

    if !opts.watch {
        return Ok(());
    }

    info!("running in watch mode");
    let (tx, rx) = mpsc::channel::<RuntimeEvent>(64);

    let _watcher = watch::spawn_watcher(watch_dirs(&snapshot, &opts), tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
        });
    }

    let runtime = Runtime::new(opts, snapshot, rx, tx);
    runtime.run().await
}

/// Union of template roots, source roots and the source base: everything a
/// rebuild decision can depend on.
fn watch_dirs(snapshot: &Snapshot, opts: &BuildOptions) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();

    let roots = snapshot
        .template_roots
        .dirs()
        .iter()
        .chain(snapshot.source_roots.dirs());
    for dir in roots {
        if !dirs.contains(dir) {
            dirs.push(dir.clone());
        }
    }
    if !dirs.contains(&opts.src_base) {
        dirs.push(opts.src_base.clone());
    }

    dirs
}
