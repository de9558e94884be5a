// src/engine/runtime.rs

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::engine::scope::{RebuildScope, decide};
use crate::options::BuildOptions;
use crate::pipeline;
use crate::snapshot::Snapshot;

/// Raw watch event kind, as reduced from `notify`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    Add,
    Change,
}

/// Events sent into the runtime from the watcher, rebuild tasks and the
/// signal handler.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    FileEvent { path: PathBuf, kind: WatchKind },
    RebuildFinished,
    ShutdownRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Rebuilding,
}

/// The rebuild controller.
///
/// A single-consumer event loop: watch events arrive on `events_rx`, rebuild
/// passes run as spawned blocking tasks that report back with
/// [`RuntimeEvent::RebuildFinished`]. At most one rebuild is in flight;
/// scopes requested while one is running are coalesced into one pending
/// scope and started afterwards, so overlapping passes never interleave
/// writes to the same output path. There is no mid-rebuild cancellation; a
/// pass always runs to completion.
pub struct Runtime {
    opts: BuildOptions,
    /// Latest resolved snapshot; replaced wholesale, never mutated in place.
    snapshot: Snapshot,
    state: State,
    pending: Option<RebuildScope>,
    events_rx: mpsc::Receiver<RuntimeEvent>,
    /// Cloned into rebuild tasks so they can report completion.
    events_tx: mpsc::Sender<RuntimeEvent>,
}

impl Runtime {
    pub fn new(
        opts: BuildOptions,
        snapshot: Snapshot,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        events_tx: mpsc::Sender<RuntimeEvent>,
    ) -> Self {
        Self {
            opts,
            snapshot,
            state: State::Idle,
            pending: None,
            events_rx,
            events_tx,
        }
    }

    /// Main event loop. Runs until shutdown is requested or every sender is
    /// gone.
    pub async fn run(mut self) -> Result<()> {
        info!("watch runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::FileEvent { path, kind } => self.handle_file_event(path, kind),
                RuntimeEvent::RebuildFinished => self.handle_rebuild_finished(),
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping watch runtime");
                    break;
                }
            }
        }

        info!("watch runtime exiting");
        Ok(())
    }

    fn handle_file_event(&mut self, path: PathBuf, kind: WatchKind) {
        let scope = decide(
            &path,
            kind,
            &self.snapshot.template_roots,
            self.opts.change_incremental,
        );
        let Some(scope) = scope else {
            debug!(path = ?path, ?kind, "event ignored");
            return;
        };

        info!(path = ?path, ?kind, ?scope, "rebuild triggered");

        match self.state {
            State::Idle => self.start_rebuild(scope),
            State::Rebuilding => {
                self.pending = Some(match self.pending.take() {
                    Some(prev) => prev.merge(scope),
                    None => scope,
                });
                debug!(pending = ?self.pending, "rebuild in flight, scope queued");
            }
        }
    }

    fn handle_rebuild_finished(&mut self) {
        self.state = State::Idle;
        if let Some(scope) = self.pending.take() {
            debug!(?scope, "starting queued rebuild");
            self.start_rebuild(scope);
        }
    }

    fn start_rebuild(&mut self, scope: RebuildScope) {
        // Fresh snapshot per pass: roots may have appeared or vanished, and
        // the data context may have changed on disk.
        match Snapshot::resolve(&self.opts) {
            Ok(snapshot) => self.snapshot = snapshot,
            Err(err) => {
                error!(error = %err, "could not re-resolve roots/data; skipping rebuild");
                return;
            }
        }

        let files = match &scope {
            RebuildScope::Full => pipeline::discover_sources(&self.opts.inputs),
            RebuildScope::Single(path) => vec![path.clone()],
        };

        self.state = State::Rebuilding;
        let snapshot = self.snapshot.clone();
        let opts = self.opts.clone();
        let done_tx = self.events_tx.clone();

        tokio::task::spawn_blocking(move || {
            pipeline::run_pass(&files, &snapshot, &opts);
            if let Err(err) = done_tx.blocking_send(RuntimeEvent::RebuildFinished) {
                warn!(error = %err, "could not report rebuild completion");
            }
        });
    }
}
