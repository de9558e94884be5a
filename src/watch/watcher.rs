// src/watch/watcher.rs

use std::path::{Component, Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::{RuntimeEvent, WatchKind};

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Spawn a filesystem watcher over `dirs` that forwards add/change events
/// into the runtime channel.
///
/// Event kinds other than create/modify, and any path with a dotfile
/// component, are dropped at this bridge.
pub fn spawn_watcher(
    dirs: Vec<PathBuf>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) -> Result<WatcherHandle> {
    // Channel from the blocking notify callback into the async world.
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();

    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Err(err) = event_tx.send(event) {
                    // We can't log via tracing here easily, so fall back to stderr.
                    eprintln!("mjk: failed to forward notify event: {err}");
                }
            }
            Err(err) => {
                eprintln!("mjk: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    for dir in &dirs {
        if let Err(err) = watcher.watch(dir, RecursiveMode::Recursive) {
            warn!(dir = ?dir, error = %err, "could not watch directory");
        }
    }

    info!(count = dirs.len(), "file watcher started");

    // Async task that consumes notify events and forwards watch events to
    // the runtime.
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            let Some(kind) = watch_kind(&event.kind) else {
                continue;
            };

            for path in &event.paths {
                if is_hidden(path) {
                    debug!(path = ?path, "ignoring dotfile event");
                    continue;
                }

                let event = RuntimeEvent::FileEvent {
                    path: path.clone(),
                    kind,
                };
                if runtime_tx.send(event).await.is_err() {
                    // Runtime channel closed; no point keeping the loop alive.
                    debug!("runtime channel closed, stopping watcher loop");
                    return;
                }
            }
        }

        debug!("file watcher loop ended");
    });

    Ok(WatcherHandle { _inner: watcher })
}

fn watch_kind(kind: &EventKind) -> Option<WatchKind> {
    match kind {
        EventKind::Create(_) => Some(WatchKind::Add),
        EventKind::Modify(_) => Some(WatchKind::Change),
        _ => None,
    }
}

/// True when any component of the path is a dotfile or dot-directory.
pub fn is_hidden(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_str().is_some_and(|s| s.starts_with('.')),
        _ => false,
    })
}
