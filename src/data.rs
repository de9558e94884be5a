// src/data.rs

//! Data-context loading.
//!
//! `--data` accepts a single JSON/YAML file or a directory of them. All
//! sources are deep-merged into one `serde_json::Value` object that becomes
//! the template render context. Failures here are fatal: a malformed data
//! source stops the run before anything is written.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;
use tracing::debug;

/// Load and merge the data context named by `--data`.
///
/// `None` yields an empty object, so templates can always index into the
/// context without a null check.
pub fn load_data(source: Option<&str>) -> Result<Value> {
    let Some(source) = source else {
        return Ok(Value::Object(Default::default()));
    };

    let path = Path::new(source);
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

/// Merge every JSON/YAML file directly inside `dir`, in sorted filename
/// order so the result is deterministic; later keys win.
fn load_dir(dir: &Path) -> Result<Value> {
    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("reading data directory {dir:?}"))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("listing data directory {dir:?}"))?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_data_file(path))
        .collect();
    paths.sort();

    let mut merged = Value::Object(Default::default());
    for path in paths {
        let value = load_file(&path)?;
        merge(&mut merged, value);
        debug!(path = ?path, "merged data file");
    }

    Ok(merged)
}

fn load_file(path: &Path) -> Result<Value> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading data file {path:?}"))?;

    let value: Value = match extension(path) {
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON from {path:?}"))?,
        Some("yaml") | Some("yml") => serde_yaml_ng::from_str(&text)
            .with_context(|| format!("parsing YAML from {path:?}"))?,
        _ => bail!("unsupported data file {path:?} (expected .json, .yaml or .yml)"),
    };

    Ok(value)
}

fn is_data_file(path: &Path) -> bool {
    matches!(extension(path), Some("json" | "yaml" | "yml"))
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Recursive object merge; non-object values are replaced wholesale.
fn merge(base: &mut Value, incoming: Value) {
    match (base, incoming) {
        (Value::Object(base), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, incoming) => *slot = incoming,
    }
}
