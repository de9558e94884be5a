// src/render/engine.rs

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;

use crate::errors::BuildError;

/// Template renderer backed by a minijinja environment.
///
/// Search paths come from the template root set: `{% extends %}` and
/// `{% include %}` names are looked up in each directory in order, first hit
/// wins. Source documents themselves are rendered as template strings, so
/// inline tags work in pages that never go through the loader.
///
/// Built fresh per build pass from that pass's snapshot; it never outlives
/// the roots and data it was created from.
pub struct Renderer {
    env: Environment<'static>,
    ctx: minijinja::Value,
    block: bool,
}

impl Renderer {
    pub fn new<D: Serialize>(search_paths: Vec<PathBuf>, data: &D, block: bool) -> Self {
        let mut env = Environment::new();
        env.set_loader(move |name| {
            for dir in &search_paths {
                let candidate = dir.join(name);
                match fs::read_to_string(&candidate) {
                    Ok(source) => return Ok(Some(source)),
                    Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                    Err(err) => {
                        return Err(minijinja::Error::new(
                            minijinja::ErrorKind::InvalidOperation,
                            format!("failed to read template {candidate:?}"),
                        )
                        .with_source(err));
                    }
                }
            }
            Ok(None)
        });

        let ctx = minijinja::Value::from_serialize(data);
        Self { env, ctx, block }
    }

    /// Render one source document's text against the data context.
    ///
    /// With the block option, content is wrapped in `{% block content %}` so
    /// a page that extends a layout slots into the layout's content block
    /// without declaring one itself.
    pub fn render(&self, path: &Path, text: &str) -> Result<String, BuildError> {
        let text: Cow<'_, str> = if self.block {
            Cow::Owned(format!("{{% block content %}}{text}{{% endblock %}}"))
        } else {
            Cow::Borrowed(text)
        };

        self.env
            .render_str(&text, &self.ctx)
            .map_err(|source| BuildError::Render {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("block", &self.block)
            .finish_non_exhaustive()
    }
}
