//! Template materialization into a freshly cloned skeleton
//!
//! Placeholder configs are deleted concurrently, then replaced by rendered
//! templates carrying the session values. Declined example modules are removed
//! afterwards. Side effects are exclusively filesystem mutations under the
//! destination folder; there is no rollback on partial failure.

use super::set::{render, template_set};
use crate::error::ScaffoldError;
use crate::session::SessionState;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Example module directories the operator may decline, relative to the clone.
pub const CHAT_MODULE: &str = "modules/chat";
pub const ARTICLES_MODULE: &str = "modules/articles";

fn materialize_err(path: PathBuf, source: impl Into<anyhow::Error>) -> ScaffoldError {
    ScaffoldError::Materialize {
        path,
        source: source.into(),
    }
}

/// Delete the version's placeholder files from the clone.
///
/// All deletions run concurrently and every failure is collected; a missing
/// placeholder is not an error (the skeleton may already have dropped it).
pub async fn remove_placeholders(
    version: &str,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    let set = template_set(version)?;

    // Spawn all deletions, then settle every handle.
    let mut handles: Vec<(PathBuf, tokio::task::JoinHandle<std::io::Result<()>>)> =
        Vec::with_capacity(set.files.len());
    for file in set.files {
        let path = destination.join(file.placeholder);
        let task_path = path.clone();
        let handle = tokio::spawn(async move {
            match fs::remove_file(&task_path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e),
            }
        });
        handles.push((path, handle));
    }

    let mut failures: Vec<String> = Vec::new();
    let mut first: Option<PathBuf> = None;
    for (path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(std::io::Error::other(format!("deletion task failed: {}", e))),
        };
        if let Err(e) = result {
            failures.push(format!("{}: {}", path.display(), e));
            if first.is_none() {
                first = Some(path);
            }
        }
    }

    match first {
        None => Ok(()),
        Some(path) => Err(materialize_err(
            path,
            anyhow::anyhow!("failed to delete placeholders:\n  {}", failures.join("\n  ")),
        )),
    }
}

/// Render the version's templates into the destination with the session values.
pub async fn render_templates(
    state: &SessionState,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    let set = template_set(&state.version)?;
    let vars = state.template_vars();

    for file in set.files {
        let target = destination.join(file.output);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| materialize_err(parent.to_path_buf(), e))?;
        }
        let rendered = render(file.content, &vars);
        fs::write(&target, rendered)
            .await
            .map_err(|e| materialize_err(target.clone(), e))?;
    }

    Ok(())
}

/// Remove the example modules the operator declined.
pub async fn remove_declined_examples(
    state: &SessionState,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    let mut declined: Vec<&str> = Vec::new();
    if !state.add_chat_example {
        declined.push(CHAT_MODULE);
    }
    if !state.add_article_example {
        declined.push(ARTICLES_MODULE);
    }

    for module in declined {
        let path = destination.join(module);
        match fs::remove_dir_all(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(materialize_err(path, e)),
        }
    }

    Ok(())
}

/// Full materialization pass: placeholders out, rendered configs in, declined
/// examples removed. Dialect-variant downloads are separate (network-bound,
/// see [`super::variants`]).
pub async fn materialize(state: &SessionState, destination: &Path) -> Result<(), ScaffoldError> {
    remove_placeholders(&state.version, destination).await?;
    render_templates(state, destination).await?;
    remove_declined_examples(state, destination).await?;
    Ok(())
}
