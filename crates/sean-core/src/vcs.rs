//! Git preflight and skeleton clone

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Check that a git client is on PATH, returning its version string.
pub fn git_version() -> Option<String> {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
}

/// Resolve the skeleton remote, honoring the product's env override.
pub fn repo_url<C: ProductConfig>(config: &C) -> String {
    std::env::var(config.repo_url_env()).unwrap_or_else(|_| config.repo_url().to_string())
}

/// Clone the skeleton repo at `reference` into `destination`.
///
/// Streams git's stderr (progress goes there) indented under the spinner. A
/// non-zero exit or spawn failure is fatal.
pub async fn clone_skeleton(
    url: &str,
    reference: &str,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    let mut child = Command::new("git")
        .arg("clone")
        .arg("--branch")
        .arg(reference)
        .arg(url)
        .arg(destination)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ScaffoldError::CloneFailed {
            url: url.to_string(),
            reference: reference.to_string(),
            detail: format!("failed to spawn git: {}", e),
        })?;

    let mut last_lines: Vec<String> = Vec::new();
    if let Some(stderr) = child.stderr.take() {
        let mut reader = BufReader::new(stderr).lines();
        while let Ok(Some(line)) = reader.next_line().await {
            // Keep a short tail for the error message if the clone fails.
            if last_lines.len() >= 5 {
                last_lines.remove(0);
            }
            last_lines.push(line);
        }
    }

    let status = child.wait().await.map_err(|e| ScaffoldError::CloneFailed {
        url: url.to_string(),
        reference: reference.to_string(),
        detail: e.to_string(),
    })?;

    if status.success() {
        Ok(())
    } else {
        Err(ScaffoldError::CloneFailed {
            url: url.to_string(),
            reference: reference.to_string(),
            detail: if last_lines.is_empty() {
                format!("git exited with {}", status.code().unwrap_or(-1))
            } else {
                last_lines.join("\n")
            },
        })
    }
}
