//! Fatal error taxonomy for the setup workflow
//!
//! Connectivity probes never appear here: they are advisory and report through
//! [`crate::probe::ProbeOutcome`]. Everything in this enum aborts the workflow
//! and maps to a distinct process exit code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// No usable git client on PATH.
    #[error("git is not installed or not on PATH. Install it from https://git-scm.com and try again.")]
    GitMissing,

    /// `git clone` failed or could not be spawned.
    #[error("failed to clone {url} (ref '{reference}'): {detail}")]
    CloneFailed {
        url: String,
        reference: String,
        detail: String,
    },

    /// Deleting a placeholder, rendering a template, writing an output file,
    /// removing a declined example module, or downloading a dialect variant.
    #[error("failed to materialize {path}: {source}")]
    Materialize {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A package-install subprocess exited non-zero or could not run.
    #[error("'{command}' failed in {dir}: {detail}")]
    InstallFailed {
        command: String,
        dir: PathBuf,
        detail: String,
    },

    /// Unknown skeleton version/ref requested.
    #[error("unknown skeleton version '{0}'")]
    UnknownVersion(String),

    /// Prompt or terminal I/O failure.
    #[error("prompt error: {0}")]
    Prompt(#[from] std::io::Error),
}

impl ScaffoldError {
    /// Process exit code for this failure class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::GitMissing => 10,
            ScaffoldError::CloneFailed { .. } => 11,
            ScaffoldError::Materialize { .. } | ScaffoldError::UnknownVersion(_) => 12,
            ScaffoldError::InstallFailed { .. } => 13,
            ScaffoldError::Prompt(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_class() {
        let errors = [
            ScaffoldError::GitMissing,
            ScaffoldError::CloneFailed {
                url: "https://example.com/repo.git".into(),
                reference: "master".into(),
                detail: "network down".into(),
            },
            ScaffoldError::Materialize {
                path: PathBuf::from("demo/package.json"),
                source: anyhow::anyhow!("disk full"),
            },
            ScaffoldError::InstallFailed {
                command: "npm install".into(),
                dir: PathBuf::from("demo"),
                detail: "exit code 1".into(),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|c| *c != 0));
    }

    #[test]
    fn unknown_version_is_materialize_class() {
        let err = ScaffoldError::UnknownVersion("v9".into());
        assert_eq!(err.exit_code(), 12);
        assert!(err.to_string().contains("v9"));
    }
}
