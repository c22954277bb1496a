//! Best-effort connectivity probes
//!
//! Probes are advisory by contract: they report an outcome and the workflow
//! always proceeds. Nothing in this module returns [`crate::ScaffoldError`].

pub mod database;
pub mod redis;

use std::time::Duration;

/// Upper bound on any single probe, connect plus handshake.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a connectivity probe. Never aborts the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Handshake completed; detail is a short human-readable confirmation.
    Ok(String),
    /// Connection or handshake failed; detail is the error description.
    Failed(String),
}

impl ProbeOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::Ok(_))
    }

    pub fn detail(&self) -> &str {
        match self {
            ProbeOutcome::Ok(d) | ProbeOutcome::Failed(d) => d,
        }
    }
}

pub use database::probe_database;
pub use redis::probe_redis;
