//! SEAN Core - Shared library for the SEAN stack project generator
//!
//! This library implements the setup workflow behind the `sean-tools` binary:
//! prompt for application metadata and database/Redis settings, probe
//! connectivity (advisory only), clone the skeleton repository at a chosen
//! ref, materialize the embedded config templates with the collected values,
//! and run the package installs.
//!
//! # Architecture
//!
//! - **Core operations** - session state, template sets, clone, probes,
//!   materialization, install (usable without a terminal)
//! - **Workflow orchestration** - the [`ProductConfig`] trait lets a binary
//!   supply identity, remote URLs, and next-step text
//! - **CLI/TUI interface** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use sean_core::{session::SessionState, templates};
//!
//! let state = SessionState::from_answers_file("answers.yaml".as_ref())?;
//! templates::materialize(&state, &state.destination()).await?;
//! ```

pub mod error;
pub mod install;
pub mod probe;
pub mod product;
pub mod session;
pub mod strings;
pub mod templates;
pub mod vcs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use probe::{probe_database, probe_redis, ProbeOutcome};
pub use product::ProductConfig;
pub use session::{DatabaseSettings, Dialect, RedisSettings, SessionState};
pub use templates::{materialize, template_set, TemplateSet};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};
