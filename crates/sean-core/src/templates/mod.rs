//! Template sets, materialization, and dialect variants
//!
//! This module provides:
//! - Embedded template bundles keyed by skeleton version
//! - Placeholder rendering with session values
//! - Materialization into a fresh clone (delete, render, prune examples)
//! - Dialect-variant file downloads for non-default databases

pub mod materialize;
pub mod set;
pub mod variants;

pub use materialize::{materialize, remove_declined_examples, remove_placeholders, render_templates};
pub use set::{known_versions, render, template_set, TemplateFile, TemplateSet};
pub use variants::{apply_dialect_variants, VARIANT_FILES};
