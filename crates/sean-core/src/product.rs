//! Product configuration trait for generator binaries
//!
//! The core workflow is product-agnostic; a binary supplies its identity,
//! remote URLs, and post-setup instructions through this trait.

use std::path::Path;

pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars).
    fn name(&self) -> &'static str;

    /// Human-readable display name.
    fn display_name(&self) -> &'static str;

    /// Git remote the skeleton is cloned from.
    fn repo_url(&self) -> &'static str;

    /// Environment variable that overrides the skeleton remote.
    fn repo_url_env(&self) -> &'static str;

    /// Base URL for versioned dialect-variant file downloads.
    fn variant_base_url(&self) -> &'static str;

    /// Environment variable that overrides the variant base URL.
    fn variant_url_env(&self) -> &'static str;

    /// URL for product documentation.
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text.
    fn cli_description(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation.
    fn next_steps(&self, dir: &Path) -> Vec<String>;

    /// User agent string for HTTP requests.
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}
