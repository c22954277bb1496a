//! Dialect-variant file downloads
//!
//! The skeleton ships Postgres-flavored users sources. For the MySQL-family
//! dialects, versioned replacements are fetched over HTTPS from the product's
//! variant base URL and written over the clone's copies.

use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::session::Dialect;
use anyhow::Context;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// Destination paths (relative to the clone) replaced for non-default dialects.
pub const VARIANT_FILES: &[&str] = &[
    "modules/users/server/controllers/users/users.authentication.server.controller.js",
    "modules/users/server/models/user.server.model.js",
];

/// Resolve the variant base URL, honoring the product's env override.
pub fn variant_base_url<C: ProductConfig>(config: &C) -> Result<Url, anyhow::Error> {
    let url_str =
        std::env::var(config.variant_url_env()).unwrap_or_else(|_| config.variant_base_url().to_string());
    Url::parse(&url_str).with_context(|| format!("invalid variant base URL: {}", url_str))
}

/// Build `<base>/<version>/<family>/<file path>` preserving query parameters.
fn build_variant_url(base: &Url, version: &str, family: &str, file: &str) -> anyhow::Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?;
        segments.pop_if_empty().push(version).push(family);
        for part in file.split('/') {
            segments.push(part);
        }
    }
    Ok(url)
}

/// Download the dialect-variant sources and overwrite the clone's copies.
///
/// No-op for the default dialect. Any failed download or write is fatal
/// (materialization class): a half-switched users module would not boot.
pub async fn apply_dialect_variants<C: ProductConfig>(
    config: &C,
    version: &str,
    dialect: Dialect,
    destination: &Path,
) -> Result<(), ScaffoldError> {
    if !dialect.needs_variant_files() {
        return Ok(());
    }

    let materialize_err = |path: PathBuf, source: anyhow::Error| ScaffoldError::Materialize {
        path,
        source,
    };

    let base = variant_base_url(config)
        .map_err(|e| materialize_err(destination.to_path_buf(), e))?;

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new());

    for file in VARIANT_FILES {
        let target = destination.join(file);
        let url = build_variant_url(&base, version, dialect.variant_family(), file)
            .map_err(|e| materialize_err(target.clone(), e))?;

        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| materialize_err(target.clone(), anyhow::anyhow!("GET {}: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(materialize_err(
                target,
                anyhow::anyhow!("GET {}: HTTP {}", url, response.status()),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| materialize_err(target.clone(), e.into()))?;

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| materialize_err(parent.to_path_buf(), e.into()))?;
        }
        fs::write(&target, &body)
            .await
            .map_err(|e| materialize_err(target.clone(), e.into()))?;
    }

    Ok(())
}
