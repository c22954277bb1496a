//! Embedded template sets and placeholder rendering
//!
//! Each skeleton version ships a fixed bundle of parameterized config files,
//! compiled into the binary. A template references session values with
//! `{{variable_name}}` placeholders; unknown placeholders are left untouched
//! so literal braces in generated JavaScript survive rendering.

use crate::error::ScaffoldError;

/// One parameterized file: where its placeholder lives in the clone, where the
/// rendered output goes, and the template body.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Placeholder path deleted from the fresh clone, relative to destination.
    pub placeholder: &'static str,
    /// Rendered output path, relative to destination.
    pub output: &'static str,
    /// Embedded template content.
    pub content: &'static str,
}

/// The template bundle for one skeleton version.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSet {
    pub version: &'static str,
    pub files: &'static [TemplateFile],
}

const MASTER_FILES: &[TemplateFile] = &[
    TemplateFile {
        placeholder: "package.json",
        output: "package.json",
        content: include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/master/_package.json"
        )),
    },
    TemplateFile {
        placeholder: "bower.json",
        output: "bower.json",
        content: include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/master/_bower.json"
        )),
    },
    TemplateFile {
        placeholder: "config/env/default.js",
        output: "config/env/default.js",
        content: include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/master/config/env/_default.js"
        )),
    },
    TemplateFile {
        placeholder: "config/env/development.js",
        output: "config/env/development.js",
        content: include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/templates/master/config/env/_development.js"
        )),
    },
];

const SETS: &[TemplateSet] = &[TemplateSet {
    version: "master",
    files: MASTER_FILES,
}];

/// Known skeleton versions, in prompt order.
pub fn known_versions() -> Vec<&'static str> {
    SETS.iter().map(|s| s.version).collect()
}

/// Look up the template set for a version ref.
pub fn template_set(version: &str) -> Result<&'static TemplateSet, ScaffoldError> {
    SETS.iter()
        .find(|s| s.version == version)
        .ok_or_else(|| ScaffoldError::UnknownVersion(version.to_string()))
}

/// Substitute `{{name}}` placeholders from the variable table. Placeholders
/// with no matching variable are left as-is.
pub fn render(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let name = after[..end].trim();
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        // Unknown placeholder: emit verbatim.
                        out.push_str(&rest[start..start + 2 + end + 2]);
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                // Unterminated braces: emit the remainder verbatim.
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
