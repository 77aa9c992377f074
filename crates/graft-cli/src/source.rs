//! Reading taxonomy and package documents.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use std::io::{IsTerminal, Read};
use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use graft_core::config::TaxonomyConfig;
use graft_core::schema::{decode_packages, decode_taxonomy, FlattenResult};

/// Read the nested taxonomy from a file, or from git at the configured
/// revision.
pub fn taxonomy_text(config: &TaxonomyConfig, file: Option<&Path>) -> Result<String> {
    if let Some(file) = file {
        debug!(path = %file.display(), "Reading taxonomy file");
        return std::fs::read_to_string(file)
            .wrap_err_with(|| format!("Failed to read taxonomy {}", file.display()));
    }

    let object = config.object_name();
    info!(root = %config.root.display(), object = %object, "Reading taxonomy from git");
    let output = Command::new("git")
        .arg("-C")
        .arg(&config.root)
        .arg("show")
        .arg(&object)
        .output()
        .wrap_err("Failed to run git")?;

    if !output.status.success() {
        return Err(eyre!(
            "git show {} failed: {}",
            object,
            String::from_utf8_lossy(&output.stderr).trim()
        ));
    }
    String::from_utf8(output.stdout).wrap_err_with(|| format!("{} is not UTF-8", object))
}

/// Read package documents from a file, or from stdin when it is not a
/// terminal.
pub fn package_text(file: Option<&Path>) -> Result<String> {
    if let Some(file) = file {
        debug!(path = %file.display(), "Reading package file");
        return std::fs::read_to_string(file)
            .wrap_err_with(|| format!("Failed to read package fields {}", file.display()));
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("No package fields on stdin");
        return Ok(String::new());
    }
    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .wrap_err("Failed to read package fields from stdin")?;
    Ok(text)
}

/// Decode and flatten both inputs.
pub fn flatten(taxonomy: &str, packages: &str) -> Result<FlattenResult> {
    let mut result = FlattenResult::new();
    for doc in decode_taxonomy(taxonomy).wrap_err("Invalid taxonomy")? {
        result.merge(FlattenResult::taxonomy(&doc));
    }
    for doc in decode_packages(packages).wrap_err("Invalid package fields")? {
        result.merge(FlattenResult::package(&doc));
    }

    info!(
        statements = result.statements.len(),
        warnings = result.warnings.len(),
        "Flattened documents"
    );
    Ok(result)
}
