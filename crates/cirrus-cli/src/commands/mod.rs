//! Subcommand implementations.

pub mod policies;
pub mod user;

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::output;

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut doc = String::new();
        io::stdin()
            .read_to_string(&mut doc)
            .context("Failed to read document from stdin")?;
        debug!(bytes = doc.len(), "read document from stdin");
        return Ok(doc);
    }

    let doc = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = doc.len(), "read document");
    Ok(doc)
}

/// Report the outcome of a constraint check.
fn report_validation(result: cirrus_model::Result<()>) -> Result<()> {
    result.context("Constraint check failed")?;
    output::success("All documented constraints satisfied");
    Ok(())
}
