//! # Error Suggestions
//!
//! Helper functions for error messages that say what went wrong AND how to
//! fix it. Used by the CLI commands when a library error alone would leave
//! the user guessing.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use knipse::suggestions;
//!
//! // Instead of:
//! anyhow::bail!("Catalog not found: {}", path.display());
//!
//! // Use:
//! return Err(suggestions::catalog_not_found(path));
//! ```

use std::path::Path;

use crate::error::Error;

/// Generate an error for when a catalog file is not found.
pub fn catalog_not_found(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "Catalog not found: {path}\n\n\
         hint: gThumb keeps its catalogs in {root}\n\
         hint: Run 'knipse catalogs' to list the catalogs it can find",
        path = path.display(),
        root = crate::defaults::default_catalog_root().display()
    )
}

/// Generate an error for when a symlink location is already occupied.
pub fn link_exists(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "File exists: {path}\n\n\
         hint: Use --force to replace existing entries\n\
         hint: Use --index to keep files with the same name apart",
        path = path.display()
    )
}

/// Attach the catalog path to a library error, adding hints where they help.
pub fn for_catalog(path: &Path, error: Error) -> anyhow::Error {
    match error {
        Error::NotFound { .. } => catalog_not_found(path),
        Error::FileExists { path: link } => link_exists(&link),
        other => anyhow::anyhow!("{}: {}", path.display(), other),
    }
}
