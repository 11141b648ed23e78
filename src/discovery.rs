//! # Catalog Discovery
//!
//! Finds catalog documents below a directory and parses them on the fly.
//!
//! The walk is recursive with no depth limit and follows the host's
//! directory listing order, so callers must not rely on the order in which
//! catalogs are yielded.
//!
//! Discovery is forgiving: a `.catalog` file that cannot be read or parsed
//! (an empty placeholder file, a truncated document, a document without a
//! `files` section) is logged and skipped, as is a catalog that parses but
//! lists no files. Walk errors such as unreadable directories are logged and
//! skipped as well.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::catalog::Catalog;
use crate::defaults::CATALOG_EXTENSION;

/// Lazily walk `root` and yield every non-empty catalog found below it.
///
/// Each call starts a fresh walk.
pub fn iterate_catalogs(root: impl AsRef<Path>) -> CatalogIter {
    CatalogIter {
        walker: WalkDir::new(root).into_iter(),
    }
}

/// Iterator returned by [`iterate_catalogs`].
pub struct CatalogIter {
    walker: walkdir::IntoIter,
}

impl Iterator for CatalogIter {
    type Item = (PathBuf, Catalog);

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.walker.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry during catalog discovery: {}", e);
                    continue;
                }
            };

            if !is_catalog_file(&entry) {
                continue;
            }

            match Catalog::from_file(entry.path()) {
                Ok(catalog) if catalog.is_empty() => {
                    debug!("Skipping empty catalog {}", entry.path().display());
                }
                Ok(catalog) => return Some((entry.into_path(), catalog)),
                Err(e) => {
                    debug!("Skipping {}: {}", entry.path().display(), e);
                }
            }
        }
        None
    }
}

// walkdir does not follow links, so a linked document is checked via its target
fn is_catalog_file(entry: &DirEntry) -> bool {
    (entry.file_type().is_file() || entry.path().is_file())
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == CATALOG_EXTENSION)
}
