//! Conversion between catalog URIs and local paths.
//!
//! Catalog documents store every member as a `file://` URI. The conversion
//! here is intentionally literal: the text after the scheme is the path,
//! byte for byte. No percent-decoding happens and paths are never resolved
//! or canonicalized, so a catalog that stores `file:///photos/a b.jpg`
//! yields the path `/photos/a b.jpg` and writes it back unchanged.

use std::path::{Path, PathBuf};

use crate::defaults::FILE_URI_PREFIX;

/// Decode a catalog URI into a local path.
///
/// A URI without the `file://` prefix is returned as a path unmodified.
pub fn decode(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix(FILE_URI_PREFIX).unwrap_or(uri))
}

/// Encode a local path as a catalog URI.
pub fn encode(path: &Path) -> String {
    format!("{}{}", FILE_URI_PREFIX, path.to_string_lossy())
}
