//! Well-known values shared by the library and the CLI.
//!
//! Keeping them in one place ensures the reader and the writer of catalog
//! documents agree on the format, and that discovery and the CLI agree on
//! where catalogs live.

use std::path::PathBuf;

/// Scheme prefix of the URIs stored in catalog documents.
pub const FILE_URI_PREFIX: &str = "file://";

/// File extension (without the dot) of catalog documents.
pub const CATALOG_EXTENSION: &str = "catalog";

/// Value written to the `version` attribute of the root element.
pub const CATALOG_VERSION: &str = "1.0";

/// Value written to the `inverse` attribute of the `order` element.
pub const ORDER_INVERSE: &str = "0";

/// Value written to the `type` attribute of the `order` element.
pub const ORDER_TYPE: &str = "general::unsorted";

/// Returns the directory gThumb stores its catalogs in.
///
/// Uses the platform data directory:
/// - Linux: `~/.local/share/gthumb/catalogs`
/// - macOS: `~/Library/Application Support/gthumb/catalogs`
/// - Windows: `{FOLDERID_RoamingAppData}\gthumb\catalogs`
///
/// Falls back to `gthumb/catalogs` relative to the current directory if the
/// platform data directory cannot be determined.
pub fn default_catalog_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_default()
        .join("gthumb")
        .join("catalogs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_root_returns_path() {
        let root = default_catalog_root();
        assert!(root.ends_with("gthumb/catalogs"));
    }

    #[test]
    fn test_default_catalog_root_is_absolute_or_fallback() {
        let root = default_catalog_root();
        assert!(
            root.is_absolute() || root.starts_with("gthumb"),
            "Expected absolute path or fallback, got: {:?}",
            root
        );
    }
}
