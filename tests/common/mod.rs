//! Shared test utilities for integration and E2E tests.
//!
//! This module provides fixtures and helper functions to reduce duplication
//! across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_images(&["a.jpg"]);
//!     // ... test code
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::documents;
    pub use super::TestFixture;
}

/// Catalog documents for testing.
#[allow(dead_code)]
pub mod documents {
    /// A catalog as gThumb writes it, with non-default order metadata.
    pub const GTHUMB: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog version="1.0">
  <order inverse="1" type="file::mtime"/>
  <files>
    <file uri="file:///home/user/Pictures/IMG_0001.jpg"/>
    <file uri="file:///home/user/Pictures/summer trip/IMG 0002.jpg"/>
  </files>
</catalog>
"#;

    /// Well-formed XML without a files section.
    pub const NO_FILES_SECTION: &str = r#"<catalog version="1.0"><order/></catalog>"#;

    /// Truncated XML.
    pub const TRUNCATED: &str = "<catalog><files>";
}

/// A test fixture that provides a temporary directory holding images and
/// catalog documents.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new().with_images(&["a.jpg", "b.jpg"]);
/// let catalog = fixture.catalog("pick.catalog", &["a.jpg", "b.jpg"]);
///
/// fixture.command().arg("ls").arg(&catalog).assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create empty image files at the given relative paths.
    pub fn with_images(self, names: &[&str]) -> Self {
        for name in names {
            self.temp_dir
                .child(name)
                .touch()
                .expect("Failed to create image file");
        }
        self
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Write a catalog document at `name` listing the given relative paths,
    /// resolved against the fixture directory. Returns the document path.
    pub fn catalog(&self, name: &str, members: &[&str]) -> PathBuf {
        let document = self.temp_dir.child(name);
        if let Some(parent) = document.path().parent() {
            std::fs::create_dir_all(parent).expect("Failed to create catalog directory");
        }
        knipse::catalog::Catalog::new(members.iter().map(|m| self.path().join(m)))
            .write(document.path())
            .expect("Failed to write catalog");
        document.path().to_path_buf()
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("knipse");
        cmd.current_dir(self.path());
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
