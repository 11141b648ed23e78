//! # Error Handling
//!
//! This module defines the centralized error type for the `knipse` library.
//! It uses the `thiserror` library to create an `Error` enum that covers
//! every failure mode of loading, checking, writing and materializing
//! catalogs.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant corresponds to one kind of
//!   failure and carries the context needed to render a useful message.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the library.
//!
//! The rendering of [`Error::MissingFiles`] is deliberately bare: it is only
//! the missing paths joined with `", "`. The `check` command prefixes it with
//! the catalog path when it aggregates failures across catalogs.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for knipse operations
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog document is not well-formed XML.
    #[error("Catalog parsing error: {message}")]
    Parse { message: String },

    /// The catalog document is well-formed but lacks the expected structure,
    /// e.g. there is no `files` section.
    #[error("Catalog structure error: {message}")]
    Structure { message: String },

    /// A catalog file does not exist.
    #[error("Catalog not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Files referenced by a catalog are absent from the file system.
    ///
    /// Holds every missing path in catalog order.
    #[error("{}", MissingList(paths))]
    MissingFiles { paths: Vec<PathBuf> },

    /// A symlink could not be created because its location is occupied.
    #[error("File exists: {}", path.display())]
    FileExists { path: PathBuf },

    /// A path-related operation failed.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

struct MissingList<'a>(&'a [PathBuf]);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, path) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", path.display())?;
        }
        Ok(())
    }
}
