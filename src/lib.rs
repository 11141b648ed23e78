//! # knipse
//!
//! Library behind the `knipse` command-line tool, a catalog manager for the
//! pix and gThumb image viewers. Those viewers save a user's image
//! selections as catalog files: small XML documents listing `file://` URIs.
//!
//! ## Quick Example
//!
//! ```
//! use knipse::catalog::Catalog;
//!
//! let catalog = Catalog::new(["/photos/a.jpg", "/photos/b.jpg"]);
//! assert_eq!(catalog.len(), 2);
//!
//! // Order matters for equality
//! let reversed = Catalog::new(["/photos/b.jpg", "/photos/a.jpg"]);
//! assert_ne!(catalog, reversed);
//!
//! // Nothing at those paths, so the integrity check fails
//! assert!(catalog.check().is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **Catalog (`catalog`)**: The ordered list of paths, its document
//!   format, equality and the integrity check that reports missing files.
//! - **URIs (`uri`)**: Literal conversion between `file://` URIs and paths.
//! - **Materialization (`materialize`)**: Creating a directory of symlinks
//!   that mirrors a catalog.
//! - **Discovery (`discovery`)**: Walking a directory tree and parsing every
//!   catalog document found in it.

pub mod catalog;
pub mod defaults;
pub mod discovery;
pub mod error;
pub mod materialize;
pub mod suggestions;
pub mod uri;

#[cfg(test)]
mod uri_proptest;
