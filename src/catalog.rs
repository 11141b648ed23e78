//! # Catalogs
//!
//! A [`Catalog`] is an ordered list of file paths, as saved by gThumb or pix
//! when a user collects images into a catalog. Order matters everywhere: it
//! is the order paths are listed in, written in, and numbered in when a
//! catalog is materialized as symlinks. Duplicates are allowed.
//!
//! ## Document Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <catalog version="1.0">
//!   <order inverse="0" type="general::unsorted"/>
//!   <files>
//!     <file uri="file:///home/user/Pictures/img.jpg"/>
//!   </files>
//! </catalog>
//! ```
//!
//! Only the `files` section is interpreted. The `version` and `order` values
//! are ignored on read and written with fixed defaults.
//!
//! ## Example
//!
//! ```
//! use knipse::catalog::Catalog;
//!
//! let catalog = Catalog::new(["/photos/a.jpg", "/photos/b c.jpg"]);
//! let xml = catalog.to_xml_string().unwrap();
//! assert_eq!(Catalog::from_xml_str(&xml).unwrap(), catalog);
//! ```

use std::fmt::Display;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info};
use xot::{NameId, Node, Xot};

use crate::defaults::{CATALOG_VERSION, ORDER_INVERSE, ORDER_TYPE};
use crate::error::{Error, Result};
use crate::uri;

/// An ordered collection of file paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Catalog {
    files: Vec<PathBuf>,
}

impl Catalog {
    /// Create a catalog from an ordered sequence of paths.
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a catalog from the text of a catalog document.
    ///
    /// Fails with [`Error::Parse`] if the text is not well-formed XML and
    /// with [`Error::Structure`] if the document has no `files` section or a
    /// `file` entry has no `uri`.
    pub fn from_xml_str(text: &str) -> Result<Self> {
        let mut xot = Xot::new();
        let document = xot.parse(text).map_err(parse_error)?;
        let root = xot.document_element(document).map_err(parse_error)?;

        let files_name = xot.add_name("files");
        let file_name = xot.add_name("file");
        let uri_name = xot.add_name("uri");

        let files_section = xot
            .children(root)
            .find(|&node| is_named(&xot, node, files_name))
            .ok_or_else(|| Error::Structure {
                message: "document has no files section".to_string(),
            })?;

        let mut files = Vec::new();
        for entry in xot.children(files_section) {
            if !is_named(&xot, entry, file_name) {
                continue;
            }
            let uri = xot
                .get_attribute(entry, uri_name)
                .ok_or_else(|| Error::Structure {
                    message: format!("file entry {} has no uri attribute", files.len()),
                })?;
            files.push(uri::decode(uri));
        }

        Ok(Self { files })
    }

    /// Read and parse the catalog document at `path`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;
        let catalog = Self::from_xml_str(&text)?;
        debug!("Loaded {} file(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Serialize the catalog as a catalog document.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut xot = Xot::new();
        let skeleton = format!(
            r#"<catalog version="{CATALOG_VERSION}"><order inverse="{ORDER_INVERSE}" type="{ORDER_TYPE}"/><files/></catalog>"#
        );
        let document = xot.parse(&skeleton).map_err(parse_error)?;
        let root = xot.document_element(document).map_err(parse_error)?;

        let files_name = xot.add_name("files");
        let file_name = xot.add_name("file");
        let uri_name = xot.add_name("uri");

        let files_section = xot
            .children(root)
            .find(|&node| is_named(&xot, node, files_name))
            .ok_or_else(|| Error::Structure {
                message: "document has no files section".to_string(),
            })?;

        for path in &self.files {
            let entry = xot.new_element(file_name);
            xot.attributes_mut(entry).insert(uri_name, uri::encode(path));
            xot.append(files_section, entry).map_err(parse_error)?;
        }

        let serialized = xot.to_string(document).map_err(parse_error)?;
        let body = escape_attribute_whitespace(&serialized);
        Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}\n"))
    }

    /// Write the catalog document to `path`.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_xml_string()?)?;
        info!("Wrote {} file(s) to {}", self.len(), path.display());
        Ok(())
    }

    /// Explicit form of `a == b`.
    pub fn equals(a: &Catalog, b: &Catalog) -> bool {
        a == b
    }

    /// Number of paths in the catalog.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the catalog holds no paths.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the paths in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.files.iter()
    }

    /// The paths in catalog order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    /// Mutable access to the underlying paths.
    pub fn paths_mut(&mut self) -> &mut Vec<PathBuf> {
        &mut self.files
    }

    /// Lazily yield the paths that do not exist, in catalog order.
    ///
    /// Every call probes the file system again.
    pub fn missing_files(&self) -> impl Iterator<Item = &Path> + '_ {
        self.files
            .iter()
            .map(PathBuf::as_path)
            .filter(|path| !path.exists())
    }

    /// Fail with [`Error::MissingFiles`] if any path does not exist.
    pub fn check(&self) -> Result<()> {
        let missing: Vec<PathBuf> = self.missing_files().map(Path::to_path_buf).collect();
        if missing.is_empty() {
            Ok(())
        } else {
            debug!("{} of {} file(s) missing", missing.len(), self.len());
            Err(Error::MissingFiles { paths: missing })
        }
    }
}

fn is_named(xot: &Xot, node: Node, name: NameId) -> bool {
    xot.element(node).is_some_and(|element| element.name() == name)
}

/// Write tabs and line breaks as character references.
///
/// Parsers normalize raw whitespace in attribute values to spaces. The
/// serialized body is a single line, so these characters only occur inside
/// `uri` values.
fn escape_attribute_whitespace(xml: &str) -> String {
    let mut escaped = String::with_capacity(xml.len());
    for ch in xml.chars() {
        match ch {
            '\t' => escaped.push_str("&#9;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn parse_error(error: impl Display) -> Error {
    Error::Parse {
        message: error.to_string(),
    }
}

impl FromStr for Catalog {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xml_str(s)
    }
}

impl From<Vec<PathBuf>> for Catalog {
    fn from(files: Vec<PathBuf>) -> Self {
        Self { files }
    }
}

impl FromIterator<PathBuf> for Catalog {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

impl IntoIterator for Catalog {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}
