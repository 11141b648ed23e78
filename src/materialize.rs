//! Materializing a catalog as a directory of symbolic links.
//!
//! Every catalog entry becomes one link inside the target directory, named
//! after the file's base name. Links point at the catalog path exactly as
//! stored and may dangle.
//!
//! Two entries with the same base name land on the same link path. Without
//! `index_prefix` the second one fails with [`Error::FileExists`]; the
//! index prefix (`0_`, `1_`, ...) keeps them apart. Links created before a
//! failure are left in place.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Error, Result};

/// Options for [`Catalog::create_symlinks_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymlinkOptions {
    /// Prefix each link name with the entry's 0-based position and `_`.
    pub index_prefix: bool,
    /// Replace whatever occupies a link path instead of failing.
    pub force_override: bool,
}

impl Catalog {
    /// Create one symlink per entry in `target_dir`.
    ///
    /// `target_dir` and its parents are created if missing.
    pub fn create_symlinks(
        &self,
        target_dir: impl AsRef<Path>,
        index_prefix: bool,
        force_override: bool,
    ) -> Result<()> {
        self.create_symlinks_with(
            target_dir,
            &SymlinkOptions {
                index_prefix,
                force_override,
            },
        )
    }

    /// Same as [`Catalog::create_symlinks`], taking an options struct.
    pub fn create_symlinks_with(
        &self,
        target_dir: impl AsRef<Path>,
        options: &SymlinkOptions,
    ) -> Result<()> {
        let target_dir = target_dir.as_ref();
        fs::create_dir_all(target_dir)?;

        for (index, original) in self.iter().enumerate() {
            let link = target_dir.join(link_name(original, index, options.index_prefix)?);

            // symlink_metadata so that dangling links count as occupied
            if fs::symlink_metadata(&link).is_ok() {
                if !options.force_override {
                    return Err(Error::FileExists { path: link });
                }
                debug!("Replacing {}", link.display());
                fs::remove_file(&link)?;
            }

            symlink(original, &link)?;
        }

        info!(
            "Linked {} file(s) into {}",
            self.len(),
            target_dir.display()
        );
        Ok(())
    }
}

fn link_name(original: &Path, index: usize, index_prefix: bool) -> Result<PathBuf> {
    let base = original.file_name().ok_or_else(|| Error::Path {
        message: format!("no file name to link: {}", original.display()),
    })?;

    if index_prefix {
        let mut name = OsString::from(format!("{index}_"));
        name.push(base);
        Ok(PathBuf::from(name))
    } else {
        Ok(PathBuf::from(base))
    }
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink(original: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(original, link)
}
