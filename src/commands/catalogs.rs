//! # Catalogs Command Implementation
//!
//! This module implements the `catalogs` subcommand, which searches a
//! directory tree for catalog documents and prints each one found as
//! `<path>\t<number of files>`.
//!
//! Without an argument the gThumb catalog directory is searched. Documents
//! that cannot be parsed or list no files are skipped; run with
//! `--log-level debug` to see why.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use knipse::defaults::default_catalog_root;
use knipse::discovery::iterate_catalogs;

/// Find catalogs below a directory
#[derive(Args, Debug)]
pub struct CatalogsArgs {
    /// Directory to search.
    ///
    /// Defaults to the gThumb catalog directory
    /// (`~/.local/share/gthumb/catalogs` on Linux).
    #[arg(value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Execute the `catalogs` command.
pub fn execute(args: CatalogsArgs) -> Result<()> {
    let root = args.root.unwrap_or_else(default_catalog_root);
    if !root.is_dir() {
        anyhow::bail!("Not a directory: {}", root.display());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (path, catalog) in iterate_catalogs(&root) {
        writeln!(out, "{}\t{}", path.display(), catalog.len())?;
    }

    Ok(())
}
