//! # Symlink Command Implementation
//!
//! This module implements the `symlink` subcommand, which mirrors a catalog as
//! a directory of symbolic links pointing at the catalog's files.
//!
//! ## Functionality
//!
//! - **Target creation**: The target directory and its parents are created.
//! - **Index prefix**: `--index` names links `0_a.jpg`, `1_b.jpg`, ... in
//!   catalog order, which keeps files with the same name apart and preserves
//!   the catalog order when the directory is sorted by name.
//! - **Overwrite**: `--force` replaces entries that already exist.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use knipse::catalog::Catalog;
use knipse::materialize::SymlinkOptions;
use knipse::suggestions;

/// Create a directory of symlinks to the files of a catalog
#[derive(Args, Debug)]
pub struct SymlinkArgs {
    /// Catalog file to materialize.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Directory to create the links in.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Prefix link names with their position in the catalog.
    #[arg(short, long)]
    pub index: bool,

    /// Replace existing files in the target directory.
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the `symlink` command.
pub fn execute(args: SymlinkArgs) -> Result<()> {
    let catalog = Catalog::from_file(&args.catalog)
        .map_err(|e| suggestions::for_catalog(&args.catalog, e))?;

    let options = SymlinkOptions {
        index_prefix: args.index,
        force_override: args.force,
    };
    catalog
        .create_symlinks_with(&args.target_dir, &options)
        .map_err(|e| suggestions::for_catalog(&args.catalog, e))?;

    Ok(())
}
