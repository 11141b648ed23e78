//! # Cmp Command Implementation
//!
//! This module implements the `cmp` subcommand, which compares two catalogs.
//! Catalogs are equal when they list the same paths in the same order.
//!
//! Prints `equal` and succeeds when they match; fails otherwise.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use knipse::catalog::Catalog;
use knipse::suggestions;

/// Compare two catalogs for equality
#[derive(Args, Debug)]
pub struct CmpArgs {
    /// First catalog file.
    #[arg(value_name = "CATALOG")]
    pub first: PathBuf,

    /// Second catalog file.
    #[arg(value_name = "OTHER")]
    pub second: PathBuf,
}

/// Execute the `cmp` command.
pub fn execute(args: CmpArgs) -> Result<()> {
    let first =
        Catalog::from_file(&args.first).map_err(|e| suggestions::for_catalog(&args.first, e))?;
    let second =
        Catalog::from_file(&args.second).map_err(|e| suggestions::for_catalog(&args.second, e))?;

    if first != second {
        anyhow::bail!(
            "Catalogs differ: {} ({} files) and {} ({} files)",
            args.first.display(),
            first.len(),
            args.second.display(),
            second.len()
        );
    }

    println!("equal");
    Ok(())
}
