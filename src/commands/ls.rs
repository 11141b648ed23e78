//! # Ls Command Implementation
//!
//! This module implements the `ls` subcommand, which prints the files of each
//! given catalog, one path per line, in catalog order.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use knipse::catalog::Catalog;
use knipse::suggestions;

/// List the files of one or more catalogs
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Catalog files to list.
    #[arg(value_name = "CATALOG", required = true)]
    pub catalogs: Vec<PathBuf>,
}

/// Execute the `ls` command.
///
/// Catalogs are listed in the order given. The first catalog that fails to
/// load stops the listing.
pub fn execute(args: LsArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for catalog_path in &args.catalogs {
        let catalog = Catalog::from_file(catalog_path)
            .map_err(|e| suggestions::for_catalog(catalog_path, e))?;
        for path in &catalog {
            writeln!(out, "{}", path.display())?;
        }
    }

    Ok(())
}
