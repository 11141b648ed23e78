//! # Check Command Implementation
//!
//! This module implements the `check` subcommand, which verifies that every
//! file referenced by the given catalogs exists.
//!
//! ## Functionality
//!
//! All catalogs are checked, even after one fails. Failures are collected as
//! one line per catalog, `<catalog> <missing paths>`, and reported together
//! under a single `Missing files in catalogs:` heading. A catalog that cannot
//! be loaded is reported on its line the same way.
//!
//! On success nothing is printed.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use log::info;
use std::path::{Path, PathBuf};

use knipse::catalog::Catalog;

/// Check that all files referenced by catalogs exist
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Catalog files to check.
    #[arg(value_name = "CATALOG", required = true)]
    pub catalogs: Vec<PathBuf>,
}

/// Execute the `check` command.
pub fn execute(args: CheckArgs) -> Result<()> {
    let failures: Vec<String> = args
        .catalogs
        .iter()
        .filter_map(|catalog_path| check_one(catalog_path).err())
        .collect();

    if failures.is_empty() {
        info!("All files present in {} catalog(s)", args.catalogs.len());
        return Ok(());
    }

    Err(anyhow::anyhow!(
        "Missing files in catalogs:\n{}",
        failures.join("\n")
    ))
}

/// Check a single catalog, rendering a failure as its report line.
fn check_one(catalog_path: &Path) -> std::result::Result<(), String> {
    Catalog::from_file(catalog_path)
        .and_then(|catalog| catalog.check())
        .map_err(|e| format!("{} {}", catalog_path.display(), e))
}
