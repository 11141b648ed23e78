//! # knipse CLI
//!
//! This is the binary entry point for the `knipse` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output and a non-zero exit code.
//!
//! The catalog logic lives in the `knipse` library crate; the binary is a thin
//! wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
