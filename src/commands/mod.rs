//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the `knipse`
//! command-line tool. Each subcommand is defined in its own file.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic.
//!
//! The `execute` function calls into the `knipse` library for the catalog
//! work and is responsible for printing results and shaping errors.

pub mod catalogs;
pub mod check;
pub mod cmp;
pub mod completions;
pub mod ls;
pub mod symlink;
