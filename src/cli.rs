//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::LevelFilter;

use crate::commands;

/// knipse - CLI catalog manager for pix and gThumb
#[derive(Parser, Debug)]
#[command(name = "knipse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the files of one or more catalogs
    Ls(commands::ls::LsArgs),

    /// Check that all files referenced by catalogs exist
    Check(commands::check::CheckArgs),

    /// Compare two catalogs for equality
    Cmp(commands::cmp::CmpArgs),

    /// Create a directory of symlinks to the files of a catalog
    Symlink(commands::symlink::SymlinkArgs),

    /// Find catalogs below a directory
    Catalogs(commands::catalogs::CatalogsArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        // Logs go to stderr so listings on stdout stay pipeable
        let _ = env_logger::Builder::new()
            .filter_level(self.log_level)
            .format_timestamp(None)
            .try_init();

        match self.command {
            Commands::Ls(args) => commands::ls::execute(args),
            Commands::Check(args) => commands::check::execute(args),
            Commands::Cmp(args) => commands::cmp::execute(args),
            Commands::Symlink(args) => commands::symlink::execute(args),
            Commands::Catalogs(args) => commands::catalogs::execute(args),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_ls_multiple_catalogs() {
        let cli = Cli::try_parse_from(["knipse", "ls", "a.catalog", "b.catalog"]).unwrap();
        match cli.command {
            Commands::Ls(args) => assert_eq!(args.catalogs.len(), 2),
            other => panic!("expected ls, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["knipse"]).is_err());
    }

    #[test]
    fn test_parse_version_flag() {
        let error = Cli::try_parse_from(["knipse", "--version"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_parse_log_level() {
        let cli = Cli::try_parse_from(["knipse", "--log-level", "debug", "ls", "a.catalog"])
            .unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_parse_symlink_flags() {
        let cli = Cli::try_parse_from([
            "knipse", "symlink", "a.catalog", "out", "--index", "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::Symlink(args) => {
                assert!(args.index);
                assert!(args.force);
            }
            other => panic!("expected symlink, got {:?}", other),
        }
    }
}
