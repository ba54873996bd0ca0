//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// quotient - a terminal pricing calculator
#[derive(Parser)]
#[command(name = "quotient")]
#[command(about = "Build service estimates from a catalog of services and add-ons")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive estimate builder (default)
    Quote {
        /// Path to a catalog JSON file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Directory where exported snapshots are written
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },
    /// Validate a catalog file
    Validate {
        /// Path to the catalog file to validate
        catalog: PathBuf,
    },
    /// Print totals for a set of selections without the TUI
    Totals {
        /// Path to a catalog JSON file (defaults to the built-in catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Selections to apply: "Item", "Parent/Add-on", or "Item=3"
        #[arg(required = true)]
        select: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_no_command() {
        let cli = Cli::try_parse_from(["quotient"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_quote_flags() {
        let cli = Cli::try_parse_from([
            "quotient",
            "quote",
            "--catalog",
            "catalog.json",
            "--export-dir",
            "/tmp/estimates",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Quote {
                catalog,
                export_dir,
            }) => {
                assert_eq!(catalog, Some(PathBuf::from("catalog.json")));
                assert_eq!(export_dir, PathBuf::from("/tmp/estimates"));
            }
            _ => panic!("expected quote command"),
        }
    }

    #[test]
    fn test_cli_totals_requires_selections() {
        assert!(Cli::try_parse_from(["quotient", "totals"]).is_err());

        let cli =
            Cli::try_parse_from(["quotient", "totals", "Static Page=2", "UX Consultation"])
                .unwrap();
        match cli.command {
            Some(Commands::Totals { select, .. }) => assert_eq!(select.len(), 2),
            _ => panic!("expected totals command"),
        }
    }
}
