//! CLI argument definitions using clap
//!
//! Commands:
//! - bqs-adapter compile [--config <path>]
//! - bqs-adapter encode [--config <path>]
//! - bqs-adapter decode [--config <path>]
//! - bqs-adapter attributes [--entity <name> | --view <name>] [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bqs-adapter - BQS query compiler and DAG record converter
#[derive(Parser, Debug)]
#[command(name = "bqs-adapter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a BQS syntax tree (stdin) into a filter tree
    Compile {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Encode a catalog record (stdin) into a record graph
    Encode {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Decode a record graph (stdin) into a catalog record
    Decode {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List attribute descriptors of an entity or a view
    Attributes {
        /// Entity name, e.g. "card"
        #[arg(long, conflicts_with = "view")]
        entity: Option<String>,

        /// View name; defaults to the all-entity view
        #[arg(long)]
        view: Option<String>,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Command {
    pub fn config_path(&self) -> Option<&PathBuf> {
        match self {
            Command::Compile { config }
            | Command::Encode { config }
            | Command::Decode { config }
            | Command::Attributes { config, .. } => config.as_ref(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compile() {
        let cli = Cli::try_parse_from(["bqs-adapter", "compile", "--config", "a.json"]).unwrap();
        assert!(matches!(cli.command, Command::Compile { .. }));
        assert_eq!(
            cli.command.config_path().map(|p| p.to_string_lossy().into_owned()),
            Some("a.json".to_string())
        );
    }

    #[test]
    fn test_attributes_entity_and_view_conflict() {
        let result = Cli::try_parse_from([
            "bqs-adapter",
            "attributes",
            "--entity",
            "card",
            "--view",
            "NSIL_ALL_VIEW",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_attributes_defaults() {
        let cli = Cli::try_parse_from(["bqs-adapter", "attributes"]).unwrap();
        match cli.command {
            Command::Attributes { entity, view, config } => {
                assert!(entity.is_none());
                assert!(view.is_none());
                assert!(config.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
