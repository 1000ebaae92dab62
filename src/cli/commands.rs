//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - categories/tools: browse the registry
//! - lookup/batch: run lookups
//! - sites: print the curated website list
//! - check: verify every tool is wired to a provider or rule

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// osintr - OSINT lookups with live providers and simulated fallback
#[derive(Parser, Debug)]
#[command(name = "osintr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories in menu order
    Categories,

    /// List tools, optionally for one category
    Tools {
        /// Category id (e.g. emailOsint)
        category: Option<String>,
    },

    /// Run a single lookup
    Lookup {
        /// Tool id (e.g. ipGeolocation)
        tool: String,

        /// Query; may be omitted for input-optional tools
        query: Option<String>,

        /// Require the tool to belong to this category
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Run one tool against many queries
    Batch {
        /// Tool id
        tool: String,

        /// Queries, answered in the given order
        #[arg(required = true)]
        queries: Vec<String>,

        /// Print the results as a JSON array
        #[arg(short, long)]
        json: bool,
    },

    /// Print the curated list of OSINT websites
    Sites,

    /// Check that every tool has a provider or simulation rule
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["osintr"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_parse_lookup() {
        let cli = Cli::try_parse_from(["osintr", "lookup", "ipGeolocation", "8.8.8.8", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Lookup {
                tool,
                query,
                category,
                json,
            }) => {
                assert_eq!(tool, "ipGeolocation");
                assert_eq!(query.as_deref(), Some("8.8.8.8"));
                assert!(category.is_none());
                assert!(json);
            }
            _ => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn test_cli_parse_lookup_without_query() {
        let cli = Cli::try_parse_from(["osintr", "lookup", "localIpFinder", "-C", "ipLocationOsint"]).unwrap();
        match cli.command {
            Some(Commands::Lookup { query, category, .. }) => {
                assert!(query.is_none());
                assert_eq!(category.as_deref(), Some("ipLocationOsint"));
            }
            _ => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn test_cli_parse_batch() {
        let cli = Cli::try_parse_from(["osintr", "batch", "whoisLookup", "a.com", "b.com"]).unwrap();
        match cli.command {
            Some(Commands::Batch { tool, queries, json }) => {
                assert_eq!(tool, "whoisLookup");
                assert_eq!(queries, vec!["a.com", "b.com"]);
                assert!(!json);
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_cli_batch_requires_queries() {
        assert!(Cli::try_parse_from(["osintr", "batch", "whoisLookup"]).is_err());
    }

    #[test]
    fn test_cli_parse_tools_with_category() {
        let cli = Cli::try_parse_from(["osintr", "tools", "emailOsint"]).unwrap();
        match cli.command {
            Some(Commands::Tools { category }) => assert_eq!(category.as_deref(), Some("emailOsint")),
            _ => panic!("Expected Tools command"),
        }
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from(["osintr", "check", "--verbose", "--config", "/tmp/osintr.yml"]).unwrap();
        assert!(cli.is_verbose());
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/osintr.yml")));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
