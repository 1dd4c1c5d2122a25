//! CLI argument definitions

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bridgectl")]
#[command(about = "Find the bridges of undirected graphs")]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// BridgeFinder API endpoint URL
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind, overrides the configuration
        #[arg(short, long)]
        bind: Option<SocketAddr>,
        /// Disable CORS headers
        #[arg(long)]
        no_cors: bool,
    },
    /// Find the bridges of a graph file (JSON request or CSV edge list)
    Analyze {
        /// Graph file path
        file: PathBuf,
        /// Node count for CSV edge lists (defaults to largest index + 1)
        #[arg(short, long)]
        nodes: Option<i64>,
        /// CSV delimiter
        #[arg(short, long, default_value = ",")]
        delimiter: char,
        /// Treat first CSV row as header
        #[arg(long)]
        header: bool,
        /// Send the graph to the configured endpoint instead of analyzing locally
        #[arg(long)]
        remote: bool,
    },
    /// Health check
    Health,
}

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "bridgectl", "analyze", "graph.csv", "--nodes", "5", "--remote", "-f", "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Analyze { file, nodes, remote, delimiter, header } => {
                assert_eq!(file, PathBuf::from("graph.csv"));
                assert_eq!(nodes, Some(5));
                assert!(remote);
                assert_eq!(delimiter, ',');
                assert!(!header);
            }
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["bridgectl", "-vv", "serve", "--bind", "127.0.0.1:9000", "--no-cors"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Serve { bind, no_cors } => {
                assert_eq!(bind, Some("127.0.0.1:9000".parse().unwrap()));
                assert!(no_cors);
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
