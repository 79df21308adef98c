//! CLI parse: clap types for merkletree. No behavior; definitions only.

use crate::tree::HashAlgorithm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Merkletree CLI - build and compare Merkle trees over leaf manifests
#[derive(Parser)]
#[command(name = "merkletree")]
#[command(about = "Build binary Merkle trees from leaf manifests and diff them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where merkletree.toml is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hash algorithm for internal nodes (overrides configuration)
    #[arg(long, value_parser = parse_hash_algorithm)]
    pub hash: Option<HashAlgorithm>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn parse_hash_algorithm(value: &str) -> Result<HashAlgorithm, String> {
    value.parse()
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the root hash of a manifest's tree
    Root {
        /// Leaf manifest (`<identifier> <source>` per line)
        manifest: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print tree values level by level, root first
    Levels {
        /// Leaf manifest (`<identifier> <source>` per line)
        manifest: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the recursive node rendering of the tree
    Show {
        /// Leaf manifest (`<identifier> <source>` per line)
        manifest: PathBuf,
    },
    /// Compare the trees of two manifests and list mismatching nodes
    Diff {
        /// Left-hand manifest
        left: PathBuf,
        /// Right-hand manifest
        right: PathBuf,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

impl Commands {
    /// Stable command name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Root { .. } => "root",
            Commands::Levels { .. } => "levels",
            Commands::Show { .. } => "show",
            Commands::Diff { .. } => "diff",
        }
    }
}
