//! CLI route: single route table and run context.

use crate::cli::output::{EXIT_DIFFERENT, EXIT_SUCCESS};
use crate::cli::parse::Commands;
use crate::cli::presentation::{format_diff, format_levels, format_root, format_show};
use crate::config::{ConfigLoader, MerkleTreeConfig};
use crate::error::ApiError;
use crate::manifest::load_manifest;
use crate::tree::{HashAlgorithm, MerkleTree};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Rendered command result and the process exit code it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            exit_code: EXIT_SUCCESS,
        }
    }
}

/// Runtime context for CLI execution: loaded configuration and overrides.
pub struct RunContext {
    config: MerkleTreeConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: MerkleTreeConfig) -> Self {
        Self { config }
    }

    /// Override the configured hash algorithm
    pub fn with_algorithm(mut self, algorithm: Option<HashAlgorithm>) -> Self {
        if let Some(algorithm) = algorithm {
            self.config.hash.algorithm = algorithm;
        }
        self
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.config.hash.algorithm
    }

    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        info!(
            command = command.name(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Root { manifest, format } => {
                let tree = self.build_tree(manifest)?;
                format_root(&tree, format).map(CommandOutput::success)
            }
            Commands::Levels { manifest, format } => {
                let tree = self.build_tree(manifest)?;
                format_levels(&tree, format).map(CommandOutput::success)
            }
            Commands::Show { manifest } => {
                let tree = self.build_tree(manifest)?;
                Ok(CommandOutput::success(format_show(&tree)))
            }
            Commands::Diff {
                left,
                right,
                format,
            } => {
                let left_tree = self.build_tree(left)?;
                let right_tree = self.build_tree(right)?;
                let mismatches = MerkleTree::compare(&left_tree, &right_tree)?;
                let exit_code = if mismatches.is_empty() {
                    EXIT_SUCCESS
                } else {
                    EXIT_DIFFERENT
                };
                Ok(CommandOutput {
                    text: format_diff(&left_tree, &right_tree, &mismatches, format)?,
                    exit_code,
                })
            }
        }
    }

    fn build_tree(&self, manifest: &Path) -> Result<MerkleTree, ApiError> {
        let leaves = load_manifest(manifest)?;
        let tree = MerkleTree::from_leaves(self.algorithm(), leaves);
        debug!(
            manifest = %manifest.display(),
            root_hash = tree.root_hash().unwrap_or("<empty>"),
            "Built tree"
        );
        Ok(tree)
    }
}
