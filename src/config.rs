//! Configuration System
//!
//! Hierarchical configuration for the hash algorithm and logging. Sources are
//! merged lowest to highest: built-in defaults, the global config file, the
//! workspace config file, then `MERKLETREE_*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::HashAlgorithm;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerkleTreeConfig {
    /// Tree hashing settings
    #[serde(default)]
    pub hash: HashConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tree hashing settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HashConfig {
    /// Digest used to combine child hashes
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

impl MerkleTreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        self.logging
            .validate()
            .map_err(|e| ApiError::Config(format!("logging: {}", e)))
    }
}
