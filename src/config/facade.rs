//! Config loading entry point.

use super::merge;
use super::sources::{environment, global_file, workspace_file};
use super::MerkleTreeConfig;
use crate::error::ApiError;
use config::builder::DefaultState;
use config::{ConfigBuilder, File};
use std::path::Path;
use tracing::debug;

/// Loads [`MerkleTreeConfig`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, global file, workspace file, environment
    pub fn load(workspace_root: &Path) -> Result<MerkleTreeConfig, ApiError> {
        let builder = merge::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        Self::finish(environment::add_to_builder(builder))
    }

    /// Load configuration from one explicit file, still honoring the environment
    pub fn load_from_file(path: &Path) -> Result<MerkleTreeConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge::builder_with_defaults()?.add_source(File::from(path).required(true));
        Self::finish(environment::add_to_builder(builder))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<MerkleTreeConfig, ApiError> {
        let config: MerkleTreeConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(algorithm = %config.hash.algorithm, "Configuration loaded");
        Ok(config)
    }
}
