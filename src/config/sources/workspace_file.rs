//! Workspace config file source: merkletree.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Config file name inside a workspace
pub const WORKSPACE_CONFIG_FILE: &str = "merkletree.toml";

/// Add the workspace config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !config_path.exists() {
        debug!(config_path = %config_path.display(), "No workspace configuration file");
        return Ok(builder);
    }
    Ok(builder.add_source(File::from(config_path.as_path()).required(false)))
}
