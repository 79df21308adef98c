//! Environment source: MERKLETREE_HASH__ALGORITHM, MERKLETREE_LOGGING__LEVEL, ...

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add the `MERKLETREE_` environment source; `__` separates nested keys.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("MERKLETREE")
            .prefix_separator("_")
            .separator("__"),
    )
}
