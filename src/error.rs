//! Error types for Merkle tree construction, comparison, and the CLI surface.

use thiserror::Error;

/// Errors raised by the tree core
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error(
        "Tree shape mismatch: left has {left_nodes} nodes (height {left_height}), \
         right has {right_nodes} nodes (height {right_height})"
    )]
    ShapeMismatch {
        left_nodes: usize,
        right_nodes: usize,
        left_height: usize,
        right_height: usize,
    },
}

/// Errors raised by the manifest, configuration, and CLI layers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Manifest error on line {line}: {message}")]
    Manifest { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::Config(err.to_string())
    }
}
