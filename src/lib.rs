//! Merkletree: binary Merkle trees over ordered leaf identifiers
//!
//! Builds a binary hash tree bottom-up from an ordered leaf mapping and
//! compares two equally shaped trees node by node, reporting every hash
//! mismatch.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod tree;
pub mod types;

pub use error::{ApiError, TreeError};
pub use tree::{HashAlgorithm, MerkleTree, Mismatch, Node};
pub use types::{LeafMap, NodeIndex};
