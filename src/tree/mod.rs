//! Binary Merkle tree
//!
//! Built bottom-up from an ordered leaf mapping. Internal node hashes are the
//! digest of their children's hash strings concatenated left then right;
//! leaves keep the caller's identifier as their hash.

pub mod builder;
pub mod compare;
pub mod hasher;
pub mod node;
pub mod traversal;

pub use builder::MerkleTree;
pub use compare::Mismatch;
pub use hasher::HashAlgorithm;
pub use node::{Children, Node, NodeDisplay};
