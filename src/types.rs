//! Shared identifiers and aliases.

use indexmap::IndexMap;
use std::fmt;
use std::path::PathBuf;

/// Ordered mapping from leaf identifier to the resource it came from.
///
/// Iteration order is insertion order, which determines the tree shape.
pub type LeafMap<S = PathBuf> = IndexMap<String, S>;

/// Position of a node inside a tree's node arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub(crate) fn new(index: usize) -> Self {
        NodeIndex(index)
    }

    /// Raw arena offset
    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
