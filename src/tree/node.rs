//! Tree nodes
//!
//! Nodes live in the owning tree's arena and refer to their children by
//! [`NodeIndex`]. A node has either both children or none.

use crate::types::NodeIndex;
use std::fmt;

/// Child links of an internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Children {
    pub left: NodeIndex,
    pub right: NodeIndex,
}

/// A single tree node
///
/// Leaves carry the caller's leaf identifier verbatim in `hash`; internal
/// nodes carry the combined digest of their children's hashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    hash: String,
    children: Option<Children>,
}

impl Node {
    pub fn leaf(identifier: impl Into<String>) -> Self {
        Self {
            hash: identifier.into(),
            children: None,
        }
    }

    pub fn internal(hash: String, left: NodeIndex, right: NodeIndex) -> Self {
        Self {
            hash,
            children: Some(Children { left, right }),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn children(&self) -> Option<Children> {
        self.children
    }

    pub fn left(&self) -> Option<NodeIndex> {
        self.children.map(|c| c.left)
    }

    pub fn right(&self) -> Option<NodeIndex> {
        self.children.map(|c| c.right)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Recursive debug rendering of a node and its subtree
///
/// Renders as `:val=<hash>,left=<left>,right=<right>:`, with absent nodes
/// shown as `None`.
pub struct NodeDisplay<'a> {
    arena: &'a [Node],
    index: Option<NodeIndex>,
}

impl<'a> NodeDisplay<'a> {
    pub(crate) fn new(arena: &'a [Node], index: Option<NodeIndex>) -> Self {
        Self { arena, index }
    }

    fn child(&self, index: Option<NodeIndex>) -> NodeDisplay<'a> {
        NodeDisplay::new(self.arena, index)
    }
}

impl fmt::Display for NodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = match self.index.and_then(|i| self.arena.get(i.get())) {
            Some(node) => node,
            None => return f.write_str("None"),
        };
        write!(
            f,
            ":val={},left={},right={}:",
            node.hash,
            self.child(node.left()),
            self.child(node.right())
        )
    }
}
