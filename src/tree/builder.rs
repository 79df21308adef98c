//! Tree construction from an ordered leaf mapping
//!
//! Leaves are paired in order and hashed bottom-up until a single root
//! remains. Every internal node's children are the nodes built on the level
//! below it, all stored in one arena owned by the tree.

use crate::tree::hasher::HashAlgorithm;
use crate::tree::node::{Node, NodeDisplay};
use crate::types::{LeafMap, NodeIndex};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// Binary Merkle tree over ordered leaf identifiers
#[derive(Debug, Clone)]
pub struct MerkleTree<S = PathBuf> {
    algorithm: HashAlgorithm,
    /// Every node of the tree, leaves and internal nodes alike
    nodes: Vec<Node>,
    /// Internal nodes in creation order
    internal: Vec<NodeIndex>,
    root: Option<NodeIndex>,
    leaf_source: LeafMap<S>,
}

impl<S> Default for MerkleTree<S> {
    fn default() -> Self {
        Self::with_algorithm(HashAlgorithm::default())
    }
}

impl MerkleTree {
    /// Create an empty SHA-256 tree
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> MerkleTree<S> {
    /// Create an empty tree that will combine hashes with `algorithm`
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            nodes: Vec::new(),
            internal: Vec::new(),
            root: None,
            leaf_source: LeafMap::default(),
        }
    }

    /// Create a tree and build it from `leaves` in one step
    pub fn from_leaves(algorithm: HashAlgorithm, leaves: LeafMap<S>) -> Self {
        let mut tree = Self::with_algorithm(algorithm);
        tree.build(leaves);
        tree
    }

    /// Build the tree from `leaves`, discarding any previous contents
    ///
    /// An odd leaf count duplicates the last identifier. An empty mapping
    /// yields an empty tree with no root.
    #[instrument(skip_all, fields(leaves = leaves.len(), algorithm = %self.algorithm))]
    pub fn build(&mut self, leaves: LeafMap<S>) {
        let start = Instant::now();
        self.nodes.clear();
        self.internal.clear();
        self.root = None;

        let mut identifiers: Vec<&str> = leaves.keys().map(String::as_str).collect();
        if let Some(&last) = identifiers.last() {
            if identifiers.len() % 2 != 0 {
                trace!(identifier = last, "Duplicating last leaf to even the count");
                identifiers.push(last);
            }

            let mut level = Vec::with_capacity(identifiers.len() / 2);
            for pair in identifiers.chunks_exact(2) {
                let left = self.push(Node::leaf(pair[0]));
                let right = self.push(Node::leaf(pair[1]));
                level.push(self.push_parent(left, right));
            }
            self.root = Some(self.reduce_level(level));
        } else {
            debug!("No leaves supplied, tree left empty");
        }

        self.leaf_source = leaves;
        debug!(
            node_count = self.nodes.len(),
            root_hash = self.root_hash().unwrap_or("<empty>"),
            duration_us = start.elapsed().as_micros() as u64,
            "Tree build completed"
        );
    }

    /// Collapse one level into its parent level until a single node remains
    ///
    /// A trailing unpaired node is carried up unchanged.
    fn reduce_level(&mut self, level: Vec<NodeIndex>) -> NodeIndex {
        if level.len() == 1 {
            return level[0];
        }

        trace!(width = level.len(), "Reducing level");
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut nodes = level.into_iter();
        while let Some(left) = nodes.next() {
            match nodes.next() {
                Some(right) => next.push(self.push_parent(left, right)),
                None => next.push(left),
            }
        }
        self.reduce_level(next)
    }

    fn push_parent(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let hash = self
            .algorithm
            .combine(self.nodes[left.get()].hash(), self.nodes[right.get()].hash());
        let index = self.push(Node::internal(hash, left, right));
        self.internal.push(index);
        index
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        NodeIndex::new(self.nodes.len() - 1)
    }

    /// Hash of the root node, or `None` for an empty tree
    pub fn root_hash(&self) -> Option<&str> {
        self.root().map(Node::hash)
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.and_then(|index| self.node(index))
    }

    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.get())
    }

    /// Every internal node created by the last build, in creation order
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.internal.iter().map(|index| &self.nodes[index.get()])
    }

    /// Total number of nodes, leaves included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of leaf nodes, counting a duplicated last leaf
    pub fn leaf_count(&self) -> usize {
        self.nodes.len() - self.internal.len()
    }

    pub fn leaf_source(&self) -> &LeafMap<S> {
        &self.leaf_source
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Debug rendering of the subtree rooted at `index`
    pub fn display_node(&self, index: NodeIndex) -> NodeDisplay<'_> {
        NodeDisplay::new(&self.nodes, Some(index))
    }
}

impl<S> fmt::Display for MerkleTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        NodeDisplay::new(&self.nodes, self.root).fmt(f)
    }
}
