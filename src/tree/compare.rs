//! Structural comparison of two equally shaped trees

use crate::error::TreeError;
use crate::tree::builder::MerkleTree;
use crate::types::NodeIndex;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A pair of corresponding nodes whose hashes differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mismatch {
    pub left: String,
    pub right: String,
}

impl Mismatch {
    fn new(left: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl From<Mismatch> for (String, String) {
    fn from(m: Mismatch) -> Self {
        (m.left, m.right)
    }
}

impl<S> MerkleTree<S> {
    /// Compare two trees node by node and list every hash mismatch
    ///
    /// Within each subtree, mismatches of the left child come first, then the
    /// subtree's own node, then the right child. The whole tree is walked even
    /// when the roots agree. Trees must have equal node counts and heights.
    #[instrument(skip_all, fields(left_nodes = x.node_count(), right_nodes = y.node_count()))]
    pub fn compare<T>(x: &MerkleTree<S>, y: &MerkleTree<T>) -> Result<Vec<Mismatch>, TreeError> {
        let shape_mismatch = || TreeError::ShapeMismatch {
            left_nodes: x.node_count(),
            right_nodes: y.node_count(),
            left_height: x.height(),
            right_height: y.height(),
        };

        if x.node_count() != y.node_count() || x.height() != y.height() {
            return Err(shape_mismatch());
        }

        let mut diff = Vec::new();
        descend(x, x.root_index(), y, y.root_index(), &mut diff).ok_or_else(shape_mismatch)?;
        debug!(mismatches = diff.len(), "Tree comparison completed");
        Ok(diff)
    }
}

/// Paired in-order walk; `None` when the two sides stop lining up
fn descend<S, T>(
    x: &MerkleTree<S>,
    nx: Option<NodeIndex>,
    y: &MerkleTree<T>,
    ny: Option<NodeIndex>,
    diff: &mut Vec<Mismatch>,
) -> Option<()> {
    let (nx, ny) = match (nx, ny) {
        (None, None) => return Some(()),
        (Some(nx), Some(ny)) => (x.node(nx)?, y.node(ny)?),
        _ => return None,
    };

    descend(x, nx.left(), y, ny.left(), diff)?;
    if nx.hash() != ny.hash() {
        diff.push(Mismatch::new(nx.hash(), ny.hash()));
    }
    descend(x, nx.right(), y, ny.right(), diff)
}
