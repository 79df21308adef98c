//! Read-only traversal: height and level-order values

use crate::tree::builder::MerkleTree;
use crate::types::NodeIndex;
use std::io::{self, Write};

impl<S> MerkleTree<S> {
    /// Height of the whole tree; 0 when empty
    pub fn height(&self) -> usize {
        self.subtree_height(self.root_index())
    }

    /// Height of the subtree at `index`; 0 for an absent node
    pub fn subtree_height(&self, index: Option<NodeIndex>) -> usize {
        match index.and_then(|i| self.node(i)) {
            None => 0,
            Some(node) => {
                1 + self
                    .subtree_height(node.left())
                    .max(self.subtree_height(node.right()))
            }
        }
    }

    /// Hash values at depth `level`, left to right. The root is level 1.
    pub fn level_values(&self, level: usize) -> Vec<&str> {
        let mut values = Vec::new();
        self.collect_level(self.root_index(), level, &mut values);
        values
    }

    fn collect_level<'a>(&'a self, index: Option<NodeIndex>, level: usize, out: &mut Vec<&'a str>) {
        let Some(node) = index.and_then(|i| self.node(i)) else {
            return;
        };
        match level {
            0 => {}
            1 => out.push(node.hash()),
            _ => {
                self.collect_level(node.left(), level - 1, out);
                self.collect_level(node.right(), level - 1, out);
            }
        }
    }

    /// Level-order values, one entry per level from the root down
    pub fn levels(&self) -> Vec<Vec<&str>> {
        (1..=self.height()).map(|level| self.level_values(level)).collect()
    }

    /// Write every hash value in level order, one per line
    pub fn print_level_order<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for level in self.levels() {
            for value in level {
                writeln!(out, "{}", value)?;
            }
        }
        Ok(())
    }
}
