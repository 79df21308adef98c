//! Integration tests for tree building determinism

use super::test_utils::{build, build_owned, leaves, numbered};
use merkletree::{HashAlgorithm, MerkleTree};

/// Test that the same ordered input produces the same root hash
#[test]
fn test_same_input_same_root() {
    let ids = numbered(17);
    let root1 = build_owned(&ids).root_hash().map(str::to_string);
    let root2 = build_owned(&ids).root_hash().map(str::to_string);

    assert!(root1.is_some());
    assert_eq!(root1, root2);
}

/// Test that rebuilding one tree instance is repeatable
#[test]
fn test_rebuild_same_instance() {
    let mut tree = MerkleTree::new();
    tree.build(leaves(&["a", "b", "c"]));
    let first = tree.root_hash().map(str::to_string);
    tree.build(leaves(&["a", "b", "c"]));

    assert_eq!(tree.root_hash().map(str::to_string), first);
    assert_eq!(tree.node_count(), 7);
}

/// Test that reordering leaves changes the root hash
#[test]
fn test_reordering_changes_root() {
    let forward = build(&["a", "b", "c", "d"]);
    let swapped_pairs = build(&["c", "d", "a", "b"]);
    let swapped_within = build(&["b", "a", "c", "d"]);

    assert_ne!(forward.root_hash(), swapped_pairs.root_hash());
    assert_ne!(forward.root_hash(), swapped_within.root_hash());
}

/// Test that changing one leaf changes the root hash
#[test]
fn test_leaf_change_changes_root() {
    let t1 = build(&["a", "b", "c", "d"]);
    let t2 = build(&["a", "b", "c", "e"]);
    assert_ne!(t1.root_hash(), t2.root_hash());
}

/// Test that the concatenation convention is order sensitive
#[test]
fn test_pair_order_changes_combined_hash() {
    assert_ne!(build(&["a", "b"]).root_hash(), build(&["b", "a"]).root_hash());
}

/// Test that the chosen algorithm determines every internal hash
#[test]
fn test_algorithm_changes_root() {
    let sha = MerkleTree::from_leaves(HashAlgorithm::Sha256, leaves(&["a", "b", "c", "d"]));
    let b3 = MerkleTree::from_leaves(HashAlgorithm::Blake3, leaves(&["a", "b", "c", "d"]));

    assert_ne!(sha.root_hash(), b3.root_hash());
    assert_eq!(sha.level_values(3), b3.level_values(3));
}
