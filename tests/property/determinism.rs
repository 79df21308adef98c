//! Property-based tests for determinism and diff guarantees

use merkletree::{HashAlgorithm, LeafMap, MerkleTree, Mismatch};
use proptest::prelude::*;
use std::path::PathBuf;

fn to_leaves(ids: &[String]) -> LeafMap {
    ids.iter()
        .map(|id| (id.clone(), PathBuf::from(id)))
        .collect()
}

/// Nodes whose hash changes when leaf `index` of `count` leaves changes:
/// the leaf (twice when it is the duplicated last leaf) plus every new
/// ancestor. A trailing node promoted unchanged adds no ancestor on that level.
fn expected_mismatches(count: usize, index: usize) -> usize {
    let duplicated = count % 2 == 1 && index == count - 1;
    let mut mismatches = if duplicated { 2 } else { 1 };
    let mut width = count + count % 2;
    let mut position = index;
    while width > 1 {
        let promoted = width % 2 == 1 && position == width - 1;
        if !promoted {
            mismatches += 1;
        }
        position /= 2;
        width = width.div_ceil(2);
    }
    mismatches
}

/// Unique identifiers, order preserved
fn unique_ids(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-f0-9]{8}", 1..max)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    #[test]
    fn build_is_deterministic(ids in unique_ids(64)) {
        let t1 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&ids));
        let t2 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&ids));
        prop_assert!(t1.root_hash().is_some());
        prop_assert_eq!(t1.root_hash(), t2.root_hash());
    }

    #[test]
    fn height_and_node_count_follow_leaf_count(ids in unique_ids(200)) {
        let tree = MerkleTree::from_leaves(HashAlgorithm::Blake3, to_leaves(&ids));
        let m = ids.len() + ids.len() % 2;
        let expected_height = 1 + (usize::BITS - (m - 1).leading_zeros()) as usize;

        prop_assert_eq!(tree.node_count(), 2 * m - 1);
        prop_assert_eq!(tree.height(), expected_height);
    }

    #[test]
    fn self_compare_is_empty(ids in unique_ids(64)) {
        let tree = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&ids));
        prop_assert!(MerkleTree::compare(&tree, &tree).unwrap().is_empty());
    }

    #[test]
    fn swapping_two_leaves_changes_root(ids in unique_ids(32), a in any::<prop::sample::Index>(), b in any::<prop::sample::Index>()) {
        let i = a.index(ids.len());
        let j = b.index(ids.len());
        prop_assume!(i != j);

        let mut swapped = ids.clone();
        swapped.swap(i, j);

        let t1 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&ids));
        let t2 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&swapped));
        prop_assert_ne!(t1.root_hash(), t2.root_hash());
    }

    #[test]
    fn changed_leaf_reports_leaf_and_root(ids in unique_ids(64), pick in any::<prop::sample::Index>()) {
        let i = pick.index(ids.len());
        let mut changed = ids.clone();
        changed[i] = format!("{}-changed", ids[i]);

        let t1 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&ids));
        let t2 = MerkleTree::from_leaves(HashAlgorithm::Sha256, to_leaves(&changed));
        let diff = MerkleTree::compare(&t1, &t2).unwrap();

        let expected = Mismatch { left: ids[i].clone(), right: changed[i].clone() };
        prop_assert!(diff.contains(&expected));
        prop_assert_eq!(diff.iter().filter(|m| Some(m.left.as_str()) == t1.root_hash()).count(), 1);

        prop_assert_eq!(diff.len(), expected_mismatches(ids.len(), i));
    }
}
