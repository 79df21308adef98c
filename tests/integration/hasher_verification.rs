//! Hasher Implementation Verification Tests
//!
//! Combine-step digests must equal the underlying algorithms applied to the
//! concatenated hex strings.

use merkletree::HashAlgorithm;
use sha2::{Digest, Sha256};

/// Test that the SHA-256 combine matches sha2 directly
#[test]
fn test_combine_matches_sha256() {
    let left = "3a7bd3e2360a3d29eea436fcfb7e44c735d117c42d1c1835420b6b9942dd4f1b";
    let right = "b5bb9d8014a0f9b1d61e21e796d78dccdf1352f23cd32812f4850b878ae4944c";

    let direct = hex::encode(Sha256::digest(format!("{}{}", left, right).as_bytes()));
    assert_eq!(HashAlgorithm::Sha256.combine(left, right), direct);
}

/// Test that the BLAKE3 combine matches blake3 directly
#[test]
fn test_combine_matches_blake3() {
    let direct = blake3::hash(b"leftright").to_hex().to_string();
    assert_eq!(HashAlgorithm::Blake3.combine("left", "right"), direct);
}

/// Test the known SHA-256 digest of the empty string
#[test]
fn test_combine_of_empty_strings() {
    assert_eq!(
        HashAlgorithm::Sha256.combine("", ""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}
