//! Integration tests for tree construction, comparison, and the manifest boundary

mod hasher_verification;
mod tree_determinism;
