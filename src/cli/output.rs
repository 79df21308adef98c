//! CLI output: error mapping and exit codes.

use crate::error::ApiError;

/// Command succeeded; for `diff`, the trees are identical
pub const EXIT_SUCCESS: i32 = 0;
/// `diff` found mismatching nodes
pub const EXIT_DIFFERENT: i32 = 1;
/// Any error
pub const EXIT_FAILURE: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::Manifest { .. } => format!("{}\nExpected one `<identifier> <source>` per line.", e),
        _ => e.to_string(),
    }
}
