//! Leaf manifests
//!
//! A manifest lists one leaf per line as `<identifier> <source>`. Line order
//! is leaf order. Blank lines and `#` comments are skipped.

use crate::error::ApiError;
use crate::types::LeafMap;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Read and parse the manifest at `path`
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_manifest(path: &Path) -> Result<LeafMap, ApiError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        ApiError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to read manifest {:?}: {}", path, e),
        ))
    })?;
    let leaves = parse_manifest(&text)?;
    debug!(leaf_count = leaves.len(), "Loaded manifest");
    Ok(leaves)
}

/// Parse manifest text into an ordered leaf mapping
///
/// The identifier ends at the first whitespace; the rest of the line, trimmed,
/// is the source. A repeated identifier keeps its first position and takes
/// the later source.
pub fn parse_manifest(text: &str) -> Result<LeafMap, ApiError> {
    let mut leaves = LeafMap::new();

    for (offset, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line_number = offset + 1;
        let (identifier, source) = match line.split_once(char::is_whitespace) {
            Some((id, rest)) if !rest.trim().is_empty() => (id, rest.trim()),
            _ => {
                return Err(ApiError::Manifest {
                    line: line_number,
                    message: format!("missing source for leaf '{}'", line),
                })
            }
        };

        if leaves
            .insert(identifier.to_string(), PathBuf::from(source))
            .is_some()
        {
            warn!(
                identifier,
                line = line_number,
                "Duplicate leaf identifier, keeping first position"
            );
        }
    }

    Ok(leaves)
}
