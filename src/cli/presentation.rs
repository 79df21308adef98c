//! CLI presentation: text and JSON formatters for command results.

use crate::error::ApiError;
use crate::tree::{MerkleTree, Mismatch};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde_json::json;

const EMPTY: &str = "<empty>";

pub fn format_root(tree: &MerkleTree, format: &str) -> Result<String, ApiError> {
    match format {
        "json" => to_json(&json!({
            "root_hash": tree.root_hash(),
            "algorithm": tree.algorithm(),
            "leaves": tree.leaf_source().len(),
        })),
        _ => Ok(tree.root_hash().unwrap_or(EMPTY).to_string()),
    }
}

pub fn format_levels(tree: &MerkleTree, format: &str) -> Result<String, ApiError> {
    let levels = tree.levels();
    if format == "json" {
        return to_json(&json!({
            "root_hash": tree.root_hash(),
            "height": tree.height(),
            "node_count": tree.node_count(),
            "levels": levels,
        }));
    }

    let mut out = format!(
        "Height: {}\nNodes: {}\n",
        tree.height(),
        tree.node_count()
    );
    for (depth, values) in levels.iter().enumerate() {
        out.push_str(&format!("\nLevel {} ({} nodes)\n", depth + 1, values.len()));
        for value in values {
            out.push_str(&format!("  {}\n", value));
        }
    }
    Ok(out.trim_end().to_string())
}

pub fn format_show(tree: &MerkleTree) -> String {
    tree.to_string()
}

pub fn format_diff(
    left: &MerkleTree,
    right: &MerkleTree,
    mismatches: &[Mismatch],
    format: &str,
) -> Result<String, ApiError> {
    if format == "json" {
        let entries: Vec<_> = mismatches
            .iter()
            .map(|m| {
                json!({
                    "left": m.left,
                    "right": m.right,
                    "left_source": left.leaf_source().get(&m.left),
                    "right_source": right.leaf_source().get(&m.right),
                })
            })
            .collect();
        return to_json(&json!({
            "identical": mismatches.is_empty(),
            "left_root": left.root_hash(),
            "right_root": right.root_hash(),
            "mismatches": entries,
        }));
    }

    if mismatches.is_empty() {
        return Ok(format!(
            "Trees are identical\n  Root hash: {}",
            left.root_hash().unwrap_or(EMPTY)
        ));
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["#", "Left", "Right", "Leaf sources"]);
    for (i, m) in mismatches.iter().enumerate() {
        let sources = match (left.leaf_source().get(&m.left), right.leaf_source().get(&m.right)) {
            (None, None) => String::new(),
            (l, r) => format!(
                "{} | {}",
                l.map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string()),
                r.map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string())
            ),
        };
        table.add_row(vec![
            (i + 1).to_string(),
            m.left.clone(),
            m.right.clone(),
            sources,
        ]);
    }
    Ok(format!(
        "Trees differ: {} mismatching node(s)\n\n{}",
        mismatches.len(),
        table
    ))
}

fn to_json(value: &serde_json::Value) -> Result<String, ApiError> {
    Ok(serde_json::to_string_pretty(value)?)
}
