use indexmap::IndexMap;

use crate::config::ConflictPolicy;
use crate::error::{ParseError, TransformError};
use crate::ir::NormalizedNode;
use crate::parse::{Dialect, GraphNode};

use super::property_merge::merge_properties;

/// Collapse raw nodes sharing a label (case-insensitive) into one node each.
///
/// Input is walked in map order, so the first entry fixes the label casing
/// and later entries win property collisions. Output is keyed by the
/// lowercased label.
pub fn normalize_nodes<N: GraphNode>(
    nodes: &IndexMap<String, N>,
    dialect: Dialect,
    policy: ConflictPolicy,
) -> Result<IndexMap<String, NormalizedNode>, TransformError> {
    let mut output: IndexMap<String, NormalizedNode> = IndexMap::new();

    for (key, node) in nodes {
        if node.label().trim().is_empty() {
            let reason = format!("node '{key}' has an empty label");
            return Err(ParseError::malformed(dialect, reason).into());
        }

        let entry = output
            .entry(node.label().to_lowercase())
            .or_insert_with(|| NormalizedNode::new(node.label()));
        if !entry.source_keys.is_empty() {
            log::debug!(
                "{dialect}: merging node '{key}' ({}) into '{}'",
                node.label(),
                entry.label
            );
        }
        entry.source_keys.insert(key.clone());

        merge_properties(
            &mut entry.properties,
            node.properties(),
            node.label(),
            dialect,
            policy,
        )?;
    }

    Ok(output)
}
