use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::ConflictPolicy;
use crate::error::{ParseError, TransformError};
use crate::ir::{EndpointPair, NormalizedNode, NormalizedRelationship};
use crate::parse::{Dialect, GraphRelationship};

use super::property_merge::merge_properties;

/// Collapse raw relationships sharing a type (case-insensitive) into one each.
///
/// Endpoints are resolved through the `source_keys` of the already
/// normalized `nodes`, so every pair names a label present in the schema.
/// One type may legitimately connect several label pairs; exact repeats
/// collapse.
pub fn normalize_relationships<R: GraphRelationship>(
    relationships: &IndexMap<String, R>,
    nodes: &IndexMap<String, NormalizedNode>,
    dialect: Dialect,
    policy: ConflictPolicy,
) -> Result<IndexMap<String, NormalizedRelationship>, TransformError> {
    let labels = label_index(nodes);
    let mut output: IndexMap<String, NormalizedRelationship> = IndexMap::new();

    for (key, rel) in relationships {
        if rel.rel_type().trim().is_empty() {
            let reason = format!("relationship '{key}' has an empty type");
            return Err(ParseError::malformed(dialect, reason).into());
        }

        let source = resolve(&labels, rel.source_key(), key, dialect)?;
        let target = resolve(&labels, rel.target_key(), key, dialect)?;

        let entry = output
            .entry(rel.rel_type().to_lowercase())
            .or_insert_with(|| NormalizedRelationship::new(rel.rel_type()));
        if entry.endpoints.insert(EndpointPair::new(source, target)) {
            log::debug!(
                "{dialect}: {} connects ({source})->({target})",
                entry.rel_type
            );
        }

        merge_properties(
            &mut entry.properties,
            rel.properties(),
            rel.rel_type(),
            dialect,
            policy,
        )?;
    }

    Ok(output)
}

/// Raw node key -> normalized label.
fn label_index(nodes: &IndexMap<String, NormalizedNode>) -> HashMap<&str, &str> {
    nodes
        .values()
        .flat_map(|node| {
            node.source_keys
                .iter()
                .map(move |key| (key.as_str(), node.label.as_str()))
        })
        .collect()
}

fn resolve<'a>(
    labels: &HashMap<&str, &'a str>,
    node_key: &str,
    rel_key: &str,
    dialect: Dialect,
) -> Result<&'a str, ParseError> {
    labels.get(node_key).copied().ok_or_else(|| {
        ParseError::malformed(
            dialect,
            format!("relationship '{rel_key}' references unknown node '{node_key}'"),
        )
    })
}
