use indexmap::{IndexMap, IndexSet};

use super::types::PropertySet;
use crate::config::PropertyCasing;
use crate::parse::{Dialect, VersionMismatchWarning};

/// One node label after all raw entries sharing it were merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedNode {
    pub(crate) label: String,
    pub(crate) properties: PropertySet,
    pub(crate) source_keys: IndexSet<String>,
}

impl NormalizedNode {
    pub(crate) fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            properties: PropertySet::new(),
            source_keys: IndexSet::new(),
        }
    }

    /// Label casing of the first raw entry seen.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    /// Raw dialect keys that were merged into this node.
    pub fn source_keys(&self) -> &IndexSet<String> {
        &self.source_keys
    }
}

/// An ordered (source label, target label) association.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointPair {
    pub source: String,
    pub target: String,
}

impl EndpointPair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// One relationship type after all raw entries sharing it were merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRelationship {
    pub(crate) rel_type: String,
    pub(crate) endpoints: IndexSet<EndpointPair>,
    pub(crate) properties: PropertySet,
}

impl NormalizedRelationship {
    pub(crate) fn new(rel_type: &str) -> Self {
        Self {
            rel_type: rel_type.to_string(),
            endpoints: IndexSet::new(),
            properties: PropertySet::new(),
        }
    }

    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    pub fn endpoints(&self) -> &IndexSet<EndpointPair> {
        &self.endpoints
    }

    pub fn properties(&self) -> &PropertySet {
        &self.properties
    }

    pub fn connects(&self, source: &str, target: &str) -> bool {
        self.endpoints.iter().any(|p| {
            p.source.eq_ignore_ascii_case(source) && p.target.eq_ignore_ascii_case(target)
        })
    }
}

/// The finalized, immutable schema handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    dialect: Dialect,
    nodes: IndexMap<String, NormalizedNode>,
    relationships: IndexMap<String, NormalizedRelationship>,
    property_casing: PropertyCasing,
    warnings: Vec<VersionMismatchWarning>,
}

impl Schema {
    pub(crate) fn new(
        dialect: Dialect,
        nodes: IndexMap<String, NormalizedNode>,
        relationships: IndexMap<String, NormalizedRelationship>,
        property_casing: PropertyCasing,
        warnings: Vec<VersionMismatchWarning>,
    ) -> Self {
        Self {
            dialect,
            nodes,
            relationships,
            property_casing,
            warnings,
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Nodes keyed by lowercased label, in first-seen order.
    pub fn nodes(&self) -> &IndexMap<String, NormalizedNode> {
        &self.nodes
    }

    /// Relationships keyed by lowercased type, in first-seen order.
    pub fn relationships(&self) -> &IndexMap<String, NormalizedRelationship> {
        &self.relationships
    }

    pub fn node(&self, label: &str) -> Option<&NormalizedNode> {
        self.nodes.get(&label.to_lowercase())
    }

    pub fn relationship(&self, rel_type: &str) -> Option<&NormalizedRelationship> {
        self.relationships.get(&rel_type.to_lowercase())
    }

    /// Property naming convention requested by the caller; only renderers read it.
    pub fn property_casing(&self) -> PropertyCasing {
        self.property_casing
    }

    pub fn warnings(&self) -> &[VersionMismatchWarning] {
        &self.warnings
    }
}
