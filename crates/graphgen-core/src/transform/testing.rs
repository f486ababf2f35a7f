//! Minimal in-memory dialect for exercising the merge passes.

use indexmap::IndexMap;

use crate::parse::{GraphNode, GraphProperty, GraphRelationship};

#[derive(Debug, Clone)]
pub(crate) struct TestProperty(pub &'static str, pub &'static str);

impl GraphProperty for TestProperty {
    fn name(&self) -> &str {
        self.0
    }

    fn type_name(&self) -> &str {
        self.1
    }
}

/// `(label, properties)`
#[derive(Debug, Clone)]
pub(crate) struct TestNode(pub &'static str, pub Vec<TestProperty>);

impl GraphNode for TestNode {
    type Property = TestProperty;

    fn label(&self) -> &str {
        self.0
    }

    fn properties(&self) -> &[TestProperty] {
        &self.1
    }
}

/// `(type, source key, target key, properties)`
#[derive(Debug, Clone)]
pub(crate) struct TestRelationship(
    pub &'static str,
    pub &'static str,
    pub &'static str,
    pub Vec<TestProperty>,
);

impl GraphRelationship for TestRelationship {
    type Property = TestProperty;

    fn rel_type(&self) -> &str {
        self.0
    }

    fn source_key(&self) -> &str {
        self.1
    }

    fn target_key(&self) -> &str {
        self.2
    }

    fn properties(&self) -> &[TestProperty] {
        &self.3
    }
}

pub(crate) fn keyed<T>(entries: Vec<(&str, T)>) -> IndexMap<String, T> {
    entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
