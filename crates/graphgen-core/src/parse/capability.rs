//! Capability traits shared by every dialect adapter.
//!
//! The merge passes in [`crate::transform`] are written against these traits
//! only, so adding a dialect means decoding its shape and implementing them.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;

use super::{Dialect, VersionMismatchWarning, same_version};

/// A typed property as reported by a dialect.
pub trait GraphProperty {
    fn name(&self) -> &str;

    /// The foreign type name, e.g. `String`, `integer` or `StringArray`.
    fn type_name(&self) -> &str;

    fn is_array(&self) -> bool {
        self.type_name().to_ascii_lowercase().contains("array")
    }
}

/// A raw node definition.
pub trait GraphNode {
    type Property: GraphProperty;

    fn label(&self) -> &str;
    fn properties(&self) -> &[Self::Property];
}

/// A raw relationship definition. Endpoints are raw node keys of the same document.
pub trait GraphRelationship {
    type Property: GraphProperty;

    fn rel_type(&self) -> &str;
    fn source_key(&self) -> &str;
    fn target_key(&self) -> &str;
    fn properties(&self) -> &[Self::Property];
}

/// A decoded document in one dialect.
pub trait GraphDocument: DeserializeOwned {
    type Node: GraphNode;
    type Relationship: GraphRelationship;

    const DIALECT: Dialect;

    /// The format version this adapter was written against, if the dialect is versioned.
    const EXPECTED_VERSION: Option<&'static str>;

    fn version(&self) -> Option<&str>;

    /// Raw nodes keyed by their dialect identifier, in document order.
    fn nodes(&self) -> &IndexMap<String, Self::Node>;

    /// Raw relationships keyed by their dialect identifier, in document order.
    fn relationships(&self) -> &IndexMap<String, Self::Relationship>;

    fn source_node(&self, relationship: &Self::Relationship) -> Option<&Self::Node> {
        self.nodes().get(relationship.source_key())
    }

    fn target_node(&self, relationship: &Self::Relationship) -> Option<&Self::Node> {
        self.nodes().get(relationship.target_key())
    }

    fn version_advisory(&self) -> Option<VersionMismatchWarning> {
        let expected = Self::EXPECTED_VERSION?;
        match self.version() {
            Some(found) if same_version(expected, found) => None,
            found => Some(VersionMismatchWarning {
                dialect: Self::DIALECT,
                expected: expected.to_string(),
                found: found.map(str::to_string),
            }),
        }
    }
}
