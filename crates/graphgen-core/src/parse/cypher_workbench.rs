use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::capability::{GraphDocument, GraphNode, GraphProperty, GraphRelationship};
use super::Dialect;

/// Cypher Workbench data model export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CypherWorkbenchDocument {
    pub metadata: CypherWorkbenchMetadata,
    pub data_model: CypherWorkbenchDataModel,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CypherWorkbenchMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CypherWorkbenchDataModel {
    #[serde(default)]
    pub node_labels: IndexMap<String, CypherWorkbenchNode>,
    #[serde(default)]
    pub relationship_types: IndexMap<String, CypherWorkbenchRelationship>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CypherWorkbenchNode {
    pub label: String,
    #[serde(default, deserialize_with = "keyed_properties")]
    pub properties: Vec<CypherWorkbenchProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CypherWorkbenchRelationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub start_node_label_key: String,
    pub end_node_label_key: String,
    #[serde(default, deserialize_with = "keyed_properties")]
    pub properties: Vec<CypherWorkbenchProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CypherWorkbenchProperty {
    pub name: String,
    pub datatype: String,
}

/// Workbench stores properties as an object keyed by an internal property key.
fn keyed_properties<'de, D>(deserializer: D) -> Result<Vec<CypherWorkbenchProperty>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<IndexMap<String, CypherWorkbenchProperty>> =
        Option::deserialize(deserializer)?;
    Ok(map.map(|m| m.into_values().collect()).unwrap_or_default())
}

impl GraphProperty for CypherWorkbenchProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &str {
        &self.datatype
    }
}

impl GraphNode for CypherWorkbenchNode {
    type Property = CypherWorkbenchProperty;

    fn label(&self) -> &str {
        &self.label
    }

    fn properties(&self) -> &[CypherWorkbenchProperty] {
        &self.properties
    }
}

impl GraphRelationship for CypherWorkbenchRelationship {
    type Property = CypherWorkbenchProperty;

    fn rel_type(&self) -> &str {
        &self.rel_type
    }

    fn source_key(&self) -> &str {
        &self.start_node_label_key
    }

    fn target_key(&self) -> &str {
        &self.end_node_label_key
    }

    fn properties(&self) -> &[CypherWorkbenchProperty] {
        &self.properties
    }
}

impl GraphDocument for CypherWorkbenchDocument {
    type Node = CypherWorkbenchNode;
    type Relationship = CypherWorkbenchRelationship;

    const DIALECT: Dialect = Dialect::CypherWorkbench;
    const EXPECTED_VERSION: Option<&'static str> = Some("1.3.0");

    fn version(&self) -> Option<&str> {
        self.metadata.version.as_deref()
    }

    fn nodes(&self) -> &IndexMap<String, CypherWorkbenchNode> {
        &self.data_model.node_labels
    }

    fn relationships(&self) -> &IndexMap<String, CypherWorkbenchRelationship> {
        &self.data_model.relationship_types
    }
}
