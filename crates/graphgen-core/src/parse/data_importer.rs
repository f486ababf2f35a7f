use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

use super::capability::{GraphDocument, GraphNode, GraphProperty, GraphRelationship};
use super::Dialect;

/// Neo4j Data Importer model export.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImporterDocument {
    #[serde(default)]
    pub version: Option<String>,
    pub data_model: DataImporterDataModel,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImporterDataModel {
    pub graph_model: DataImporterGraphModel,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImporterGraphModel {
    #[serde(default)]
    pub node_schemas: IndexMap<String, DataImporterNode>,
    #[serde(default)]
    pub relationship_schemas: IndexMap<String, DataImporterRelationship>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataImporterNode {
    pub label: String,
    #[serde(default, deserialize_with = "nullable_properties")]
    pub properties: Vec<DataImporterProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataImporterRelationship {
    #[serde(rename = "type")]
    pub rel_type: String,
    pub source_node_schema: String,
    pub target_node_schema: String,
    #[serde(default, deserialize_with = "nullable_properties")]
    pub properties: Vec<DataImporterProperty>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataImporterProperty {
    pub property: String,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub identifier: Option<String>,
}

/// Property lists may be written as `null` for entities without properties.
fn nullable_properties<'de, D>(deserializer: D) -> Result<Vec<DataImporterProperty>, D::Error>
where
    D: Deserializer<'de>,
{
    let list: Option<Vec<DataImporterProperty>> = Option::deserialize(deserializer)?;
    Ok(list.unwrap_or_default())
}

impl GraphProperty for DataImporterProperty {
    fn name(&self) -> &str {
        &self.property
    }

    fn type_name(&self) -> &str {
        &self.property_type
    }
}

impl GraphNode for DataImporterNode {
    type Property = DataImporterProperty;

    fn label(&self) -> &str {
        &self.label
    }

    fn properties(&self) -> &[DataImporterProperty] {
        &self.properties
    }
}

impl GraphRelationship for DataImporterRelationship {
    type Property = DataImporterProperty;

    fn rel_type(&self) -> &str {
        &self.rel_type
    }

    fn source_key(&self) -> &str {
        &self.source_node_schema
    }

    fn target_key(&self) -> &str {
        &self.target_node_schema
    }

    fn properties(&self) -> &[DataImporterProperty] {
        &self.properties
    }
}

impl GraphDocument for DataImporterDocument {
    type Node = DataImporterNode;
    type Relationship = DataImporterRelationship;

    const DIALECT: Dialect = Dialect::DataImporter;
    const EXPECTED_VERSION: Option<&'static str> = Some("0.7.0");

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn nodes(&self) -> &IndexMap<String, DataImporterNode> {
        &self.data_model.graph_model.node_schemas
    }

    fn relationships(&self) -> &IndexMap<String, DataImporterRelationship> {
        &self.data_model.graph_model.relationship_schemas
    }
}
