use indexmap::IndexMap;
use serde::Deserialize;

use super::capability::{GraphDocument, GraphNode, GraphProperty, GraphRelationship};
use super::Dialect;

/// Arrows diagram export. Nodes and relationships are keyed by their diagram id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawArrowsDocument")]
pub struct ArrowsDocument {
    pub diagram_name: Option<String>,
    pub nodes: IndexMap<String, ArrowsNode>,
    pub relationships: IndexMap<String, ArrowsRelationship>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowsNode {
    pub id: String,
    pub label: String,
    pub properties: Vec<ArrowsProperty>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrowsRelationship {
    pub id: String,
    pub rel_type: String,
    pub from_id: String,
    pub to_id: String,
    pub properties: Vec<ArrowsProperty>,
}

/// Arrows has no property schema; the value typed into the diagram is read as the type name.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowsProperty {
    pub name: String,
    pub type_name: String,
}

// Saved diagrams wrap the graph; "Export JSON" emits it bare.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawArrowsDocument {
    Wrapped {
        graph: RawArrowsGraph,
        #[serde(rename = "diagramName", default)]
        diagram_name: Option<String>,
    },
    Bare(RawArrowsGraph),
}

#[derive(Deserialize)]
struct RawArrowsGraph {
    nodes: Vec<RawArrowsNode>,
    #[serde(default)]
    relationships: Vec<RawArrowsRelationship>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArrowsNode {
    id: String,
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    properties: IndexMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArrowsRelationship {
    id: String,
    #[serde(rename = "type", default)]
    rel_type: String,
    from_id: String,
    to_id: String,
    #[serde(default)]
    properties: IndexMap<String, String>,
}

fn to_properties(raw: IndexMap<String, String>) -> Vec<ArrowsProperty> {
    raw.into_iter()
        .map(|(name, type_name)| ArrowsProperty { name, type_name })
        .collect()
}

impl TryFrom<RawArrowsNode> for ArrowsNode {
    type Error = String;

    fn try_from(raw: RawArrowsNode) -> Result<Self, Self::Error> {
        let label = raw
            .labels
            .into_iter()
            .find(|l| !l.trim().is_empty())
            .or_else(|| Some(raw.caption).filter(|c| !c.trim().is_empty()))
            .ok_or_else(|| format!("node '{}' has neither labels nor a caption", raw.id))?;
        Ok(ArrowsNode {
            id: raw.id,
            label,
            properties: to_properties(raw.properties),
        })
    }
}

impl TryFrom<RawArrowsRelationship> for ArrowsRelationship {
    type Error = String;

    fn try_from(raw: RawArrowsRelationship) -> Result<Self, Self::Error> {
        if raw.rel_type.trim().is_empty() {
            return Err(format!("relationship '{}' has no type", raw.id));
        }
        Ok(ArrowsRelationship {
            id: raw.id,
            rel_type: raw.rel_type,
            from_id: raw.from_id,
            to_id: raw.to_id,
            properties: to_properties(raw.properties),
        })
    }
}

impl TryFrom<RawArrowsDocument> for ArrowsDocument {
    type Error = String;

    fn try_from(raw: RawArrowsDocument) -> Result<Self, Self::Error> {
        let (graph, diagram_name) = match raw {
            RawArrowsDocument::Wrapped {
                graph,
                diagram_name,
            } => (graph, diagram_name),
            RawArrowsDocument::Bare(graph) => (graph, None),
        };

        let mut nodes = IndexMap::with_capacity(graph.nodes.len());
        for raw_node in graph.nodes {
            let node = ArrowsNode::try_from(raw_node)?;
            if nodes.contains_key(&node.id) {
                return Err(format!("duplicate node id '{}'", node.id));
            }
            nodes.insert(node.id.clone(), node);
        }

        let mut relationships = IndexMap::with_capacity(graph.relationships.len());
        for raw_rel in graph.relationships {
            let rel = ArrowsRelationship::try_from(raw_rel)?;
            if relationships.contains_key(&rel.id) {
                return Err(format!("duplicate relationship id '{}'", rel.id));
            }
            relationships.insert(rel.id.clone(), rel);
        }

        Ok(ArrowsDocument {
            diagram_name,
            nodes,
            relationships,
        })
    }
}

impl GraphProperty for ArrowsProperty {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl GraphNode for ArrowsNode {
    type Property = ArrowsProperty;

    fn label(&self) -> &str {
        &self.label
    }

    fn properties(&self) -> &[ArrowsProperty] {
        &self.properties
    }
}

impl GraphRelationship for ArrowsRelationship {
    type Property = ArrowsProperty;

    fn rel_type(&self) -> &str {
        &self.rel_type
    }

    fn source_key(&self) -> &str {
        &self.from_id
    }

    fn target_key(&self) -> &str {
        &self.to_id
    }

    fn properties(&self) -> &[ArrowsProperty] {
        &self.properties
    }
}

impl GraphDocument for ArrowsDocument {
    type Node = ArrowsNode;
    type Relationship = ArrowsRelationship;

    const DIALECT: Dialect = Dialect::Arrows;
    const EXPECTED_VERSION: Option<&'static str> = None;

    fn version(&self) -> Option<&str> {
        None
    }

    fn nodes(&self) -> &IndexMap<String, ArrowsNode> {
        &self.nodes
    }

    fn relationships(&self) -> &IndexMap<String, ArrowsRelationship> {
        &self.relationships
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::parse::from_json;

    #[test]
    fn test_bare_export() {
        let input = r#"{
            "nodes": [
                {"id": "n0", "labels": ["Person"], "caption": "", "properties": {"name": "string"},
                 "position": {"x": 0, "y": 0}, "style": {}},
                {"id": "n1", "labels": [], "caption": "City", "properties": {}}
            ],
            "relationships": [
                {"id": "n0", "type": "LIVES_IN", "fromId": "n0", "toId": "n1",
                 "properties": {"since": "date"}, "style": {}}
            ],
            "style": {"font-family": "sans-serif"}
        }"#;
        let doc: ArrowsDocument = from_json(input).unwrap();
        assert_eq!(doc.diagram_name, None);
        assert!(doc.version_advisory().is_none());
        assert_eq!(doc.nodes()["n0"].label(), "Person");
        assert_eq!(doc.nodes()["n1"].label(), "City");

        let lives_in = &doc.relationships()["n0"];
        assert_eq!(doc.source_node(lives_in).unwrap().label(), "Person");
        assert_eq!(lives_in.properties()[0].type_name(), "date");
    }

    #[test]
    fn test_wrapped_save_file() {
        let input = r#"{
            "graph": {"nodes": [{"id": "a", "labels": ["Thing"]}], "relationships": []},
            "diagramName": "Things"
        }"#;
        let doc: ArrowsDocument = from_json(input).unwrap();
        assert_eq!(doc.diagram_name.as_deref(), Some("Things"));
        assert_eq!(doc.nodes().len(), 1);
    }

    #[test]
    fn test_unlabelled_node_is_malformed() {
        let input = r#"{"nodes": [{"id": "n0", "labels": [], "caption": ""}]}"#;
        assert!(matches!(
            from_json::<ArrowsDocument>(input),
            Err(ParseError::MalformedInput {
                dialect: Some(Dialect::Arrows),
                ..
            })
        ));
    }

    #[test]
    fn test_duplicate_node_id_is_malformed() {
        let input = r#"{"nodes": [
            {"id": "n0", "labels": ["A"]},
            {"id": "n0", "labels": ["B"]}
        ]}"#;
        assert!(from_json::<ArrowsDocument>(input).is_err());
    }
}
