pub mod arrows;
pub mod capability;
pub mod cypher_workbench;
pub mod data_importer;

use std::fmt;

use serde::Deserialize;

use crate::error::ParseError;

pub use arrows::ArrowsDocument;
pub use capability::{GraphDocument, GraphNode, GraphProperty, GraphRelationship};
pub use cypher_workbench::CypherWorkbenchDocument;
pub use data_importer::DataImporterDocument;

/// One of the supported schema-export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dialect {
    CypherWorkbench,
    DataImporter,
    Arrows,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::CypherWorkbench => "CypherWorkbench",
            Dialect::DataImporter => "DataImporter",
            Dialect::Arrows => "Arrows",
        }
    }

    /// Guess the dialect of a raw document from its top-level shape.
    ///
    /// Input that is not JSON is malformed; JSON of an unrecognised shape is an unknown dialect.
    pub fn detect(input: &str) -> Result<Dialect, ParseError> {
        let value: serde_json::Value =
            serde_json::from_str(input).map_err(|e| ParseError::invalid_json(&e))?;

        let data_model = value.get("dataModel");
        if data_model.and_then(|m| m.get("nodeLabels")).is_some() {
            return Ok(Dialect::CypherWorkbench);
        }
        if data_model.and_then(|m| m.get("graphModel")).is_some() {
            return Ok(Dialect::DataImporter);
        }

        let graph = value.get("graph").unwrap_or(&value);
        if graph.get("nodes").is_some_and(|n| n.is_array()) {
            return Ok(Dialect::Arrows);
        }

        Err(ParseError::UnknownDialect(
            "expected `dataModel.nodeLabels`, `dataModel.graphModel` or a `nodes` array".to_string(),
        ))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory raised when a document reports a different format version than
/// its adapter was written against. Processing continues regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMismatchWarning {
    pub dialect: Dialect,
    pub expected: String,
    pub found: Option<String>,
}

impl fmt::Display for VersionMismatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: built against version {} but the document reports {}; double check the results",
            self.dialect,
            self.expected,
            self.found.as_deref().unwrap_or("no version"),
        )
    }
}

/// Decode a raw JSON document in dialect `D`.
///
/// A version mismatch is logged and otherwise ignored; it is also available
/// afterwards through [`GraphDocument::version_advisory`].
pub fn from_json<D: GraphDocument>(input: &str) -> Result<D, ParseError> {
    let document: D =
        serde_json::from_str(input).map_err(|e| ParseError::malformed(D::DIALECT, e.to_string()))?;
    if let Some(warning) = document.version_advisory() {
        log::warn!("{warning}");
    }
    Ok(document)
}

/// Compare dotted versions, treating missing trailing components as zero.
pub(crate) fn same_version(expected: &str, found: &str) -> bool {
    let parts = |v: &str| -> Option<Vec<u64>> {
        v.trim().split('.').map(|p| p.parse::<u64>().ok()).collect()
    };
    match (parts(expected), parts(found)) {
        (Some(mut a), Some(mut b)) => {
            let len = a.len().max(b.len());
            a.resize(len, 0);
            b.resize(len, 0);
            a == b
        }
        _ => expected.trim() == found.trim(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_cypher_workbench() {
        let input = r#"{"metadata": {"version": "1.3.0"}, "dataModel": {"nodeLabels": {}}}"#;
        assert_eq!(Dialect::detect(input).unwrap(), Dialect::CypherWorkbench);
    }

    #[test]
    fn test_detect_data_importer() {
        let input = r#"{"version": "0.7.0", "dataModel": {"graphModel": {}}}"#;
        assert_eq!(Dialect::detect(input).unwrap(), Dialect::DataImporter);
    }

    #[test]
    fn test_detect_arrows() {
        assert_eq!(
            Dialect::detect(r#"{"nodes": [], "relationships": []}"#).unwrap(),
            Dialect::Arrows
        );
        assert_eq!(
            Dialect::detect(r#"{"graph": {"nodes": []}, "diagramName": "x"}"#).unwrap(),
            Dialect::Arrows
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(matches!(
            Dialect::detect(r#"{"foo": 1}"#),
            Err(ParseError::UnknownDialect(_))
        ));
    }

    #[test]
    fn test_detect_invalid_json_is_malformed() {
        match Dialect::detect("{not json") {
            Err(ParseError::MalformedInput { dialect, reason }) => {
                assert_eq!(dialect, None);
                assert!(reason.starts_with("input is not valid JSON"), "{reason}");
            }
            other => panic!("expected malformed input, got {other:?}"),
        }
    }

    #[test]
    fn test_same_version() {
        assert!(same_version("1.3.0", "1.3.0"));
        assert!(same_version("1.3.0", "1.3"));
        assert!(!same_version("1.3.0", "1.4.0"));
        assert!(!same_version("0.7.0", "beta"));
    }

    #[test]
    fn test_dialect_from_config_name() {
        let dialect: Dialect = serde_yaml_ng::from_str("data-importer").unwrap();
        assert_eq!(dialect, Dialect::DataImporter);
    }
}
