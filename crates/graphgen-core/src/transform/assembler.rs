use crate::config::{ConflictPolicy, PropertyCasing};
use crate::error::TransformError;
use crate::ir::Schema;
use crate::parse::{
    self, ArrowsDocument, CypherWorkbenchDocument, DataImporterDocument, Dialect, GraphDocument,
};

use super::node_normalizer::normalize_nodes;
use super::relationship_normalizer::normalize_relationships;

/// Options threaded through assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssembleOptions {
    /// Recorded on the schema for renderers; the merge passes ignore it.
    pub property_casing: PropertyCasing,
    pub on_type_conflict: ConflictPolicy,
}

/// Assemble a decoded document into a finalized schema with default options.
pub fn assemble<D: GraphDocument>(document: &D) -> Result<Schema, TransformError> {
    assemble_with_options(document, &AssembleOptions::default())
}

/// Assemble with explicit options.
pub fn assemble_with_options<D: GraphDocument>(
    document: &D,
    options: &AssembleOptions,
) -> Result<Schema, TransformError> {
    // Phase 1: merge nodes by label
    let nodes = normalize_nodes(document.nodes(), D::DIALECT, options.on_type_conflict)?;

    // Phase 2: merge relationships; endpoints need the finished node keys
    let relationships = normalize_relationships(
        document.relationships(),
        &nodes,
        D::DIALECT,
        options.on_type_conflict,
    )?;

    let warnings = document.version_advisory().into_iter().collect();

    log::info!(
        "{}: assembled {} nodes and {} relationships from {} raw nodes and {} raw relationships",
        D::DIALECT,
        nodes.len(),
        relationships.len(),
        document.nodes().len(),
        document.relationships().len(),
    );

    Ok(Schema::new(
        D::DIALECT,
        nodes,
        relationships,
        options.property_casing,
        warnings,
    ))
}

/// Decode `input` as `dialect` and assemble it in one step.
pub fn load(
    dialect: Dialect,
    input: &str,
    options: &AssembleOptions,
) -> Result<Schema, TransformError> {
    match dialect {
        Dialect::CypherWorkbench => {
            let document: CypherWorkbenchDocument = parse::from_json(input)?;
            assemble_with_options(&document, options)
        }
        Dialect::DataImporter => {
            let document: DataImporterDocument = parse::from_json(input)?;
            assemble_with_options(&document, options)
        }
        Dialect::Arrows => {
            let document: ArrowsDocument = parse::from_json(input)?;
            assemble_with_options(&document, options)
        }
    }
}

/// Like [`load`], detecting the dialect from the document first.
pub fn load_detected(input: &str, options: &AssembleOptions) -> Result<Schema, TransformError> {
    let dialect = Dialect::detect(input)?;
    log::debug!("detected {dialect} input");
    load(dialect, input, options)
}
