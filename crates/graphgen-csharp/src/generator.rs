use graphgen_core::config::CSharpConfig;
use graphgen_core::ir::Schema;
use graphgen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::naming::is_valid_namespace;

/// Errors raised while rendering C# sources.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("invalid C# namespace: '{0}'")]
    InvalidNamespace(String),
}

/// C# class generator.
pub struct CSharpGenerator;

impl CodeGenerator for CSharpGenerator {
    type Config = CSharpConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        schema: &Schema,
        config: &CSharpConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        if !is_valid_namespace(&config.namespace) {
            return Err(GeneratorError::InvalidNamespace(config.namespace.clone()));
        }

        let files = vec![
            GeneratedFile {
                path: "Nodes.cs".to_string(),
                content: emitters::nodes::emit_nodes(schema, config)?,
            },
            GeneratedFile {
                path: "Relationships.cs".to_string(),
                content: emitters::relationships::emit_relationships(schema, config)?,
            },
            GeneratedFile {
                path: "RelationshipTypes.cs".to_string(),
                content: emitters::relationship_types::emit_relationship_types(schema, config)?,
            },
        ];
        log::debug!(
            "rendered {} C# files into namespace {}",
            files.len(),
            config.namespace
        );
        Ok(files)
    }
}
