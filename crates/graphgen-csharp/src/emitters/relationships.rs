use graphgen_core::config::CSharpConfig;
use graphgen_core::ir::Schema;
use minijinja::context;
use serde::Serialize;

use super::{EndpointCtx, PropertyCtx, class_names, endpoints_ctx, environment, properties_ctx};

/// Member holding the graph type name on every relationship class.
const TYPE_CONST: &str = "Type";

#[derive(Debug, Serialize)]
struct RelationshipCtx<'a> {
    rel_type: &'a str,
    class_name: String,
    endpoints: Vec<EndpointCtx<'a>>,
    properties: Vec<PropertyCtx>,
}

/// Emit `Relationships.cs`: one class per normalized relationship type.
pub fn emit_relationships(
    schema: &Schema,
    config: &CSharpConfig,
) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let tmpl = env.get_template("relationships.cs.j2")?;

    let relationships: Vec<RelationshipCtx> = schema
        .relationships()
        .values()
        .zip(class_names(schema).relationships)
        .map(|(rel, class_name)| RelationshipCtx {
            rel_type: rel.rel_type(),
            endpoints: endpoints_ctx(rel.endpoints()),
            properties: properties_ctx(
                rel.properties(),
                schema.property_casing(),
                &[class_name.as_str(), TYPE_CONST],
            ),
            class_name,
        })
        .collect();
    let uses_json_attribute = relationships
        .iter()
        .any(|r| r.properties.iter().any(|p| p.attribute));

    tmpl.render(context! {
        dialect => schema.dialect().as_str(),
        namespace => &config.namespace,
        relationships => relationships,
        type_const => TYPE_CONST,
        uses_json_attribute => uses_json_attribute,
    })
}
