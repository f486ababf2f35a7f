use graphgen_core::config::CSharpConfig;
use graphgen_core::ir::Schema;
use minijinja::context;
use serde::Serialize;

use super::{EndpointCtx, RELATIONSHIP_TYPES_CLASS, endpoints_ctx, environment};
use crate::naming::{UniqueNames, class_name};

/// Dictionary member listing the endpoint pairs of every type.
const ENDPOINTS_FIELD: &str = "Endpoints";

#[derive(Debug, Serialize)]
struct RelationshipTypeCtx<'a> {
    rel_type: &'a str,
    const_name: String,
    endpoints: Vec<EndpointCtx<'a>>,
}

/// Emit `RelationshipTypes.cs`: type-name constants plus the endpoint pairs of each type.
pub fn emit_relationship_types(
    schema: &Schema,
    config: &CSharpConfig,
) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let tmpl = env.get_template("relationship_types.cs.j2")?;

    let mut members = UniqueNames::with_reserved([RELATIONSHIP_TYPES_CLASS, ENDPOINTS_FIELD]);
    let relationships: Vec<RelationshipTypeCtx> = schema
        .relationships()
        .values()
        .map(|rel| RelationshipTypeCtx {
            rel_type: rel.rel_type(),
            const_name: members.claim(class_name(rel.rel_type())),
            endpoints: endpoints_ctx(rel.endpoints()),
        })
        .collect();

    tmpl.render(context! {
        dialect => schema.dialect().as_str(),
        namespace => &config.namespace,
        class_name => RELATIONSHIP_TYPES_CLASS,
        endpoints_field => ENDPOINTS_FIELD,
        relationships => relationships,
    })
}
