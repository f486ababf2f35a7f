use graphgen_core::config::CSharpConfig;
use graphgen_core::ir::Schema;
use minijinja::context;
use serde::Serialize;

use super::{PropertyCtx, class_names, environment, properties_ctx};

#[derive(Debug, Serialize)]
struct NodeCtx<'a> {
    label: &'a str,
    class_name: String,
    properties: Vec<PropertyCtx>,
}

/// Emit `Nodes.cs`: one class per normalized node.
pub fn emit_nodes(schema: &Schema, config: &CSharpConfig) -> Result<String, minijinja::Error> {
    let env = environment()?;
    let tmpl = env.get_template("nodes.cs.j2")?;

    let nodes: Vec<NodeCtx> = schema
        .nodes()
        .values()
        .zip(class_names(schema).nodes)
        .map(|(node, class_name)| NodeCtx {
            label: node.label(),
            properties: properties_ctx(
                node.properties(),
                schema.property_casing(),
                &[class_name.as_str()],
            ),
            class_name,
        })
        .collect();
    let uses_json_attribute = nodes
        .iter()
        .any(|n| n.properties.iter().any(|p| p.attribute));

    tmpl.render(context! {
        dialect => schema.dialect().as_str(),
        namespace => &config.namespace,
        nodes => nodes,
        uses_json_attribute => uses_json_attribute,
    })
}
