pub mod nodes;
pub mod relationship_types;
pub mod relationships;

use graphgen_core::config::PropertyCasing;
use graphgen_core::ir::{EndpointPair, PropertySet, Schema};
use minijinja::Environment;
use serde::Serialize;

use crate::naming::{UniqueNames, class_name, property_name, relationship_class_name};
use crate::type_mapper::property_to_csharp;

/// Name of the static class emitted into `RelationshipTypes.cs`.
pub(crate) const RELATIONSHIP_TYPES_CLASS: &str = "RelationshipTypes";

/// Template environment with every C# template registered.
pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("cs_literal", cs_literal);
    env.add_filter("xml_doc", xml_doc);
    env.add_template("nodes.cs.j2", include_str!("../../templates/nodes.cs.j2"))?;
    env.add_template(
        "relationships.cs.j2",
        include_str!("../../templates/relationships.cs.j2"),
    )?;
    env.add_template(
        "relationship_types.cs.j2",
        include_str!("../../templates/relationship_types.cs.j2"),
    )?;
    Ok(env)
}

/// Body of a C# regular string literal.
fn cs_literal(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Text inside a single `///` XML doc line.
fn xml_doc(value: String) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c if c.is_control() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Class names for every node and relationship, unique across the namespace.
pub(crate) struct ClassNames {
    pub nodes: Vec<String>,
    pub relationships: Vec<String>,
}

pub(crate) fn class_names(schema: &Schema) -> ClassNames {
    let mut scope = UniqueNames::with_reserved([RELATIONSHIP_TYPES_CLASS]);
    let nodes = schema
        .nodes()
        .values()
        .map(|n| scope.claim(class_name(n.label())))
        .collect();
    let relationships = schema
        .relationships()
        .values()
        .map(|r| scope.claim(relationship_class_name(r.rel_type())))
        .collect();
    ClassNames {
        nodes,
        relationships,
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct PropertyCtx {
    pub name: String,
    pub graph_name: String,
    pub type_name: String,
    /// The C# name differs from the graph name, so the serializer needs a mapping.
    pub attribute: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct EndpointCtx<'a> {
    pub source: &'a str,
    pub target: &'a str,
}

/// Property members of one class. `reserved` holds the member names the
/// class already uses, including its own name.
pub(crate) fn properties_ctx(
    properties: &PropertySet,
    casing: PropertyCasing,
    reserved: &[&str],
) -> Vec<PropertyCtx> {
    let mut scope = UniqueNames::with_reserved(reserved.iter().copied());
    properties
        .iter()
        .map(|p| {
            let name = scope.claim(property_name(&p.name, casing));
            PropertyCtx {
                attribute: name.trim_start_matches('@') != p.name,
                graph_name: p.name.clone(),
                type_name: property_to_csharp(p),
                name,
            }
        })
        .collect()
}

pub(crate) fn endpoints_ctx<'a>(
    endpoints: impl IntoIterator<Item = &'a EndpointPair>,
) -> Vec<EndpointCtx<'a>> {
    endpoints
        .into_iter()
        .map(|p| EndpointCtx {
            source: &p.source,
            target: &p.target,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cs_literal_escapes() {
        assert_eq!(cs_literal("ACTED_IN".to_string()), "ACTED_IN");
        assert_eq!(cs_literal(r#"say "hi""#.to_string()), r#"say \"hi\""#);
        assert_eq!(cs_literal(r"a\b".to_string()), r"a\\b");
        assert_eq!(cs_literal("a\nb".to_string()), r"a\nb");
        assert_eq!(cs_literal("\u{1}".to_string()), r"\u0001");
    }

    #[test]
    fn test_xml_doc_escapes() {
        assert_eq!(xml_doc("Person".to_string()), "Person");
        assert_eq!(xml_doc("A<B>&C".to_string()), "A&lt;B&gt;&amp;C");
        assert_eq!(xml_doc("two\nlines".to_string()), "two lines");
    }
}
