use std::collections::HashSet;

use graphgen_core::config::PropertyCasing;
use heck::ToUpperCamelCase;

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// PascalCase class name for a node label or relationship type.
pub fn class_name(name: &str) -> String {
    identifier(name.to_upper_camel_case())
}

/// Class name for a relationship type, e.g. `ACTED_IN` -> `ActedInRelationship`.
pub fn relationship_class_name(rel_type: &str) -> String {
    format!("{}Relationship", class_name(rel_type).trim_start_matches('@'))
}

/// Property name under the requested casing convention.
pub fn property_name(name: &str, casing: PropertyCasing) -> String {
    match casing {
        PropertyCasing::AsIs => identifier(sanitize(name)),
        PropertyCasing::UpperCamel => identifier(name.to_upper_camel_case()),
    }
}

/// True when `name` is a valid C# namespace (dot-separated identifiers).
pub fn is_valid_namespace(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
                && chars.all(|c| c.is_alphanumeric() || c == '_')
                && !KEYWORDS.contains(&segment)
        })
}

/// Identifiers already handed out within one C# scope.
///
/// `@class` and `class` name the same member, so names are compared without
/// the verbatim prefix.
#[derive(Debug, Default)]
pub struct UniqueNames {
    taken: HashSet<String>,
}

impl UniqueNames {
    pub fn with_reserved<'a>(reserved: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            taken: reserved
                .into_iter()
                .map(|name| name.trim_start_matches('@').to_string())
                .collect(),
        }
    }

    /// Claim `name`, or the first free `name2`, `name3`, ... when it is taken.
    pub fn claim(&mut self, name: String) -> String {
        let stem = name.trim_start_matches('@').to_string();
        if self.taken.insert(stem.clone()) {
            return name;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{stem}{suffix}");
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}

/// Replace characters that cannot appear in an identifier with `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn identifier(mut name: String) -> String {
    if name.is_empty() {
        return "Unnamed".to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if KEYWORDS.contains(&name.as_str()) {
        name.insert(0, '@');
    }
    name
}
