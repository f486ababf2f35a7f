use graphgen_core::ir::{Property, TypeTag};

/// Map a `TypeTag` to its C# type name.
pub fn type_tag_to_csharp(tag: TypeTag) -> &'static str {
    match tag {
        TypeTag::String => "string",
        TypeTag::Integer => "int",
        TypeTag::Float => "float",
        TypeTag::Boolean => "bool",
        TypeTag::Date | TypeTag::DateTime => "DateTime",
    }
}

/// Map a normalized property to its C# type, e.g. `string[]`.
pub fn property_to_csharp(property: &Property) -> String {
    let base = type_tag_to_csharp(property.type_tag);
    if property.is_array {
        format!("{base}[]")
    } else {
        base.to_string()
    }
}
