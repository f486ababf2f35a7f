use crate::error::UnsupportedTypeError;
use crate::ir::TypeTag;

/// Map a foreign primitive type name onto a [`TypeTag`].
///
/// Matching is case-insensitive. An `array` qualifier inside the name
/// (`StringArray`, `string array`, `array<string>`) or a `[]` suffix sets the
/// array flag on top of `is_array`; it never changes the base type.
pub fn map_type(foreign: &str, is_array: bool) -> Result<(TypeTag, bool), UnsupportedTypeError> {
    let lowered = foreign.trim().to_lowercase();
    let qualified = lowered.contains("array") || lowered.ends_with("[]");
    let stripped = lowered.replace("array", "");
    let base = stripped.trim_matches(|c: char| !c.is_ascii_alphanumeric());

    let tag = match base {
        "string" => TypeTag::String,
        "integer" => TypeTag::Integer,
        "float" => TypeTag::Float,
        "boolean" => TypeTag::Boolean,
        "date" => TypeTag::Date,
        "datetime" => TypeTag::DateTime,
        _ => return Err(UnsupportedTypeError::new(foreign)),
    };

    Ok((tag, is_array || qualified))
}
