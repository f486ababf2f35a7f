use std::fmt;

use indexmap::IndexMap;

/// Target-independent primitive type of a normalized property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    DateTime,
}

impl TypeTag {
    pub const ALL: [TypeTag; 6] = [
        TypeTag::String,
        TypeTag::Integer,
        TypeTag::Float,
        TypeTag::Boolean,
        TypeTag::Date,
        TypeTag::DateTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::String => "String",
            TypeTag::Integer => "Integer",
            TypeTag::Float => "Float",
            TypeTag::Boolean => "Boolean",
            TypeTag::Date => "Date",
            TypeTag::DateTime => "DateTime",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub name: String,
    pub type_tag: TypeTag,
    pub is_array: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, type_tag: TypeTag, is_array: bool) -> Self {
        Self {
            name: name.into(),
            type_tag,
            is_array,
        }
    }

    pub fn same_type(&self, other: &Property) -> bool {
        self.type_tag == other.type_tag && self.is_array == other.is_array
    }

    /// `Integer` or `Integer[]`.
    pub fn type_display(&self) -> String {
        if self.is_array {
            format!("{}[]", self.type_tag)
        } else {
            self.type_tag.to_string()
        }
    }
}

/// Properties unique by case-insensitive name, in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    entries: IndexMap<String, Property>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Property> {
        self.entries.get(&name.to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_lowercase())
    }

    /// Insert `property`, replacing any entry with the same name. The replaced
    /// entry is returned; the set keeps the original position.
    pub fn insert(&mut self, property: Property) -> Option<Property> {
        self.entries.insert(property.name.to_lowercase(), property)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Property;
    type IntoIter = indexmap::map::Values<'a, String, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl FromIterator<Property> for PropertySet {
    fn from_iter<I: IntoIterator<Item = Property>>(iter: I) -> Self {
        let mut set = PropertySet::new();
        for property in iter {
            set.insert(property);
        }
        set
    }
}
