use thiserror::Error;

use crate::parse::Dialect;

#[derive(Debug, Error)]
pub enum ParseError {
    /// `dialect` is `None` when the input failed before a dialect was known.
    #[error(
        "{}malformed input: {reason}",
        .dialect.as_ref().map(|d| format!("{d}: ")).unwrap_or_default()
    )]
    MalformedInput {
        dialect: Option<Dialect>,
        reason: String,
    },

    #[error("could not detect the schema dialect: {0}")]
    UnknownDialect(String),
}

impl ParseError {
    pub fn malformed(dialect: Dialect, reason: impl Into<String>) -> Self {
        ParseError::MalformedInput {
            dialect: Some(dialect),
            reason: reason.into(),
        }
    }

    /// Input that is not JSON at all, before any dialect applies.
    pub fn invalid_json(source: &serde_json::Error) -> Self {
        ParseError::MalformedInput {
            dialect: None,
            reason: format!("input is not valid JSON: {source}"),
        }
    }
}

/// A foreign property type with no target mapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unsupported property type '{type_name}'{}",
    .location.as_ref().map(|l| format!(" ({l})")).unwrap_or_default()
)]
pub struct UnsupportedTypeError {
    pub type_name: String,
    pub location: Option<String>,
}

impl UnsupportedTypeError {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            location: None,
        }
    }

    /// Attach the dialect and owning property so the fault can be found in the source document.
    pub fn at(mut self, dialect: Dialect, owner: &str, property: &str) -> Self {
        self.location = Some(format!("{dialect}: {owner}.{property}"));
        self
    }
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    #[error(
        "{dialect}: property '{property}' on '{owner}' is declared as {existing} and as {incoming}"
    )]
    TypeConflict {
        dialect: Dialect,
        owner: String,
        property: String,
        existing: String,
        incoming: String,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml_ng::Error,
    },
}
