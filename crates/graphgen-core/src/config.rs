use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::parse::Dialect;
use crate::transform::AssembleOptions;

/// Top-level project configuration loaded from `.graphgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphgenConfig {
    pub input: String,
    /// Input dialect; detected from the document when absent.
    pub dialect: Option<Dialect>,
    pub output: String,
    pub naming: NamingConfig,
    pub merge: MergeConfig,
    pub csharp: CSharpConfig,
}

impl Default for GraphgenConfig {
    fn default() -> Self {
        Self {
            input: "schema.json".to_string(),
            dialect: None,
            output: "Generated".to_string(),
            naming: NamingConfig::default(),
            merge: MergeConfig::default(),
            csharp: CSharpConfig::default(),
        }
    }
}

impl GraphgenConfig {
    pub fn assemble_options(&self) -> AssembleOptions {
        AssembleOptions {
            property_casing: self.naming.property_casing,
            on_type_conflict: self.merge.on_type_conflict,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub property_casing: PropertyCasing,
}

/// How generated property names are cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCasing {
    /// Keep the name exactly as modeled.
    #[default]
    AsIs,
    /// `UpperCamelCase`, keeping the graph name in a serializer attribute.
    UpperCamel,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    pub on_type_conflict: ConflictPolicy,
}

/// What to do when merged entries declare the same property with different types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    /// The entry merged last replaces the earlier one; a warning is logged.
    #[default]
    LastWriteWins,
    /// Abort the run with a type conflict error.
    Error,
}

/// Options for the C# renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CSharpConfig {
    pub namespace: String,
}

impl Default for CSharpConfig {
    fn default() -> Self {
        Self {
            namespace: "GraphModel".to_string(),
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".graphgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<GraphgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let config: GraphgenConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# graphgen configuration
input: schema.json
# dialect: cypher-workbench   # cypher-workbench | data-importer | arrows (detected when omitted)
output: Generated

naming:
  property_casing: as_is      # as_is | upper_camel

merge:
  on_type_conflict: last_write_wins   # last_write_wins | error

csharp:
  namespace: GraphModel
"#
}
