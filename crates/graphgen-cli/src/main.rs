use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use graphgen_core::config::{self, CONFIG_FILE_NAME, GraphgenConfig, PropertyCasing};
use graphgen_core::ir::Schema;
use graphgen_core::parse::Dialect;
use graphgen_core::transform;
use graphgen_core::{CodeGenerator, GeneratedFile};
use graphgen_csharp::CSharpGenerator;

#[derive(Parser)]
#[command(
    name = "graphgen",
    about = "Graph schema normalizer and C# class generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate C# classes from a graph schema export
    Generate {
        /// Path to the schema export (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Input dialect; detected from the document when omitted
        #[arg(short, long)]
        dialect: Option<DialectArg>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// C# namespace for the generated classes
        #[arg(long)]
        namespace: Option<String>,

        /// Emit UpperCamelCase property names
        #[arg(long)]
        upper_camel_case: bool,
    },

    /// Validate a graph schema export
    Validate {
        /// Path to the schema export
        #[arg(short, long)]
        input: PathBuf,

        /// Input dialect; detected from the document when omitted
        #[arg(short, long)]
        dialect: Option<DialectArg>,
    },

    /// Inspect the normalized schema of an export
    Inspect {
        /// Path to the schema export
        #[arg(short, long)]
        input: PathBuf,

        /// Input dialect; detected from the document when omitted
        #[arg(short, long)]
        dialect: Option<DialectArg>,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new graphgen configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    CypherWorkbench,
    DataImporter,
    Arrows,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::CypherWorkbench => Dialect::CypherWorkbench,
            DialectArg::DataImporter => Dialect::DataImporter,
            DialectArg::Arrows => Dialect::Arrows,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            dialect,
            output,
            namespace,
            upper_camel_case,
        } => {
            let mut cfg = try_load_config()?.unwrap_or_default();
            if let Some(dialect) = dialect {
                cfg.dialect = Some(dialect.into());
            }
            if let Some(output) = output {
                cfg.output = output.display().to_string();
            }
            if let Some(namespace) = namespace {
                cfg.csharp.namespace = namespace;
            }
            if upper_camel_case {
                cfg.naming.property_casing = PropertyCasing::UpperCamel;
            }
            let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
            cmd_generate(&input, &cfg)
        }

        Commands::Validate { input, dialect } => {
            let cfg = try_load_config()?.unwrap_or_default();
            cmd_validate(&input, dialect, &cfg)
        }

        Commands::Inspect {
            input,
            dialect,
            format,
        } => {
            let cfg = try_load_config()?.unwrap_or_default();
            cmd_inspect(&input, dialect, format, &cfg)
        }

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "graphgen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<GraphgenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Read and assemble a schema export, printing any version advisories.
fn load_schema(path: &Path, dialect: Option<Dialect>, cfg: &GraphgenConfig) -> Result<Schema> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let options = cfg.assemble_options();
    let schema = match dialect {
        Some(dialect) => transform::load(dialect, &content, &options),
        None => transform::load_detected(&content, &options),
    }
    .with_context(|| format!("failed to assemble {}", path.display()))?;

    for warning in schema.warnings() {
        eprintln!("  warning: {warning}");
    }
    Ok(schema)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(input: &Path, cfg: &GraphgenConfig) -> Result<()> {
    let schema = load_schema(input, cfg.dialect, cfg)?;

    let output_dir = PathBuf::from(&cfg.output);
    eprintln!("Generating C# ({}) → {}", cfg.csharp.namespace, output_dir.display());
    let files = CSharpGenerator
        .generate(&schema, &cfg.csharp)
        .context("failed to render C# sources")?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;
    write_files(&output_dir, &files)?;

    eprintln!("Generated {} files in {}", files.len(), output_dir.display());
    Ok(())
}

fn cmd_validate(input: &Path, dialect: Option<DialectArg>, cfg: &GraphgenConfig) -> Result<()> {
    let dialect = dialect.map(Dialect::from).or(cfg.dialect);
    let schema = load_schema(input, dialect, cfg)?;

    let pairs: usize = schema
        .relationships()
        .values()
        .map(|r| r.endpoints().len())
        .sum();
    eprintln!("Valid {} schema: {}", schema.dialect(), input.display());
    eprintln!("  Nodes: {}", schema.nodes().len());
    eprintln!("  Relationships: {}", schema.relationships().len());
    eprintln!("  Endpoint pairs: {pairs}");
    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(
    input: &Path,
    dialect: Option<DialectArg>,
    format: InspectFormat,
    cfg: &GraphgenConfig,
) -> Result<()> {
    let dialect = dialect.map(Dialect::from).or(cfg.dialect);
    let schema = load_schema(input, dialect, cfg)?;

    let summary = build_inspect_summary(&schema);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(schema: &Schema) -> serde_json::Value {
    let properties = |set: &graphgen_core::ir::PropertySet| -> Vec<serde_json::Value> {
        set.iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "type": p.type_display(),
                })
            })
            .collect()
    };

    let nodes: Vec<serde_json::Value> = schema
        .nodes()
        .values()
        .map(|n| {
            serde_json::json!({
                "label": n.label(),
                "source_keys": n.source_keys(),
                "properties": properties(n.properties()),
            })
        })
        .collect();

    let relationships: Vec<serde_json::Value> = schema
        .relationships()
        .values()
        .map(|r| {
            let endpoints: Vec<String> = r
                .endpoints()
                .iter()
                .map(|p| format!("({})->({})", p.source, p.target))
                .collect();
            serde_json::json!({
                "type": r.rel_type(),
                "endpoints": endpoints,
                "properties": properties(r.properties()),
            })
        })
        .collect();

    serde_json::json!({
        "dialect": schema.dialect().as_str(),
        "warnings": schema.warnings().iter().map(ToString::to_string).collect::<Vec<_>>(),
        "nodes": nodes,
        "relationships": relationships,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
