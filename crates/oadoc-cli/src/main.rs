use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::Serialize;

use oadoc_core::config::{self, CONFIG_FILE_NAME, OadocConfig, OutputFormat};
use oadoc_core::index::{build_tag_index, tag_names};
use oadoc_core::link::{endpoint_href, split_route};
use oadoc_core::parse::media_type::format_example;
use oadoc_core::parse::parameter::ParameterOrRef;
use oadoc_core::parse::response::ResponseOrRef;
use oadoc_core::parse::{self, spec::OpenApiDocument};
use oadoc_core::resolve::{self, ResolvedOperation};
use oadoc_core::search;

#[derive(Parser)]
#[command(name = "oadoc", about = "Browse OpenAPI 3.x documents", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an OpenAPI document
    Validate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Find the operation documented for a request path
    Resolve {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "get")]
        method: String,

        /// Treat the last path segment as the method
        #[arg(long)]
        route: bool,

        /// Request path, percent-encoded, e.g. /pets/42
        path: String,

        #[arg(long)]
        format: Option<Format>,
    },

    /// List operations grouped by tag
    Tags {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Include tags without operations
        #[arg(long)]
        all: bool,

        #[arg(long)]
        format: Option<Format>,
    },

    /// Search operations by path, method, summary, description or tag
    Search {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        query: String,

        #[arg(long)]
        format: Option<Format>,
    },

    /// List the servers of a document
    Servers {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(long)]
        format: Option<Format>,
    },

    /// Initialize a new oadoc configuration
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
enum Format {
    Text,
    Json,
    Yaml,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Format::Text,
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let cfg = try_load_config()?.unwrap_or_default();

    match cli.command {
        Commands::Validate { input } => cmd_validate(&cfg, input),

        Commands::Resolve {
            input,
            method,
            route,
            path,
            format,
        } => cmd_resolve(&cfg, input, &method, route, &path, format),

        Commands::Tags { input, all, format } => cmd_tags(&cfg, input, all, format),

        Commands::Search {
            input,
            query,
            format,
        } => cmd_search(&cfg, input, &query, format),

        Commands::Servers { input, format } => cmd_servers(&cfg, input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "oadoc", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OadocConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

fn input_path(cfg: &OadocConfig, input: Option<PathBuf>) -> PathBuf {
    input.unwrap_or_else(|| PathBuf::from(&cfg.input))
}

fn output_format(cfg: &OadocConfig, format: Option<Format>) -> Format {
    format.unwrap_or_else(|| cfg.format.into())
}

fn load_document(path: &Path) -> Result<OpenApiDocument> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let file_name = path.file_name().and_then(|n| n.to_str());
    let doc = parse::from_source(&content, file_name)
        .with_context(|| format!("{} is not a usable OpenAPI document", path.display()))?;
    log::debug!(
        "loaded {} ({} paths, {} operations)",
        path.display(),
        doc.paths.len(),
        doc.operation_count()
    );
    Ok(doc)
}

/// Render a serializable value as JSON or YAML. `None` for text output, which
/// callers render themselves.
fn render_structured<T: Serialize>(value: &T, format: Format) -> Result<Option<String>> {
    match format {
        Format::Text => Ok(None),
        Format::Json => Ok(Some(format!("{}\n", serde_json::to_string_pretty(value)?))),
        Format::Yaml => Ok(Some(serde_yaml_ng::to_string(value)?)),
    }
}

/// Print a value through [`render_structured`]. Returns `false` for text output.
fn print_structured<T: Serialize>(value: &T, format: Format) -> Result<bool> {
    match render_structured(value, format)? {
        Some(out) => {
            print!("{out}");
            Ok(true)
        }
        None => Ok(false),
    }
}

fn cmd_validate(cfg: &OadocConfig, input: Option<PathBuf>) -> Result<()> {
    let path = input_path(cfg, input);
    let doc = load_document(&path)?;

    eprintln!("Valid OpenAPI {} document: {}", doc.openapi, doc.info.title);
    eprintln!("  Version: {}", doc.info.version);
    eprintln!("  Paths: {}", doc.paths.len());
    eprintln!("  Operations: {}", doc.operation_count());
    eprintln!("  Servers: {}", doc.servers.len());
    eprintln!("  Tags: {}", tag_names(&doc).join(", "));

    if let Some(ref components) = doc.components {
        eprintln!("  Schemas: {}", components.schemas.len());
        for (name, scheme) in components.security_schemes() {
            eprintln!("  Security: {} ({})", name, scheme.summary());
        }
    }

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_resolve(
    cfg: &OadocConfig,
    input: Option<PathBuf>,
    method: &str,
    route: bool,
    request_path: &str,
    format: Option<Format>,
) -> Result<()> {
    let path = input_path(cfg, input);
    let doc = load_document(&path)?;
    let segments = split_route(request_path);

    let resolved = if route {
        resolve::resolve_route(&doc, &segments)
    } else {
        resolve::resolve_encoded(&doc, &segments, method)
    }
    .with_context(|| format!("cannot resolve {request_path}"))?;

    if !print_structured(&resolved, output_format(cfg, format))? {
        print_resolved(&resolved);
    }
    Ok(())
}

fn print_resolved(resolved: &ResolvedOperation<'_>) {
    let op = resolved.operation;
    println!("{} {}", resolved.method.label(), resolved.template_path);
    if let Some(ref id) = op.operation_id {
        println!("  operationId: {id}");
    }
    if let Some(ref summary) = op.summary {
        println!("  summary: {summary}");
    }
    if op.is_deprecated() {
        println!("  deprecated");
    }
    for (name, value) in &resolved.path_params {
        println!("  {name} = {value}");
    }

    let parameters = resolved.parameters();
    if !parameters.is_empty() {
        println!("  parameters:");
        for param in parameters {
            match param {
                ParameterOrRef::Parameter(p) => {
                    let required = if p.is_required() { " (required)" } else { "" };
                    println!("    {} in {}{}", p.name, p.location.as_str(), required);
                }
                ParameterOrRef::Ref { ref_path } => println!("    -> {ref_path}"),
            }
        }
    }

    if !op.responses.is_empty() {
        println!("  responses:");
        for (status, response) in &op.responses {
            match response {
                ResponseOrRef::Response(r) => {
                    println!("    {status}: {}", r.description);
                    for (media_type, media) in &r.content {
                        println!("      {media_type}");
                        if let Some(ref example) = media.example {
                            for line in format_example(example).lines() {
                                println!("        {line}");
                            }
                        }
                    }
                }
                ResponseOrRef::Ref { ref_path } => println!("    {status}: -> {ref_path}"),
            }
        }
    }
}

fn cmd_tags(cfg: &OadocConfig, input: Option<PathBuf>, all: bool, format: Option<Format>) -> Result<()> {
    let path = input_path(cfg, input);
    let doc = load_document(&path)?;
    let index = build_tag_index(&doc);

    if print_structured(&index, output_format(cfg, format))? {
        return Ok(());
    }

    let show_empty = all || cfg.show_empty_tags;
    for (tag, entries) in index.iter() {
        if entries.is_empty() && !show_empty {
            continue;
        }
        let description = doc
            .tags
            .iter()
            .find(|t| t.name == tag)
            .and_then(|t| t.description.as_deref());
        match description {
            Some(description) => println!("{tag}: {description}"),
            None => println!("{tag}"),
        }
        for entry in entries {
            let title = entry.operation.summary.as_deref().unwrap_or(entry.path);
            println!(
                "  {:<7} {}  {}",
                entry.method.label(),
                title,
                endpoint_href(&cfg.link_prefix, entry.path, entry.method)
            );
        }
    }
    Ok(())
}

fn cmd_search(cfg: &OadocConfig, input: Option<PathBuf>, query: &str, format: Option<Format>) -> Result<()> {
    let path = input_path(cfg, input);
    let doc = load_document(&path)?;
    let index = build_tag_index(&doc);
    let hits = search::search(&index, query);

    if print_structured(&hits, output_format(cfg, format))? {
        return Ok(());
    }

    if hits.is_empty() {
        eprintln!("No operations match \"{query}\".");
        return Ok(());
    }
    for hit in &hits {
        let entry = hit.entry;
        println!(
            "{:<7} {}  [{}] {}",
            entry.method.label(),
            entry.path,
            hit.tag,
            entry.operation.summary.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn cmd_servers(cfg: &OadocConfig, input: Option<PathBuf>, format: Option<Format>) -> Result<()> {
    let path = input_path(cfg, input);
    let doc = load_document(&path)?;

    if print_structured(&doc.servers, output_format(cfg, format))? {
        return Ok(());
    }

    if doc.servers.is_empty() {
        eprintln!("No servers defined in the OpenAPI document.");
        return Ok(());
    }
    for (i, server) in doc.servers.iter().enumerate() {
        println!("Server {}: {}", i + 1, server.url);
        if let Some(ref description) = server.description {
            println!("  {description}");
        }
        for (name, variable) in &server.variables {
            let choices = if variable.enum_values.is_empty() {
                String::new()
            } else {
                format!(" [{}]", variable.enum_values.join(", "))
            };
            println!("  {{{name}}} = {}{choices}", variable.default);
        }
    }
    Ok(())
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
