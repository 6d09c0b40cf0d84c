//! CLI command implementations
//!
//! Each command loads the configuration, reads one JSON document from stdin
//! and writes one JSON envelope to stdout. The `*_json` functions hold the
//! command logic and work on in-memory input.

use std::path::Path;

use serde_json::{json, Value};

use crate::config::AdapterConfig;
use crate::convert::RecordConverter;
use crate::dag::Dag;
use crate::query::{QueryCompiler, SyntaxNode};
use crate::record::CatalogRecord;
use crate::schema::{SchemaGraph, ALL_VIEW};

use super::args::{Cli, Command};
use super::errors::CliResult;
use super::io::{parse_input, read_input, write_error, write_response};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a command, reporting any failure as an error envelope
pub fn run_command(cmd: Command) -> CliResult<()> {
    match execute(cmd) {
        Ok(data) => write_response(data),
        Err(e) => {
            write_error(e.code(), &e.to_string())?;
            Err(e)
        }
    }
}

fn execute(cmd: Command) -> CliResult<Value> {
    let config = load_config(cmd.config_path().map(|p| p.as_path()))?;
    config.apply_logging();

    match cmd {
        Command::Compile { .. } => compile_json(&config, read_input()?),
        Command::Encode { .. } => encode_json(&config, read_input()?),
        Command::Decode { .. } => decode_json(&config, read_input()?),
        Command::Attributes { entity, view, .. } => {
            attributes_json(entity.as_deref(), view.as_deref())
        }
    }
}

/// Configuration from `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> CliResult<AdapterConfig> {
    match path {
        Some(path) => Ok(AdapterConfig::load(path)?),
        None => Ok(AdapterConfig::default()),
    }
}

/// Syntax tree → `{"filter": .., "text": ..}`; both null when every term
/// was dropped
pub fn compile_json(config: &AdapterConfig, tree: SyntaxNode) -> CliResult<Value> {
    let compiler = QueryCompiler::from_config(config);
    let filter = compiler.compile(&tree)?;
    Ok(json!({
        "filter": serde_json::to_value(&filter)?,
        "text": filter.as_ref().map(|f| f.to_string()),
    }))
}

/// Catalog record → record graph
pub fn encode_json(config: &AdapterConfig, record: CatalogRecord) -> CliResult<Value> {
    let converter = RecordConverter::from_config(config);
    let dag = converter.encode(&record)?;
    Ok(serde_json::to_value(&dag)?)
}

/// Record graph → catalog record
pub fn decode_json(config: &AdapterConfig, dag: Dag) -> CliResult<Value> {
    let converter = RecordConverter::from_config(config);
    let record = converter.decode(&dag)?;
    Ok(serde_json::to_value(&record)?)
}

/// Attribute descriptors of an entity, or of a view (default: all-entity
/// view). Unknown names give an empty list.
pub fn attributes_json(entity: Option<&str>, view: Option<&str>) -> CliResult<Value> {
    let schema = SchemaGraph::shared()?;

    if let Some(entity) = entity {
        return Ok(json!({
            "entity": entity,
            "attributes": serde_json::to_value(schema.attributes_of(entity))?,
        }));
    }

    let view = view.unwrap_or(ALL_VIEW);
    let entities = schema
        .view_graph(view)
        .map(|graph| graph.entities().iter().map(|e| e.as_str()).collect::<Vec<_>>());
    Ok(json!({
        "view": view,
        "entities": entities,
        "attributes": serde_json::to_value(schema.attributes_for_view(view))?,
    }))
}

/// Parse-and-run helpers used by tests and embedding callers
pub fn run_on_text(cmd: &Command, input: &str) -> CliResult<Value> {
    let config = load_config(cmd.config_path().map(|p| p.as_path()))?;
    match cmd {
        Command::Compile { .. } => compile_json(&config, parse_input(input)?),
        Command::Encode { .. } => encode_json(&config, parse_input(input)?),
        Command::Decode { .. } => decode_json(&config, parse_input(input)?),
        Command::Attributes { entity, view, .. } => {
            attributes_json(entity.as_deref(), view.as_deref())
        }
    }
}
