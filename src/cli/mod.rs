//! CLI module for bqs-adapter
//!
//! Provides command-line interface for:
//! - compile: BQS syntax tree → filter tree
//! - encode: catalog record → record graph
//! - decode: record graph → catalog record
//! - attributes: attribute descriptors of an entity or a view

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    attributes_json, compile_json, decode_json, encode_json, load_config, run, run_command,
    run_on_text,
};
pub use errors::{CliError, CliResult};
pub use io::{error_response, parse_input, read_input, response, write_error, write_response};
