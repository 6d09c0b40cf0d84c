//! JSON I/O handling for CLI
//!
//! - Input: one JSON document on stdin
//! - Output: one JSON object on stdout
//! - Logs never go to stdout

use std::io::{self, Read, Write};

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the whole of stdin as one JSON document
pub fn read_input<T: DeserializeOwned>() -> CliResult<T> {
    let mut text = String::new();
    io::stdin().lock().read_to_string(&mut text)?;
    parse_input(&text)
}

/// Parse one JSON document, rejecting blank input
pub fn parse_input<T: DeserializeOwned>(text: &str) -> CliResult<T> {
    if text.trim().is_empty() {
        return Err(CliError::input("Empty input"));
    }
    Ok(serde_json::from_str(text)?)
}

/// Success envelope
pub fn response(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

/// Error envelope
pub fn error_response(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_value(&response(data))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_value(&error_response(code, message))
}

fn write_value(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
