use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::BoardError;
use crate::models::{NormalizedTask, RawRecord};
use crate::pipeline::normalize_all;

/// Path that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

fn read_source(path: &Path) -> Result<String, BoardError> {
    let display = path.display().to_string();
    if display == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| BoardError::load_failed("stdin", e))?;
        return Ok(buf);
    }
    if !path.exists() {
        return Err(BoardError::data_not_found(&display));
    }
    fs::read_to_string(path).map_err(|e| BoardError::load_failed(&display, e))
}

/// Parse a JSON document holding an array of records. Elements that are
/// not objects are skipped.
pub fn parse_records(content: &str) -> Result<Vec<RawRecord>, BoardError> {
    let document: Value = serde_json::from_str(content)?;
    let Value::Array(items) = document else {
        return Err(BoardError::parse_failed("expected a top-level array of records"));
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(fields) => records.push(RawRecord::new(fields)),
            other => warn!(index, kind = json_kind(&other), "skipping non-object record"),
        }
    }
    Ok(records)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, BoardError> {
    let content = read_source(path)?;
    let records = parse_records(&content)?;
    info!(path = %path.display(), count = records.len(), "loaded records");
    Ok(records)
}

/// Load and normalize every record, stamping defaults with `now`.
pub fn load_tasks(path: &Path, now: DateTime<Utc>) -> Result<Vec<NormalizedTask>, BoardError> {
    let records = load_records(path)?;
    Ok(normalize_all(&records, now))
}
