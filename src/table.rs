//! Reading tabular inputs (CSV, JSON, NDJSON, optionally gzipped) into string rows.
//!
//! All sources end up as a header list plus rows of header -> cell, with cells
//! trimmed. Typed views are built on top of this by the catalogue, price table
//! and inventory adapters.

use crate::error::Result;
use flate2::read::GzDecoder;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Container keys under which JSON exports keep their row arrays
const JSON_CONTAINER_KEYS: &[&str] = &[
    "data",
    "products",
    "prices",
    "priceGuides",
    "priceGuide",
    "price_guide",
    "result",
    "results",
];

const CANDIDATE_DELIMITERS: &[u8] = b",;\t|";

pub type Row = HashMap<String, String>;

/// A loaded input table
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
    /// Field delimiter of the source CSV (comma for JSON sources)
    pub delimiter: u8,
}

impl Table {
    /// Build a table from header names and row cells (mostly for tests)
    pub fn from_rows(headers: &[&str], rows: &[&[&str]]) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let rows = rows
            .iter()
            .map(|cells| {
                headers
                    .iter()
                    .cloned()
                    .zip(cells.iter().map(|c| c.to_string()))
                    .collect()
            })
            .collect();
        Self {
            headers,
            rows,
            delimiter: b',',
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a table, choosing the format from the file extension. A trailing
/// `.gz` is decompressed and ignored for format detection.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let lower = path.to_string_lossy().to_lowercase();
    let lower = lower.strip_suffix(".gz").unwrap_or(&lower);

    log::info!("Reading {}", path.display());
    let content = read_text(path)?;
    let table = if lower.ends_with(".json") {
        parse_json(&content)
    } else {
        parse_csv(&content)?
    };
    log::info!(
        "Read {} rows with {} columns from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Read a whole text file, gunzipping `.gz` paths. Invalid UTF-8 is replaced
/// with U+FFFD instead of failing the read.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let raw = std::fs::read(path)?;
    let is_gzip = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));

    let bytes = if is_gzip {
        let mut decoded = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut decoded)?;
        decoded
    } else {
        raw
    };

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "{} is not valid UTF-8, replacing undecodable bytes",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}

/// Pick the delimiter occurring most often in the header line, comma on ties.
pub fn sniff_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or("");
    let mut best = (b',', 0);
    for &candidate in CANDIDATE_DELIMITERS {
        let count = first_line.bytes().filter(|&b| b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

pub fn parse_csv(content: &str) -> Result<Table> {
    let delimiter = sniff_delimiter(content);
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
            .collect();
        rows.push(row);
    }

    Ok(Table {
        headers,
        rows,
        delimiter,
    })
}

/// Parse a JSON document, falling back to JSON Lines when it is not one.
pub fn parse_json(content: &str) -> Table {
    let objects = match serde_json::from_str::<Value>(content) {
        Ok(value) => json_rows(value),
        Err(_) => {
            log::debug!("Input is not a single JSON document, reading as JSON Lines");
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .filter_map(|line| serde_json::from_str::<Value>(line).ok())
                .filter(Value::is_object)
                .collect()
        }
    };

    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(objects.len());
    for object in objects {
        let Value::Object(map) = object else {
            continue;
        };
        let mut row = Row::with_capacity(map.len());
        for (key, value) in map {
            let key = key.trim().to_string();
            if !headers.contains(&key) {
                headers.push(key.clone());
            }
            row.insert(key, cell_text(&value));
        }
        rows.push(row);
    }

    Table {
        headers,
        rows,
        delimiter: b',',
    }
}

fn json_rows(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => {
            for key in JSON_CONTAINER_KEYS {
                if matches!(map.get(*key), Some(Value::Array(_))) {
                    if let Some(Value::Array(items)) = map.remove(*key) {
                        return items;
                    }
                }
            }
            // id -> row maps
            if !map.is_empty() && map.values().all(Value::is_object) {
                map.into_iter().map(|(_, v)| v).collect()
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
