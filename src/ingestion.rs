use crate::error::{FaqChatbotError, Result};
use crate::table::Table;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Recognized upload formats. The format is resolved once from the filename
/// extension and then matched exhaustively against the parsers; there is no
/// content sniffing and no fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated values, first row is the header.
    Csv,
    /// A JSON array of flat objects sharing the same keys.
    Json,
    /// Lines of `|`-separated fields, no header; columns are positional.
    Txt,
}

impl FileFormat {
    /// Resolve the format from a filename's extension (case-insensitive).
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormat::Csv),
            "json" => Ok(FileFormat::Json),
            "txt" => Ok(FileFormat::Txt),
            other => Err(FaqChatbotError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse an uploaded byte stream into a [`Table`], selecting the parser from
/// the filename extension. Malformed content is reported as
/// [`FaqChatbotError::DataLoad`] carrying the underlying cause's message, so
/// callers can tell "bad format" from "bad content".
pub fn load_table(bytes: &[u8], filename: &str) -> Result<Table> {
    let format = FileFormat::from_filename(filename)?;
    debug!("Parsing '{}' as {:?}", filename, format);
    match format {
        FileFormat::Csv => parse_csv(bytes),
        FileFormat::Json => parse_json(bytes),
        FileFormat::Txt => parse_txt(bytes),
    }
}

fn data_load(cause: impl std::fmt::Display) -> FaqChatbotError {
    FaqChatbotError::DataLoad(cause.to_string())
}

fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(bytes);
    let columns: Vec<String> = reader
        .headers()
        .map_err(data_load)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(data_load)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Table::new(columns, rows)
}

fn parse_json(bytes: &[u8]) -> Result<Table> {
    let objects: Vec<serde_json::Map<String, Value>> =
        serde_json::from_slice(bytes).map_err(data_load)?;

    let Some(first) = objects.first() else {
        return Table::new(Vec::new(), Vec::new());
    };
    let columns: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(objects.len());
    for (idx, object) in objects.iter().enumerate() {
        if object.len() != columns.len() {
            return Err(FaqChatbotError::DataLoad(format!(
                "object {} has {} keys, expected the {} keys of the first object",
                idx,
                object.len(),
                columns.len()
            )));
        }
        let mut row = Vec::with_capacity(columns.len());
        for column in &columns {
            let value = object.get(column).ok_or_else(|| {
                FaqChatbotError::DataLoad(format!("object {} is missing key '{}'", idx, column))
            })?;
            row.push(value_text(value));
        }
        rows.push(row);
    }
    Table::new(columns, rows)
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_txt(bytes: &[u8]) -> Result<Table> {
    let text = std::str::from_utf8(bytes).map_err(data_load)?;
    let rows: Vec<Vec<String>> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split('|').map(str::to_string).collect())
        .collect();
    Table::positional(rows)
}
