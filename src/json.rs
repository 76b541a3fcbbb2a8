//! JSON handoff for layouts, resolver input and resolver output.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::model::PaginatedLayout;
use crate::numbering::NumberingInput;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize any model value to JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value)?,
        JsonFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(json)
}

/// Write a value as JSON.
pub fn write_json<T: Serialize + ?Sized, W: Write>(
    value: &T,
    mut writer: W,
    format: JsonFormat,
) -> Result<()> {
    match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(&mut writer, value)?,
        JsonFormat::Compact => serde_json::to_writer(&mut writer, value)?,
    }
    writer.flush()?;
    Ok(())
}

fn read_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<T> {
    Ok(serde_json::from_reader(reader)?)
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)?;
    read_json(BufReader::new(file))
}

/// Parse a layout from a JSON string.
pub fn layout_from_str(json: &str) -> Result<PaginatedLayout> {
    Ok(serde_json::from_str(json)?)
}

/// Read a layout from JSON.
pub fn layout_from_reader<R: Read>(reader: R) -> Result<PaginatedLayout> {
    read_json(reader)
}

/// Read a layout from a JSON file.
pub fn layout_from_file<P: AsRef<Path>>(path: P) -> Result<PaginatedLayout> {
    read_json_file(path.as_ref())
}

/// Parse resolver input from a JSON string.
pub fn numbering_input_from_str(json: &str) -> Result<NumberingInput> {
    Ok(serde_json::from_str(json)?)
}

/// Read resolver input from JSON.
pub fn numbering_input_from_reader<R: Read>(reader: R) -> Result<NumberingInput> {
    read_json(reader)
}

/// Read resolver input from a JSON file.
pub fn numbering_input_from_file<P: AsRef<Path>>(path: P) -> Result<NumberingInput> {
    read_json_file(path.as_ref())
}
