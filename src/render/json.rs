//! JSON rendering for extracted tables.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::model::ExtractionResult;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Single-line JSON without extra whitespace
    #[default]
    Compact,
    /// Pretty-printed JSON indented by two spaces
    Pretty,
    /// Pretty-printed JSON indented by the given number of spaces
    Indent(usize),
}

impl JsonFormat {
    /// Compact when `indent` is `None`, indented otherwise.
    pub fn from_indent(indent: Option<usize>) -> Self {
        indent.map_or(JsonFormat::Compact, JsonFormat::Indent)
    }
}

/// Convert an extraction result to JSON.
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn to_json(result: &ExtractionResult, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(result),
        JsonFormat::Pretty => serde_json::to_string_pretty(result),
        JsonFormat::Indent(width) => return to_json_indented(result, width),
    };

    json.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

fn to_json_indented(result: &ExtractionResult, width: usize) -> Result<String> {
    let indent = " ".repeat(width);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);

    result
        .serialize(&mut serializer)
        .map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))?;

    String::from_utf8(buf)
        .map_err(|e| Error::Render(format!("Invalid UTF-8 in JSON output: {}", e)))
}
