//! # tabletojson
//!
//! Extract HTML tables into JSON.
//!
//! This library locates the first table in an HTML document, detects its
//! column names, and turns its rows into keyed records or positional rows.
//! Malformed markup, missing cells, empty rows, and nested markup inside
//! cells are tolerated.
//!
//! ## Quick Start
//!
//! ```
//! use tabletojson::{extract, render, JsonFormat};
//!
//! fn main() -> tabletojson::Result<()> {
//!     let html = "<table><thead><th>ID</th><th>Vendor</th></thead>\
//!                 <tr><td>1</td><td>Intel</td></tr></table>";
//!
//!     let result = extract(html)?;
//!     let json = render::to_json(&result, JsonFormat::Compact)?;
//!     assert_eq!(json, r#"[{"id":"1","vendor":"Intel"}]"#);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Header detection
//!
//! - Cells of a `<thead>` section, if present
//! - Otherwise `<th>` cells of the first row, which is then not returned as data
//! - Otherwise no headers: rows come back as arrays of cell text

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use detect::{inspect, is_valid_table, is_valid_table_bytes, TableInfo};
pub use error::{Error, ErrorKind, Result};
pub use extract::{ExtractOptions, OutputMode};
pub use model::{ExtractionResult, HeaderList, HeaderSource, Record};
pub use render::JsonFormat;

use std::io::Read;
use std::path::Path;

/// Extract the first table of an HTML document.
///
/// Produces records when column headers are detected, positional rows
/// otherwise.
///
/// # Errors
///
/// * `Error::EmptyInput` if `html` is empty or whitespace
/// * `Error::NoTableFound` if the document has no table
///
/// # Example
///
/// ```
/// use tabletojson::extract;
///
/// let result = extract("<table><tr><td>1</td><td>Intel</td></tr></table>").unwrap();
/// assert_eq!(result.rows().unwrap(), [vec!["1".to_string(), "Intel".to_string()]]);
/// ```
pub fn extract(html: &str) -> Result<ExtractionResult> {
    extract::extract_with_mode(html, OutputMode::Auto)
}

/// Extract the first table as records.
///
/// Without detected headers, columns are named `column_1`, `column_2`, ...
/// after the cells of the first row. A table without any cells yields no
/// records.
///
/// # Example
///
/// ```
/// use tabletojson::extract_as_records;
///
/// let records = extract_as_records("<table><tr><td>a</td><td>b</td></tr></table>").unwrap();
/// assert_eq!(records[0].get("column_2"), Some("b"));
/// ```
pub fn extract_as_records(html: &str) -> Result<Vec<Record>> {
    let result = extract::extract_with_mode(html, OutputMode::Records)?;
    Ok(result.into_records().unwrap_or_default())
}

/// Extract the first table as positional rows, ignoring header names.
///
/// A header row taken from the first row of the table is still skipped.
pub fn extract_as_rows(html: &str) -> Result<Vec<Vec<String>>> {
    let result = extract::extract_with_mode(html, OutputMode::Rows)?;
    Ok(result.into_rows().unwrap_or_default())
}

/// Extract the first table and serialize it to JSON.
///
/// # Example
///
/// ```
/// use tabletojson::{html_to_json, JsonFormat};
///
/// let json = html_to_json("<table><tr><td>x</td></tr></table>", JsonFormat::Compact).unwrap();
/// assert_eq!(json, r#"[["x"]]"#);
/// ```
pub fn html_to_json(html: &str, format: JsonFormat) -> Result<String> {
    let result = extract(html)?;
    render::to_json(&result, format)
}

/// Extract the first table from UTF-8 encoded bytes.
///
/// Bytes that are not valid UTF-8 fail with `Error::ParseFailure`.
pub fn extract_bytes(data: &[u8]) -> Result<ExtractionResult> {
    let html = std::str::from_utf8(data)?;
    extract(html)
}

/// Extract the first table from a reader.
pub fn extract_reader<R: Read>(mut reader: R) -> Result<ExtractionResult> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    extract_bytes(&data)
}

/// Extract the first table from an HTML file.
///
/// # Example
///
/// ```no_run
/// use tabletojson::extract_file;
///
/// let result = extract_file("table.html").unwrap();
/// println!("{} rows", result.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
    let data = std::fs::read(path)?;
    extract_bytes(&data)
}

/// Builder for extracting and serializing tables.
///
/// # Example
///
/// ```
/// use tabletojson::TableToJson;
///
/// let json = TableToJson::new()
///     .records()
///     .with_indent(2)
///     .extract("<table><tr><td>a</td></tr></table>")?
///     .to_json()?;
/// assert!(json.contains("\"column_1\": \"a\""));
/// # Ok::<(), tabletojson::Error>(())
/// ```
pub struct TableToJson {
    options: ExtractOptions,
}

impl TableToJson {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Create a builder from existing options.
    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Always produce records.
    pub fn records(mut self) -> Self {
        self.options = self.options.records();
        self
    }

    /// Always produce positional rows.
    pub fn rows(mut self) -> Self {
        self.options = self.options.rows();
        self
    }

    /// Set output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.options = self.options.with_mode(mode);
        self
    }

    /// Indent JSON output by `width` spaces.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.options = self.options.with_indent(width);
        self
    }

    /// Set JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Extract the first table of an HTML string.
    pub fn extract(&self, html: &str) -> Result<TableOutput> {
        let result = extract::extract_with_mode(html, self.options.mode)?;
        Ok(TableOutput {
            result,
            format: self.options.format,
        })
    }

    /// Extract the first table of UTF-8 bytes.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<TableOutput> {
        self.extract(std::str::from_utf8(data)?)
    }

    /// Extract the first table of an HTML file.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<TableOutput> {
        let data = std::fs::read(path)?;
        self.extract_bytes(&data)
    }
}

impl Default for TableToJson {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of extracting a table with [`TableToJson`].
#[derive(Debug, Clone)]
pub struct TableOutput {
    result: ExtractionResult,
    /// JSON format to serialize with
    format: JsonFormat,
}

impl TableOutput {
    /// Serialize with the configured JSON format.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.result, self.format)
    }

    /// Get the extracted rows.
    pub fn result(&self) -> &ExtractionResult {
        &self.result
    }

    /// Take the extracted rows.
    pub fn into_result(self) -> ExtractionResult {
        self.result
    }
}
