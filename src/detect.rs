//! Table detection and validation.

use std::fmt;

use crate::error::Result;
use crate::extract::document::{self, ROW_SELECTOR};
use crate::extract::{find_table, resolve_headers, rows};
use crate::model::HeaderList;

/// Structure summary of the first table in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    /// All `<tr>` elements inside the table, header rows included
    pub row_count: usize,
    /// Rows that extraction would return
    pub data_row_count: usize,
    /// Whether the table has a `<thead>` section
    pub has_header_section: bool,
    /// Whether the table has a `<tbody>` section
    pub has_body_section: bool,
    /// Detected column names
    pub headers: HeaderList,
}

impl fmt::Display for TableInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rows ({} data)", self.row_count, self.data_row_count)?;
        match &self.headers {
            HeaderList::Headers { names, source } => {
                write!(f, ", {} headers from {}", names.len(), source)
            }
            HeaderList::NoHeaders => write!(f, ", no headers"),
        }
    }
}

/// Summarize the structure of the first table in `html`.
///
/// # Returns
/// * `Ok(TableInfo)` describing the table
/// * `Err(Error::EmptyInput)` or `Err(Error::NoTableFound)` otherwise
pub fn inspect(html: &str) -> Result<TableInfo> {
    let doc = document::load(html)?;
    let table = find_table(&doc)?;
    let headers = resolve_headers(table);

    let has_section = |name: &'static str| document::child_elements(table, name).next().is_some();

    Ok(TableInfo {
        row_count: table.select(&ROW_SELECTOR).count(),
        data_row_count: rows::extract_cells(table, &headers, doc.has_explicit_body()).len(),
        has_header_section: has_section("thead"),
        has_body_section: has_section("tbody"),
        headers,
    })
}

/// Check if `html` contains a table with at least one row.
///
/// Never fails: blank input and documents without a table are simply
/// reported as invalid.
///
/// # Example
/// ```
/// use tabletojson::is_valid_table;
///
/// assert!(is_valid_table("<table><tr><td>a</td></tr></table>"));
/// assert!(!is_valid_table("<div>x</div>"));
/// ```
pub fn is_valid_table(html: &str) -> bool {
    let Ok(doc) = document::load(html) else {
        return false;
    };
    match find_table(&doc) {
        Ok(table) => table.select(&ROW_SELECTOR).next().is_some(),
        Err(_) => false,
    }
}

/// Check if bytes hold UTF-8 HTML with a table of at least one row.
pub fn is_valid_table_bytes(data: &[u8]) -> bool {
    std::str::from_utf8(data).is_ok_and(is_valid_table)
}
