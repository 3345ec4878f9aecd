//! Table extraction pipeline.
//!
//! A call parses the HTML, locates the first table, resolves its column
//! names, and extracts its data rows. Nothing is shared between calls.

pub mod document;
pub mod headers;
pub mod locate;
mod options;
pub mod rows;

pub use headers::{resolve_headers, resolve_headers_or_synthesize, synthesize};
pub use locate::find_table;
pub use options::{ExtractOptions, OutputMode};

use crate::error::Result;
use crate::model::{ExtractionResult, HeaderList};

/// Extract the first table of `html` in the given output mode.
pub fn extract_with_mode(html: &str, mode: OutputMode) -> Result<ExtractionResult> {
    let doc = document::load(html)?;
    let table = find_table(&doc)?;
    let detected = resolve_headers(table);

    let keyed = match mode {
        OutputMode::Auto => detected.clone(),
        OutputMode::Records if !detected.is_present() => synthesize(table),
        OutputMode::Records => detected.clone(),
        OutputMode::Rows => HeaderList::NoHeaders,
    };

    let cells = rows::extract_cells(table, &detected, doc.has_explicit_body());

    let result = match keyed.names() {
        Some(names) => ExtractionResult::Records(
            cells
                .into_iter()
                .map(|row| rows::to_record(names, row))
                .collect(),
        ),
        None if mode == OutputMode::Records => ExtractionResult::Records(Vec::new()),
        None => ExtractionResult::Rows(cells),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const NO_HEADERS: &str = "<table>\
        <tr><td>Product A</td><td>$10.99</td><td>In Stock</td></tr>\
        <tr><td>Product B</td><td>$15.50</td></tr>\
        </table>";

    const WITH_HEADERS: &str = "<table><tr><th>Name</th><th>Age</th></tr>\
        <tr><td>John</td><td>30</td></tr></table>";

    #[test]
    fn test_auto_without_headers_gives_rows() {
        let result = extract_with_mode(NO_HEADERS, OutputMode::Auto).unwrap();
        let rows = result.rows().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], ["Product B", "$15.50"]);
    }

    #[test]
    fn test_records_mode_synthesizes_names() {
        let result = extract_with_mode(NO_HEADERS, OutputMode::Records).unwrap();
        let records = result.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("column_1"), Some("Product A"));
        assert_eq!(records[0].get("column_3"), Some("In Stock"));
        assert_eq!(records[1].get("column_3"), Some(""));
    }

    #[test]
    fn test_rows_mode_still_skips_header_row() {
        let result = extract_with_mode(WITH_HEADERS, OutputMode::Rows).unwrap();
        assert_eq!(result, ExtractionResult::Rows(vec![vec!["John".into(), "30".into()]]));
    }

    #[test]
    fn test_records_mode_without_columns() {
        let result = extract_with_mode("<table></table>", OutputMode::Records).unwrap();
        assert_eq!(result, ExtractionResult::Records(Vec::new()));
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            extract_with_mode("", OutputMode::Auto),
            Err(Error::EmptyInput)
        ));
        assert!(matches!(
            extract_with_mode("<p>hi</p>", OutputMode::Rows),
            Err(Error::NoTableFound)
        ));
    }
}
