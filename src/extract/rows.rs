//! Row extraction.

use std::collections::HashSet;

use scraper::ElementRef;

use super::document::{child_elements, element_text, CELL_SELECTOR, ROW_SELECTOR};
use super::headers::first_row;
use crate::model::{HeaderList, HeaderSource, Record};

/// Rows that carry table data, in document order.
///
/// Rows of `<tbody>` sections when the table has any, otherwise every row
/// outside the `<thead>` section. When the headers were taken from the
/// first row and the source had no written `<tbody>`, that row is skipped.
pub fn data_rows<'a>(
    table: ElementRef<'a>,
    headers: &HeaderList,
    explicit_body: bool,
) -> Vec<ElementRef<'a>> {
    let bodies: Vec<_> = child_elements(table, "tbody").collect();

    let rows: Vec<ElementRef<'a>> = if bodies.is_empty() {
        let header_sections: HashSet<_> =
            child_elements(table, "thead").map(|thead| thead.id()).collect();
        table
            .select(&ROW_SELECTOR)
            .filter(|row| !row.ancestors().any(|node| header_sections.contains(&node.id())))
            .collect()
    } else {
        bodies
            .into_iter()
            .flat_map(|body| body.select(&ROW_SELECTOR))
            .collect()
    };

    let header_row = match headers.source() {
        Some(HeaderSource::FirstRow) if !explicit_body => first_row(table).map(|row| row.id()),
        _ => None,
    };

    match header_row {
        Some(id) => rows.into_iter().filter(|row| row.id() != id).collect(),
        None => rows,
    }
}

/// Cell texts of a row, or `None` when the row has no cells or only blank
/// ones.
pub fn row_cells(row: ElementRef<'_>) -> Option<Vec<String>> {
    let cells: Vec<String> = row.select(&CELL_SELECTOR).map(element_text).collect();

    if cells.is_empty() {
        log::trace!("Dropping row without cells");
        return None;
    }
    if cells.iter().all(|cell| cell.trim().is_empty()) {
        log::trace!("Dropping row with {} blank cells", cells.len());
        return None;
    }
    Some(cells)
}

/// Extract the non-empty data rows of a table as cell texts.
pub fn extract_cells(
    table: ElementRef<'_>,
    headers: &HeaderList,
    explicit_body: bool,
) -> Vec<Vec<String>> {
    let rows = data_rows(table, headers, explicit_body);
    let total = rows.len();
    let kept: Vec<Vec<String>> = rows.into_iter().filter_map(row_cells).collect();

    log::debug!(
        "Extracted {} rows ({} dropped as empty)",
        kept.len(),
        total - kept.len()
    );
    kept
}

/// Key a row's cells by column name.
///
/// Missing trailing cells become empty strings and cells beyond the last
/// column are dropped. Repeated names keep the last cell.
pub fn to_record(names: &[String], cells: Vec<String>) -> Record {
    let mut cells = cells.into_iter();
    let mut record = Record::with_capacity(names.len());
    for name in names {
        record.insert(name.as_str(), cells.next().unwrap_or_default());
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::document::load;
    use crate::extract::headers::resolve_headers;
    use crate::extract::locate::find_table;

    fn cells_of(html: &str) -> Vec<Vec<String>> {
        let doc = load(html).unwrap();
        let table = find_table(&doc).unwrap();
        let headers = resolve_headers(table);
        extract_cells(table, &headers, doc.has_explicit_body())
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_header_section_rows_not_data() {
        let rows = cells_of(
            "<table><thead><th>ID</th><th>Vendor</th></thead>\
             <tr><td>1</td><td>Intel</td></tr><tr><td>2</td><td>AMD</td></tr></table>",
        );
        assert_eq!(rows, vec![vec!["1", "Intel"], vec!["2", "AMD"]]);
    }

    #[test]
    fn test_first_row_header_skipped() {
        let rows = cells_of(
            "<table><tr><th>Name</th><th>Age</th></tr>\
             <tr><td>John</td><td>30</td></tr></table>",
        );
        assert_eq!(rows, vec![vec!["John", "30"]]);
    }

    #[test]
    fn test_first_row_header_kept_in_written_body() {
        let rows = cells_of(
            "<table><tbody><tr><th>Name</th></tr>\
             <tr><td>John</td></tr></tbody></table>",
        );
        assert_eq!(rows, vec![vec!["Name"], vec!["John"]]);
    }

    #[test]
    fn test_header_section_without_body() {
        let rows = cells_of("<table><thead><tr><th>A</th></tr></thead></table>");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_multiple_bodies_in_order() {
        let rows = cells_of(
            "<table><tbody><tr><td>1</td></tr></tbody>\
             <tbody><tr><td>2</td></tr></tbody></table>",
        );
        assert_eq!(rows, vec![vec!["1"], vec!["2"]]);
    }

    #[test]
    fn test_footer_rows_excluded_with_body() {
        let rows = cells_of(
            "<table><tbody><tr><td>1</td></tr></tbody>\
             <tfoot><tr><td>total</td></tr></tfoot></table>",
        );
        assert_eq!(rows, vec![vec!["1"]]);
    }

    #[test]
    fn test_empty_rows_dropped() {
        let rows = cells_of(
            "<table><tr></tr><tr><td> </td><td></td></tr>\
             <tr><td>x</td><td></td></tr></table>",
        );
        assert_eq!(rows, vec![vec!["x", ""]]);
    }

    #[test]
    fn test_row_with_mixed_cells() {
        let rows = cells_of("<table><tr><td>a</td><th>b</th><td>c</td></tr></table>");
        assert_eq!(rows, vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_to_record_pads_missing_cells() {
        let record = to_record(
            &names(&["id", "vendor", "product"]),
            vec!["1".into(), "Intel".into()],
        );
        assert_eq!(record.get("id"), Some("1"));
        assert_eq!(record.get("vendor"), Some("Intel"));
        assert_eq!(record.get("product"), Some(""));
    }

    #[test]
    fn test_to_record_drops_extra_cells() {
        let record = to_record(
            &names(&["id"]),
            vec!["1".into(), "Intel".into(), "CPU".into()],
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("id"), Some("1"));
    }

    #[test]
    fn test_to_record_duplicate_names_last_wins() {
        let record = to_record(
            &names(&["name", "name"]),
            vec!["first".into(), "second".into()],
        );
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("name"), Some("second"));
    }
}
