//! Header detection.
//!
//! Column names are resolved by an ordered chain of strategies. The first
//! strategy that finds at least one header cell wins:
//!
//! 1. cells (`<th>` or `<td>`) of the table's `<thead>` section
//! 2. `<th>` cells of the table's first row
//!
//! When neither applies the table has no headers. Callers that need keyed
//! output regardless can fall back to [`resolve_headers_or_synthesize`].

use scraper::ElementRef;

use super::document::{
    child_elements, header_name, CELL_SELECTOR, HEADER_CELL_SELECTOR, ROW_SELECTOR,
};
use crate::model::{HeaderList, HeaderSource};

type HeaderStrategy = fn(ElementRef<'_>) -> Option<Vec<String>>;

const STRATEGIES: &[(HeaderSource, HeaderStrategy)] = &[
    (HeaderSource::HeaderSection, from_header_section),
    (HeaderSource::FirstRow, from_first_row),
];

/// Detect the column names of a table.
pub fn resolve_headers(table: ElementRef<'_>) -> HeaderList {
    for (source, strategy) in STRATEGIES {
        if let Some(names) = strategy(table).filter(|names| !names.is_empty()) {
            log::debug!("Detected {} headers from {}", names.len(), source);
            return HeaderList::from_names(names, *source);
        }
    }

    log::debug!("No headers detected");
    HeaderList::NoHeaders
}

/// Detect the column names of a table, generating `column_N` names sized to
/// the first row when none are detected.
///
/// Returns `NoHeaders` only when the first row has no cells either.
pub fn resolve_headers_or_synthesize(table: ElementRef<'_>) -> HeaderList {
    match resolve_headers(table) {
        HeaderList::NoHeaders => synthesize(table),
        detected => detected,
    }
}

/// Generate `column_N` names, one per cell of the first row.
pub fn synthesize(table: ElementRef<'_>) -> HeaderList {
    let count = first_row(table)
        .map(|row| row.select(&CELL_SELECTOR).count())
        .unwrap_or(0);
    log::debug!("Synthesizing {} column names", count);
    HeaderList::synthesized(count)
}

/// First `<tr>` of the table in document order.
pub(crate) fn first_row(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    table.select(&ROW_SELECTOR).next()
}

fn from_header_section(table: ElementRef<'_>) -> Option<Vec<String>> {
    let thead = child_elements(table, "thead").next()?;
    Some(thead.select(&CELL_SELECTOR).map(header_name).collect())
}

fn from_first_row(table: ElementRef<'_>) -> Option<Vec<String>> {
    let row = first_row(table)?;
    Some(row.select(&HEADER_CELL_SELECTOR).map(header_name).collect())
}
