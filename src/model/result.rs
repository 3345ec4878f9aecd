//! Extraction output.

use super::Record;
use serde::Serialize;

/// Rows extracted from a table, in table body order.
///
/// Serializes as a JSON array of objects (`Records`) or a JSON array of
/// string arrays (`Rows`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    /// Rows keyed by column name
    Records(Vec<Record>),
    /// Rows as ordered cell values
    Rows(Vec<Vec<String>>),
}

impl ExtractionResult {
    /// Number of rows.
    pub fn len(&self) -> usize {
        match self {
            ExtractionResult::Records(records) => records.len(),
            ExtractionResult::Rows(rows) => rows.len(),
        }
    }

    /// Check if no rows were extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records, if this result is keyed.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            ExtractionResult::Records(records) => Some(records),
            ExtractionResult::Rows(_) => None,
        }
    }

    /// Positional rows, if this result is not keyed.
    pub fn rows(&self) -> Option<&[Vec<String>]> {
        match self {
            ExtractionResult::Rows(rows) => Some(rows),
            ExtractionResult::Records(_) => None,
        }
    }

    /// Convert into records, if keyed.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            ExtractionResult::Records(records) => Some(records),
            ExtractionResult::Rows(_) => None,
        }
    }

    /// Convert into positional rows, if not keyed.
    pub fn into_rows(self) -> Option<Vec<Vec<String>>> {
        match self {
            ExtractionResult::Rows(rows) => Some(rows),
            ExtractionResult::Records(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_serialize_as_objects() {
        let record: Record = [("id", "1"), ("vendor", "Intel")].into_iter().collect();
        let result = ExtractionResult::Records(vec![record]);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[{"id":"1","vendor":"Intel"}]"#);
        assert_eq!(result.len(), 1);
        assert!(result.rows().is_none());
    }

    #[test]
    fn test_rows_serialize_as_arrays() {
        let result = ExtractionResult::Rows(vec![vec!["1".into(), "Intel".into()]]);

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"[["1","Intel"]]"#);
        assert!(result.records().is_none());
    }

    #[test]
    fn test_empty_result() {
        let result = ExtractionResult::Rows(Vec::new());
        assert!(result.is_empty());
        assert_eq!(serde_json::to_string(&result).unwrap(), "[]");
    }
}
