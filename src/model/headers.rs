//! Column header types.

use std::fmt;

/// Where a set of column names came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderSource {
    /// Cells of the table's `<thead>` section
    HeaderSection,
    /// `<th>` cells of the table's first row
    FirstRow,
    /// Generated `column_N` names
    Synthesized,
}

impl fmt::Display for HeaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderSource::HeaderSection => "header section",
            HeaderSource::FirstRow => "first row",
            HeaderSource::Synthesized => "synthesized",
        };
        f.write_str(name)
    }
}

/// Column names of a table, or the absence of any.
///
/// A `Headers` value always holds at least one name. Names are not required
/// to be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderList {
    /// Detected or generated column names
    Headers {
        names: Vec<String>,
        source: HeaderSource,
    },
    /// No header cells were detected
    NoHeaders,
}

impl HeaderList {
    /// Build a header list, falling back to `NoHeaders` when `names` is empty.
    pub fn from_names(names: Vec<String>, source: HeaderSource) -> Self {
        if names.is_empty() {
            HeaderList::NoHeaders
        } else {
            HeaderList::Headers { names, source }
        }
    }

    /// Generate `column_1`, `column_2`, ... for `count` columns.
    pub fn synthesized(count: usize) -> Self {
        let names = (1..=count).map(|i| format!("column_{}", i)).collect();
        Self::from_names(names, HeaderSource::Synthesized)
    }

    /// Column names, if any.
    pub fn names(&self) -> Option<&[String]> {
        match self {
            HeaderList::Headers { names, .. } => Some(names),
            HeaderList::NoHeaders => None,
        }
    }

    /// Where the names came from, if any.
    pub fn source(&self) -> Option<HeaderSource> {
        match self {
            HeaderList::Headers { source, .. } => Some(*source),
            HeaderList::NoHeaders => None,
        }
    }

    /// Whether headers were found.
    pub fn is_present(&self) -> bool {
        matches!(self, HeaderList::Headers { .. })
    }

    /// Number of columns named (0 when absent).
    pub fn len(&self) -> usize {
        self.names().map(<[String]>::len).unwrap_or(0)
    }

    /// Check if there are no header names.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
