//! Extraction options and configuration.

use crate::render::JsonFormat;

/// Shape of the extracted rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Records when headers are detected, positional rows otherwise
    #[default]
    Auto,
    /// Always records, with `column_N` names when no headers are detected
    Records,
    /// Always positional rows
    Rows,
}

/// Options for extracting and serializing a table.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Output shape
    pub mode: OutputMode,

    /// JSON layout used when serializing
    pub format: JsonFormat,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output mode.
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Always produce records.
    pub fn records(mut self) -> Self {
        self.mode = OutputMode::Records;
        self
    }

    /// Always produce positional rows.
    pub fn rows(mut self) -> Self {
        self.mode = OutputMode::Rows;
        self
    }

    /// Set JSON format.
    pub fn with_format(mut self, format: JsonFormat) -> Self {
        self.format = format;
        self
    }

    /// Pretty-print JSON with `width` spaces per level.
    pub fn with_indent(mut self, width: usize) -> Self {
        self.format = JsonFormat::Indent(width);
        self
    }

    /// Single-line JSON.
    pub fn compact(mut self) -> Self {
        self.format = JsonFormat::Compact;
        self
    }

    /// Pretty-printed JSON.
    pub fn pretty(mut self) -> Self {
        self.format = JsonFormat::Pretty;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new().records().with_indent(4);

        assert_eq!(options.mode, OutputMode::Records);
        assert_eq!(options.format, JsonFormat::Indent(4));
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.mode, OutputMode::Auto);
        assert_eq!(options.format, JsonFormat::Compact);
    }

    #[test]
    fn test_last_setting_wins() {
        let options = ExtractOptions::new().rows().pretty().compact();
        assert_eq!(options.mode, OutputMode::Rows);
        assert_eq!(options.format, JsonFormat::Compact);
    }
}
