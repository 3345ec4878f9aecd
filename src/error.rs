//! Error types for tabletojson library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for tabletojson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting a table.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text is empty or contains only whitespace.
    #[error("Input is empty: no HTML content to parse")]
    EmptyInput,

    /// The document was parsed but contains no table element.
    #[error("No table found in HTML content")]
    NoTableFound,

    /// The document could not be loaded.
    #[error("Failed to parse HTML: {message}")]
    ParseFailure {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O error when reading input.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during JSON serialization.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create a parse failure with an underlying cause.
    pub fn parse_failure(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Error::ParseFailure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyInput => ErrorKind::EmptyInput,
            Error::NoTableFound => ErrorKind::NoTableFound,
            Error::ParseFailure { .. } => ErrorKind::ParseFailure,
            Error::Io(_) => ErrorKind::Io,
            Error::Render(_) => ErrorKind::Render,
        }
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::parse_failure("input is not valid UTF-8", err)
    }
}

/// Closed set of error kinds, for callers that report failures by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    NoTableFound,
    ParseFailure,
    Io,
    Render,
}

impl ErrorKind {
    /// Stable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "EmptyInput",
            ErrorKind::NoTableFound => "NoTableFound",
            ErrorKind::ParseFailure => "ParseFailure",
            ErrorKind::Io => "Io",
            ErrorKind::Render => "Render",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
