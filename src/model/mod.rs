//! Data model for extracted tables.
//!
//! Extraction produces either keyed records (when column names are known)
//! or positional rows. Every cell value is text; no type coercion is done.

mod headers;
mod record;
mod result;

pub use headers::{HeaderList, HeaderSource};
pub use record::Record;
pub use result::ExtractionResult;
