//! Table location.

use scraper::ElementRef;

use super::document::{Document, TABLE_SELECTOR};
use crate::error::{Error, Result};

/// Find the first `<table>` element in document order.
pub fn find_table(doc: &Document) -> Result<ElementRef<'_>> {
    doc.html()
        .select(&TABLE_SELECTOR)
        .next()
        .ok_or(Error::NoTableFound)
}
