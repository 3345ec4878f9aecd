//! HTML loading and element text helpers.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};

pub(crate) static TABLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("table").expect("BUG: hardcoded selector 'table' is statically valid")
});

pub(crate) static ROW_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("tr").expect("BUG: hardcoded selector 'tr' is statically valid")
});

pub(crate) static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("th, td").expect("BUG: hardcoded selector 'th, td' is statically valid")
});

pub(crate) static HEADER_CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("th").expect("BUG: hardcoded selector 'th' is statically valid")
});

/// A parsed HTML document.
pub struct Document {
    html: Html,
    explicit_body: bool,
}

impl Document {
    /// The parsed tree.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Whether the source text contains a `<tbody>` start tag.
    ///
    /// The tree builder wraps bare table rows in a generated `<tbody>`, so
    /// the tree alone cannot tell a written body section from an implied one.
    pub fn has_explicit_body(&self) -> bool {
        self.explicit_body
    }
}

/// Parse HTML text into a document tree.
///
/// Empty or whitespace-only input is rejected before parsing. Malformed
/// markup is repaired by the HTML5 tree builder rather than rejected.
pub fn load(html: &str) -> Result<Document> {
    if html.trim().is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(Document {
        html: Html::parse_document(html),
        explicit_body: has_body_tag(html),
    })
}

/// Case-insensitive search for a `<tbody` start tag.
fn has_body_tag(html: &str) -> bool {
    const TAG: &[u8] = b"<tbody";
    html.as_bytes().windows(TAG.len() + 1).any(|window| {
        window[..TAG.len()].eq_ignore_ascii_case(TAG)
            && matches!(window[TAG.len()], b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
    })
}

/// Text content of an element with its text nodes trimmed and joined by a
/// single space.
///
/// Joining per text node keeps words apart when they are separated only by
/// markup, so `SOME WORKPLACE<br>Salary` reads `SOME WORKPLACE Salary`.
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    for piece in element.text().map(str::trim).filter(|t| !t.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(piece);
    }
    out
}

/// Header name of a cell: its text, trimmed and lower-cased.
pub fn header_name(cell: ElementRef<'_>) -> String {
    element_text(cell).trim().to_lowercase()
}

/// Direct child elements of `parent` with the given tag name.
pub(crate) fn child_elements<'a>(
    parent: ElementRef<'a>,
    name: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| child.value().name() == name)
}
