//! Plain text rendering for extracted PDF documents.

use crate::model::TextDocument;

/// Appended after every page's text, including the last.
pub const PAGE_SEPARATOR: &str = "\n\n";

/// Concatenate page texts, each followed by [`PAGE_SEPARATOR`].
///
/// Pages without text still contribute their separator, so the output
/// carries one separator per page.
pub fn to_text(doc: &TextDocument) -> String {
    let capacity = doc
        .pages
        .iter()
        .map(|p| p.text.len() + PAGE_SEPARATOR.len())
        .sum();

    let mut output = String::with_capacity(capacity);
    for page in &doc.pages {
        output.push_str(&page.text);
        output.push_str(PAGE_SEPARATOR);
    }
    output
}
