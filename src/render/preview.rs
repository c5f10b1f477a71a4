//! Console previews of extraction results.
//!
//! The previews are meant for humans reading a terminal; their layout is not
//! a stable interface.

use crate::model::{quote, CellValue, TextDocument, Workbook};

/// Rows of the first sheet shown by [`workbook_preview`].
pub const PREVIEW_ROWS: usize = 10;

/// Characters of text shown by [`text_preview`].
pub const PREVIEW_CHARS: usize = 1500;

/// One-line summary: sheet count and names.
pub fn workbook_summary(workbook: &Workbook) -> String {
    let names: Vec<String> = workbook.sheet_names().into_iter().map(quote).collect();
    format!(
        "Extracted {} sheets: [{}]",
        workbook.sheet_count(),
        names.join(", ")
    )
}

/// Format a row as a tuple, e.g. `('Revenue', 1200, None)`.
pub fn format_row(row: &[CellValue]) -> String {
    match row {
        [] => "()".to_string(),
        [single] => format!("({},)", single.repr()),
        cells => {
            let parts: Vec<String> = cells.iter().map(CellValue::repr).collect();
            format!("({})", parts.join(", "))
        }
    }
}

/// Summary line followed by the first `max_rows` rows of the first sheet.
pub fn workbook_preview(workbook: &Workbook, max_rows: usize) -> String {
    let mut lines = vec![
        workbook_summary(workbook),
        String::new(),
        "First sheet preview:".to_string(),
    ];

    if let Some(sheet) = workbook.first_sheet() {
        for (i, row) in sheet.rows.iter().take(max_rows).enumerate() {
            lines.push(format!("Row {}: {}", i, format_row(row)));
        }
    }

    lines.join("\n")
}

/// Page count followed by the first `max_chars` characters of `text`.
pub fn text_preview(doc: &TextDocument, text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!(
        "Extracted {} pages from PDF\n\nFirst {} characters:\n{}",
        doc.metadata.page_count, max_chars, head
    )
}
