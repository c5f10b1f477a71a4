//! Rendering module for turning extraction results into output files and
//! console previews.

mod json;
mod preview;
mod text;

pub use json::{from_json, to_json, JsonFormat};
pub use preview::{
    format_row, text_preview, workbook_preview, workbook_summary, PREVIEW_CHARS, PREVIEW_ROWS,
};
pub use text::{to_text, PAGE_SEPARATOR};
