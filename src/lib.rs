//! # rawextract
//!
//! Raw content extraction from spreadsheet workbooks and PDF documents.
//!
//! Workbooks become an ordered mapping of sheet name to rows, serialized as
//! indented JSON. PDFs become one plain-text string made of every page's
//! text, each page followed by a blank line.
//!
//! ## Quick Start
//!
//! ```no_run
//! use rawextract::render::{self, JsonFormat};
//!
//! fn main() -> rawextract::Result<()> {
//!     let workbook = rawextract::extract_workbook("financial data.xlsx")?;
//!     let json = render::to_json(&workbook, JsonFormat::Pretty)?;
//!     std::fs::write("financial_data.json", json)?;
//!
//!     let text = rawextract::extract_text("blueprint.pdf")?;
//!     std::fs::write("blueprint.txt", text)?;
//!     Ok(())
//! }
//! ```

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, PdfConverter,
    WorkbookConverter,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, PdfFormat, SourceFormat};
pub use error::{Error, ErrorKind, Result};
pub use model::{CellValue, Metadata, PageText, Row, Sheet, TextDocument, Workbook};
pub use output::{write_output, OutputOptions};
pub use parser::{ErrorMode, ExtractOptions, PageSelection, PdfReader, WorkbookReader};
pub use render::JsonFormat;

use std::path::Path;

/// Read every sheet of a workbook file.
///
/// # Example
///
/// ```no_run
/// let workbook = rawextract::extract_workbook("financial data.xlsx").unwrap();
/// println!("Sheets: {:?}", workbook.sheet_names());
/// ```
pub fn extract_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    WorkbookReader::open(path)?.read()
}

/// Read every sheet of a workbook held in memory.
pub fn extract_workbook_bytes(data: &[u8]) -> Result<Workbook> {
    WorkbookReader::from_bytes(data)?.read()
}

/// Extract the text of every page of a PDF file.
pub fn extract_pdf<P: AsRef<Path>>(path: P) -> Result<TextDocument> {
    PdfReader::open(path)?.extract()
}

/// Extract page texts of a PDF file with custom options.
///
/// ```no_run
/// use rawextract::{extract_pdf_with_options, ExtractOptions, PageSelection};
///
/// let options = ExtractOptions::new()
///     .lenient()
///     .with_pages(PageSelection::Range(1..=3));
/// let doc = extract_pdf_with_options("blueprint.pdf", options).unwrap();
/// ```
pub fn extract_pdf_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<TextDocument> {
    PdfReader::open_with_options(path, options)?.extract()
}

/// Extract the text of every page of a PDF held in memory.
pub fn extract_pdf_bytes(data: &[u8]) -> Result<TextDocument> {
    PdfReader::from_bytes(data)?.extract()
}

/// Extract a PDF file as one string: each page's text followed by a blank line.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = extract_pdf(path)?;
    Ok(render::to_text(&doc))
}
