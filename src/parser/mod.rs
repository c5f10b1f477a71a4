//! Input readers: spreadsheet workbooks and PDF documents.

mod options;
mod pdf_reader;
mod workbook_reader;

pub use options::{ErrorMode, ExtractOptions, PageSelection};
pub use pdf_reader::PdfReader;
pub use workbook_reader::{cell_from_data, rows_from_range, WorkbookReader};
