//! Document model types for extracted content.
//!
//! Two independent result shapes live here: [`Workbook`] for spreadsheet
//! extraction and [`TextDocument`] for PDF text extraction. Neither depends on
//! the parsing libraries, so they can be built directly in tests.

mod cell;
mod document;
mod page;
mod workbook;

pub use cell::CellValue;
pub(crate) use cell::quote;
pub use document::{Metadata, TextDocument};
pub use page::PageText;
pub use workbook::{Row, Sheet, Workbook};
