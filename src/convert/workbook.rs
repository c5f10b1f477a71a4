//! Workbook converter: spreadsheet → JSON.

use crate::error::Result;
use crate::model::Workbook;
use crate::parser::WorkbookReader;
use crate::render::{to_json, workbook_preview, PREVIEW_ROWS};
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Spreadsheet workbook converter.
#[derive(Debug, Clone, Default)]
pub struct WorkbookConverter {
    _private: (),
}

impl WorkbookConverter {
    /// Create a new workbook converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_workbook(&self, workbook: Workbook, options: &ConvertOptions) -> Result<ConvertResult> {
        let content = to_json(&workbook, options.json_format)?;
        let preview = workbook_preview(&workbook, PREVIEW_ROWS);
        Ok(ConvertResult::new(content, preview, "application/json"))
    }
}

impl DocumentConverter for WorkbookConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["xlsx", "xlsm", "xlsb", "xlam", "xla", "xls", "ods"]
    }

    fn name(&self) -> &str {
        "workbook"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let workbook = WorkbookReader::open(path)?.read()?;
        self.convert_workbook(workbook, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let workbook = WorkbookReader::from_bytes(bytes)?.read()?;
        self.convert_workbook(workbook, options)
    }
}
