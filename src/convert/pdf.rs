//! PDF converter: document → plain text.

use crate::error::Result;
use crate::model::TextDocument;
use crate::parser::PdfReader;
use crate::render::{text_preview, to_text, PREVIEW_CHARS};
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// PDF document converter.
#[derive(Debug, Clone, Default)]
pub struct PdfConverter {
    _private: (),
}

impl PdfConverter {
    /// Create a new PDF converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_document(&self, doc: TextDocument) -> ConvertResult {
        let content = to_text(&doc);
        let preview = text_preview(&doc, &content, PREVIEW_CHARS);
        ConvertResult::new(content, preview, "text/plain")
    }
}

impl DocumentConverter for PdfConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let reader = PdfReader::open_with_options(path, options.extract.clone())?;
        Ok(self.convert_document(reader.extract()?))
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let reader = PdfReader::from_bytes_with_options(bytes, options.extract.clone())?;
        Ok(self.convert_document(reader.extract()?))
    }
}
