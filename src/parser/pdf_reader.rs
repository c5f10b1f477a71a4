//! PDF text reader using lopdf.

use std::io::Read;
use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{detect_pdf_from_bytes, detect_pdf_from_path, PdfFormat};
use crate::error::{Error, Result};
use crate::model::{Metadata, PageText, TextDocument};

use super::options::{ErrorMode, ExtractOptions};

/// PDF text reader.
///
/// The file is read completely while the reader is constructed; no handle
/// stays open afterwards.
pub struct PdfReader {
    doc: LopdfDocument,
    format: PdfFormat,
    options: ExtractOptions,
    encrypted: bool,
}

impl PdfReader {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();

        let format = detect_pdf_from_path(path)?;
        let doc = LopdfDocument::load(path)?;

        Self::from_document(doc, format, options)
    }

    /// Read a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Read a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Self> {
        let format = detect_pdf_from_bytes(data)?;
        let doc = LopdfDocument::load_mem(data)?;

        Self::from_document(doc, format, options)
    }

    /// Read a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ExtractOptions::default())
    }

    /// Read a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ExtractOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    fn from_document(
        mut doc: LopdfDocument,
        format: PdfFormat,
        options: ExtractOptions,
    ) -> Result<Self> {
        let encrypted = doc.is_encrypted();
        if encrypted {
            // Files protected only by an owner password open with an empty user password.
            doc.decrypt("").map_err(|e| {
                log::debug!("Empty user password rejected: {}", e);
                Error::Encrypted
            })?;
            log::info!("Decrypted document with the empty user password");
        }

        Ok(Self {
            doc,
            format,
            options,
            encrypted,
        })
    }

    /// Extract the text of every selected page, in document order.
    pub fn extract(&self) -> Result<TextDocument> {
        let mut document = TextDocument::new();
        document.metadata = Metadata::with_version(self.format.version.clone());
        document.metadata.encrypted = self.encrypted;

        let pages = self.doc.get_pages();
        document.metadata.page_count = pages.len() as u32;

        for page_num in pages.keys().copied() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            let text = match self.extract_page_text(page_num) {
                Ok(text) => text,
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    String::new()
                }
            };

            log::debug!("Page {}: {} characters", page_num, text.chars().count());
            document.add_page(PageText::new(page_num, text));
        }

        log::info!(
            "Extracted text from {} of {} pages",
            document.page_count(),
            document.metadata.page_count
        );

        Ok(document)
    }

    /// Extract text from a page.
    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", page_num, e)))
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Whether the source file was encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Get PDF version from the file header.
    pub fn version(&self) -> &str {
        &self.format.version
    }
}
