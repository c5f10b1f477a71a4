//! Input format detection and validation.
//!
//! Only the leading bytes of a file are inspected. The parsing libraries do
//! the full validation; this module rejects obviously wrong inputs early with
//! [`Error::UnknownFormat`].

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Container format of an input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFormat {
    /// A PDF document
    Pdf(PdfFormat),
    /// A ZIP container (xlsx, xlsm, xlsb, ods)
    Zip,
    /// An OLE2 compound file (legacy xls)
    Ole,
}

impl SourceFormat {
    /// Whether the container can hold a spreadsheet workbook.
    pub fn is_workbook_container(&self) -> bool {
        matches!(self, SourceFormat::Zip | SourceFormat::Ole)
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const PDF_MAGIC_LEN: usize = 5;
const VERSION_LEN: usize = 3; // e.g., "1.7"

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

const HEADER_LEN: u64 = 16;

/// Detect the container format of a file.
///
/// # Example
/// ```no_run
/// use rawextract::detect::{detect_format_from_path, SourceFormat};
///
/// let format = detect_format_from_path("report.xlsx").unwrap();
/// assert_eq!(format, SourceFormat::Zip);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let header = read_header(path.as_ref())?;
    detect_format_from_bytes(&header)
}

/// Detect a PDF header in a file.
pub fn detect_pdf_from_path<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let header = read_header(path.as_ref())?;
    detect_pdf_from_bytes(&header)
}

/// Detect the container format from the leading bytes of a file.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(PDF_MAGIC) {
        return detect_pdf_from_bytes(data).map(SourceFormat::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(SourceFormat::Zip);
    }
    if data.starts_with(OLE_MAGIC) {
        return Ok(SourceFormat::Ole);
    }
    Err(Error::UnknownFormat)
}

/// Detect a PDF header from bytes.
///
/// # Returns
/// * `Ok(PdfFormat)` if the data starts with a valid PDF header
/// * `Err(Error::UnknownFormat)` if the data is not a PDF
/// * `Err(Error::UnsupportedVersion)` if the version is malformed
pub fn detect_pdf_from_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC_LEN + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC_LEN..PDF_MAGIC_LEN + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Read at most [`HEADER_LEN`] bytes from the start of a file.
fn read_header(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN as usize);
    file.take(HEADER_LEN).read_to_end(&mut header)?;
    Ok(header)
}

/// Check if a version string is valid.
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3 && bytes[0].is_ascii_digit() && bytes[1] == b'.' && bytes[2].is_ascii_digit()
}

/// Check if bytes start with a valid PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_pdf_from_bytes(data).is_ok()
}

/// Check if bytes start with a workbook container header.
pub fn is_workbook_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok_and(|f| f.is_workbook_container())
}
