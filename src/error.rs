//! Error types for rawextract library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rawextract operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input could not be opened or read, or output could not be written.
    FileAccess,
    /// Input bytes do not conform to the expected format.
    Format,
}

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The directory an output file should go into does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirMissing(PathBuf),

    /// The file format is not recognized.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The PDF version is not supported.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and cannot be opened without a key.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error reading a workbook.
    #[error("Spreadsheet parsing error: {0}")]
    Spreadsheet(String),

    /// A sheet listed by the workbook could not be found.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// No converter handles the given file extension.
    #[error("No converter for extension: {0}")]
    UnsupportedExtension(String),
}

impl Error {
    /// Classify the error as a file access or format problem.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) | Error::OutputDirMissing(_) => ErrorKind::FileAccess,
            _ => ErrorKind::Format,
        }
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Error::Io(e),
            _ => Error::Spreadsheet(err.to_string()),
        }
    }
}
