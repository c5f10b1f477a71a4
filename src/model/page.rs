//! Page-level types.

use serde::{Deserialize, Serialize};

/// The plain text extracted from one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, empty when the page has none
    pub text: String,
}

impl PageText {
    /// Create a page with text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create a page without extractable text.
    pub fn empty(number: u32) -> Self {
        Self::new(number, String::new())
    }

    /// Check if the page has no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
