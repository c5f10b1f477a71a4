//! JSON rendering for extracted workbooks.

use crate::error::{Error, Result};
use crate::model::Workbook;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 2-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a workbook to JSON, keeping sheet order.
pub fn to_json(workbook: &Workbook, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(workbook),
        JsonFormat::Compact => serde_json::to_string(workbook),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Parse a workbook back from its JSON form.
pub fn from_json(json: &str) -> Result<Workbook> {
    serde_json::from_str(json).map_err(|e| Error::Render(format!("JSON parse error: {}", e)))
}
