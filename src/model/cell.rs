//! Cell-level types.

use serde::{Deserialize, Serialize};

/// The scalar content of one row/column position in a sheet.
///
/// Serialized untagged, so a row becomes a plain JSON array of
/// `null`, booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty or absent cell
    #[default]
    Empty,

    /// Boolean cell
    Bool(bool),

    /// Integer or integral numeric cell
    Int(i64),

    /// Non-integral numeric cell
    Float(f64),

    /// Text cell (cell errors such as `#DIV/0!` are kept as text)
    Text(String),

    /// Date, time or duration, already rendered as text
    DateTime(String),
}

impl CellValue {
    /// Create a numeric cell, folding integral values into [`CellValue::Int`].
    pub fn number(value: f64) -> Self {
        // 2^53: the largest range where every integer is exact in f64
        const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            CellValue::Int(value as i64)
        } else {
            CellValue::Float(value)
        }
    }

    /// Create a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Value coerced to a string; `None` for empty cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Text(s) | CellValue::DateTime(s) => Some(s.clone()),
        }
    }

    /// Render the value the way a tuple preview shows it:
    /// `None`, `True`/`False`, bare numbers and quoted strings.
    pub fn repr(&self) -> String {
        match self {
            CellValue::Empty => "None".to_string(),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => repr_float(*f),
            CellValue::Text(s) | CellValue::DateTime(s) => quote(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

fn repr_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

/// Quote a string with single quotes, switching to double quotes when the
/// text contains a single quote but no double quote.
pub(crate) fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}
