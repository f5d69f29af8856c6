//! Cell value type for tabular data.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Types of data that can be stored in a cell.
///
/// The parser only ever produces [`CellValue::String`] and [`CellValue::Empty`];
/// the other variants exist for rows built programmatically. Every variant has
/// a well-defined display text, which is what search and export operate on.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Absent value (missing or empty field)
    #[default]
    Empty,
    /// Boolean value
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// String value
    String(String),
}

impl CellValue {
    /// Check whether the cell is absent.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Borrow the string payload, if this is a string cell.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The text this cell is searched and exported as.
    ///
    /// `Empty` yields `""`, booleans yield `true`/`false`, integral numbers
    /// print without a fractional part.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Bool(true) => Cow::Borrowed("true"),
            CellValue::Bool(false) => Cow::Borrowed("false"),
            CellValue::Number(n) => Cow::Owned(format_number(*n)),
            CellValue::String(s) => Cow::Borrowed(s),
        }
    }

    /// Collapse an empty string into `Empty`.
    ///
    /// The delimited format cannot tell the two apart, so comparisons across a
    /// serialize/parse cycle are made on normalized values.
    pub fn normalized(&self) -> CellValue {
        match self {
            CellValue::String(s) if s.is_empty() => CellValue::Empty,
            other => other.clone(),
        }
    }
}

fn format_number(n: f64) -> String {
    // Fast path: integral values print as integers
    if n.fract() == 0.0 && n.abs() < 1e15 {
        let mut buffer = itoa::Buffer::new();
        buffer.format(n as i64).to_string()
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format(n).to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_per_variant() {
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::Bool(true).display_text(), "true");
        assert_eq!(CellValue::Bool(false).display_text(), "false");
        assert_eq!(CellValue::Number(30.0).display_text(), "30");
        assert_eq!(CellValue::Number(-4.0).display_text(), "-4");
        assert_eq!(CellValue::Number(25.5).display_text(), "25.5");
        assert_eq!(CellValue::from("Ana").display_text(), "Ana");
    }

    #[test]
    fn test_normalized() {
        assert_eq!(CellValue::from("").normalized(), CellValue::Empty);
        assert_eq!(CellValue::from("x").normalized(), CellValue::from("x"));
        assert_eq!(CellValue::from(None::<bool>), CellValue::Empty);
        assert_eq!(CellValue::from(Some(3_i64)), CellValue::Number(3.0));
    }
}
