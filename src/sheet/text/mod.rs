//! Delimited text support (CSV, TSV).
//!
//! This module turns raw delimited text into a [`Dataset`] and back. It is
//! the only place that knows about delimiters and quoting.
//!
//! # Features
//!
//! - **Quote handling**: quoted fields may contain delimiters, doubled quotes
//!   and line breaks
//! - **Lenient rows**: short records are padded, long records truncated
//! - **Round-trip**: [`serialize`] output parses back to the same cells
//!
//! # Example
//!
//! ```rust
//! use tablescope::sheet::text::{parse, serialize};
//!
//! let dataset = parse("name,age\nAna,30\nBea,\"25,5\"")?;
//! assert_eq!(dataset.columns().names(), &["name", "age"]);
//! assert_eq!(dataset.value(1, "age").unwrap().to_string(), "25,5");
//!
//! let text = serialize(dataset.rows(), dataset.columns());
//! assert_eq!(text, "name,age\nAna,30\nBea,\"25,5\"");
//! # Ok::<(), tablescope::Error>(())
//! ```

pub mod config;
pub mod formats;
pub mod parser;

pub use config::TextConfig;
pub use formats::{read_delimited, write_delimited};
pub use parser::TextParser;

use crate::common::Result;
use crate::sheet::{Columns, DataRow, Dataset};

/// Parse comma-delimited text.
///
/// # Errors
///
/// Returns [`crate::Error::EmptyInput`] when the text has no header line.
pub fn parse(raw: &str) -> Result<Dataset> {
    read_delimited(raw, &TextConfig::csv())
}

/// Serialize rows as comma-delimited text, header first.
pub fn serialize<'a, I>(rows: I, columns: &Columns) -> String
where
    I: IntoIterator<Item = &'a DataRow>,
{
    write_delimited(rows, columns, &TextConfig::csv())
}

#[cfg(test)]
mod tests;
