//! Tabular data model and the operations over it.
//!
//! This module holds the row/column model ([`Dataset`], [`Columns`],
//! [`DataRow`], [`CellValue`]), the free-text row [`filter`], and the
//! delimited text reader/writer in [`text`].
//!
//! # Quick Start
//!
//! ```rust
//! use tablescope::sheet::{filter, text};
//!
//! let dataset = text::parse("name\nAna\nBanana\nCy")?;
//! let matched = filter(dataset.rows(), "ana");
//! assert_eq!(matched.len(), 2);
//!
//! let export = text::serialize(matched, dataset.columns());
//! assert_eq!(export, "name\nAna\nBanana");
//! # Ok::<(), tablescope::Error>(())
//! ```

// Submodule declarations
pub mod dataset;
pub mod search;
pub mod text;
pub mod types;

// Re-exports
pub use dataset::{Columns, DataRow, Dataset};
pub use search::{RowMatcher, filter};
pub use types::CellValue;
