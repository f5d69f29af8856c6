//! Tablescope - a searchable, paginated view over delimited text files
//!
//! This library parses delimited text (CSV by default) into a row/column
//! model, filters rows by a free-text term, computes pagination windows over
//! the result, and serializes any subset of rows back into delimited text
//! that parses to the same cells.
//!
//! # Features
//!
//! - **Quote-aware parser**: delimiters, doubled quotes and line breaks inside
//!   quoted fields
//! - **Case-insensitive search** across every cell of a row
//! - **Stable pagination**: clamped page requests and a centered page window
//! - **Round-trip export** of the current search result
//! - **Event-driven session**: immutable state records replaced per event
//!
//! # Example
//!
//! ```rust
//! use tablescope::sheet::{filter, text};
//! use tablescope::view::paginate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dataset = text::parse("name,age\nAna,30\nBea,\"25,5\"\nBanana,7")?;
//!
//! let matched = filter(dataset.rows(), "ana");
//! assert_eq!(matched.len(), 2);
//!
//! let page = paginate(matched.len(), 1, 15);
//! assert_eq!(page.total_pages, 1);
//!
//! let export = text::serialize(matched, dataset.columns());
//! assert_eq!(export, "name,age\nAna,30\nBanana,7");
//! # Ok(())
//! # }
//! ```

/// Errors, BOM handling and text decoding
pub mod common;

/// View configuration loaded from YAML
pub mod config;

/// Asynchronous source and sink boundaries
pub mod io;

/// Row/column model, search, and delimited text reading/writing
pub mod sheet;

/// Pagination, rendering and the event-driven session
pub mod view;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use config::ViewConfig;
pub use sheet::text::{TextConfig, parse, serialize};
pub use sheet::{CellValue, Columns, DataRow, Dataset, filter};
pub use view::{Event, Output, PageDescriptor, Session, paginate};
