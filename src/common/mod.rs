//! Common types and utilities shared by the pipeline stages.
//!
//! This module provides the unified error type and the byte-level helpers
//! (BOM detection, text decoding) used at the source boundary.

// Submodule declarations
pub mod bom;
pub mod encoding;
pub mod error;

// Re-exports for convenience
pub use bom::BomKind;
pub use encoding::decode_text;
pub use error::{Error, Result};
