//! Unified error type for the tabular pipeline.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
